//! The output document: an SVG envelope around already-rendered shapes.
//!
//! Shapes are rendered against the document's [`Layout`] at the moment they
//! are added; the document keeps only the resulting markup. Editing a shape
//! afterwards has no effect on what was already added.

use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::Write as _;
use std::path::PathBuf;

use crate::errors::SaveError;
use crate::layout::Layout;
use crate::log::{debug, warn};
use crate::markup::{Num, attribute, attribute_with_unit, end_tag};
use crate::shapes::Shape;

const XML_DECLARATION: &str = r#"<?xml version="1.0" standalone="no"?>"#;
const DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// An append-only SVG document bound to a destination path
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    layout: Layout,
    fragments: Vec<String>,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, layout: Layout) -> Self {
        if layout.scale == 0.0 || !layout.scale.is_finite() {
            warn!(scale = layout.scale, "layout scale collapses every position");
        }
        Document {
            path: path.into(),
            layout,
            fragments: Vec::new(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Number of shapes added so far
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Render `shape` now and append it, returning `self` for chaining.
    pub fn add<S: Shape + ?Sized>(&mut self, shape: &S) -> &mut Self {
        self.push(shape);
        self
    }

    /// Render `shape` now and append it.
    pub fn push<S: Shape + ?Sized>(&mut self, shape: &S) {
        let fragment = shape.to_svg(&self.layout);
        debug!(
            element = shape.element_name(),
            bytes = fragment.len(),
            "appended shape"
        );
        self.fragments.push(fragment);
    }

    /// Write the complete document text into `out`.
    pub fn write_to(&self, out: &mut impl fmt::Write) -> fmt::Result {
        let unit = self.layout.unit.suffix();
        let mut root = String::from("<svg");
        attribute_with_unit(&mut root, "width", Num(self.layout.dimensions.width), unit);
        attribute_with_unit(&mut root, "height", Num(self.layout.dimensions.height), unit);
        attribute(&mut root, "xmlns", SVG_NS);
        attribute(&mut root, "version", "1.1");
        root.push_str(">\n");

        writeln!(out, "{XML_DECLARATION}")?;
        writeln!(out, "{DOCTYPE}")?;
        out.write_str(&root)?;
        for fragment in &self.fragments {
            out.write_str(fragment)?;
        }
        let mut close = String::new();
        end_tag(&mut close, "svg");
        out.write_str(&close)
    }

    /// Write the document to its destination path.
    ///
    /// The text is fully rendered before the file is opened, so a failure to
    /// open leaves nothing behind.
    pub fn save(&self) -> Result<(), SaveError> {
        let text = self.to_string();
        debug!(path = %self.path.display(), bytes = text.len(), "saving document");

        let mut file = File::create(&self.path).map_err(|source| SaveError::Create {
            path: self.path.clone(),
            source,
        })?;
        file.write_all(text.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| SaveError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug!(shapes = self.fragments.len(), "rendering document");
        self.write_to(f)
    }
}

impl<S: Shape> Extend<S> for Document {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for shape in iter {
            self.push(&shape);
        }
    }
}
