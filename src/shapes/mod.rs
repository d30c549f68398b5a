//! Shape types for SVG output
//!
//! Each shape owns its geometry in user space and knows how to:
//! - Name its SVG element
//! - Write its geometry attributes through a [`Layout`]
//! - Translate itself in place
//!
//! The fill/stroke/description plumbing and the element envelope are shared
//! through the [`Shape`] trait's provided methods. [`Element`] is the closed
//! set of all shapes, for callers that want to keep mixed shapes together.

mod circle;
mod ellipse;
mod line;
mod path;
mod poly;
mod rectangle;
mod text;

use enum_dispatch::enum_dispatch;

use crate::geometry::Point;
use crate::layout::Layout;
use crate::markup::{close_tag, end_tag, escape_xml, open_start_tag};
use crate::style::{Fill, Stroke};

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use path::Path;
pub use poly::{Polygon, Polyline};
pub use rectangle::Rectangle;
pub use text::Text;

/// Style and description shared by every shape
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Appearance {
    fill: Fill,
    stroke: Stroke,
    description: String,
}

impl Appearance {
    pub fn new(fill: Fill, stroke: Stroke) -> Self {
        Appearance {
            fill,
            stroke,
            description: String::new(),
        }
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape {
    /// SVG element name, e.g. `circle`
    fn element_name(&self) -> &'static str;

    /// Write the geometry attributes, already mapped through `layout`.
    fn write_geometry(&self, layout: &Layout, out: &mut String);

    /// Translate all owned geometry by `delta` (user-space units).
    fn offset(&mut self, delta: Point);

    fn appearance(&self) -> &Appearance;

    fn appearance_mut(&mut self) -> &mut Appearance;

    /// Text written as the element body, before the description.
    fn write_content(&self, _out: &mut String) {}

    fn description(&self) -> &str {
        self.appearance().description()
    }

    fn set_description(&mut self, description: &str) {
        self.appearance_mut().description = description.to_string();
    }

    /// Write the complete element, including its (possibly empty) `<desc>` child.
    fn write_svg(&self, layout: &Layout, out: &mut String) {
        let name = self.element_name();
        let appearance = self.appearance();

        open_start_tag(out, name);
        self.write_geometry(layout, out);
        appearance.fill.write_svg(layout, out);
        appearance.stroke.write_svg(layout, out);
        close_tag(out);
        self.write_content(out);
        out.push('\n');

        open_start_tag(out, "desc");
        close_tag(out);
        escape_xml(out, &appearance.description);
        end_tag(out, "desc");
        end_tag(out, name);
    }

    fn to_svg(&self, layout: &Layout) -> String {
        let mut out = String::new();
        self.write_svg(layout, &mut out);
        out
    }
}

/// Any shape
#[enum_dispatch(Shape)]
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Circle,
    Ellipse,
    Rectangle,
    Line,
    Polygon,
    Polyline,
    Path,
    Text,
}

/// `with_stroke` and `with_description` builders
macro_rules! impl_stroke_builders {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                pub fn with_stroke(mut self, stroke: Stroke) -> Self {
                    self.appearance.stroke = stroke;
                    self
                }

                pub fn with_description(mut self, description: impl Into<String>) -> Self {
                    self.appearance.description = description.into();
                    self
                }
            }
        )*
    };
}

/// `with_fill` builder, for shapes that have an interior
macro_rules! impl_fill_builders {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                pub fn with_fill(mut self, fill: impl Into<Fill>) -> Self {
                    self.appearance.fill = fill.into();
                    self
                }
            }
        )*
    };
}

impl_stroke_builders!(Circle, Ellipse, Rectangle, Line, Polygon, Polyline, Path, Text);
impl_fill_builders!(Circle, Ellipse, Rectangle, Polygon, Polyline, Path, Text);
