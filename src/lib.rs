//! Write SVG documents from simple geometric shapes.
//!
//! Shapes are described in user space and mapped to SVG output space by a
//! [`Layout`]: the user-space origin can sit in any corner of the canvas,
//! be offset, and be scaled uniformly.
//!
//! ```
//! use svgdoc::{Circle, Dimensions, Document, Layout, NamedColor, Origin, Point, Unit};
//!
//! let layout = Layout::with_dimensions(Dimensions::new(100.0, 100.0))
//!     .with_unit(Unit::Px)
//!     .with_origin(Origin::TopLeft);
//! let mut doc = Document::new("circle.svg", layout);
//! doc.add(&Circle::new(Point::new(50.0, 50.0), 10.0, NamedColor::Red));
//!
//! let svg = doc.to_string();
//! assert!(svg.contains(r#"<circle cx="50" cy="50" r="10" fill="rgb(255,0,0)">"#));
//! ```

pub mod defaults;
pub mod document;
pub mod errors;
pub mod geometry;
pub mod layout;
mod log;
pub mod markup;
pub mod shapes;
pub mod style;

pub use document::Document;
pub use errors::{ColorError, SaveError};
pub use geometry::{Dimensions, Point, max_point, min_point};
pub use layout::{Layout, Origin, Unit};
pub use shapes::{
    Appearance, Circle, Element, Ellipse, Line, Path, Polygon, Polyline, Rectangle, Shape, Text,
};
pub use style::{Color, Fill, Font, NamedColor, Stroke};
