//! Coordinate mapping from user space to SVG output space.
//!
//! SVG puts its origin in the top-left corner with y growing downward. A
//! [`Layout`] lets callers pin their origin to any corner, shift it by an
//! offset and scale everything uniformly. Positions go through
//! [`Layout::transform_x`] / [`Layout::transform_y`]; magnitudes (radii,
//! widths, font sizes) only through [`Layout::transform_scale`].

use std::fmt;

use crate::defaults;
use crate::geometry::{Dimensions, Point};

/// Corner of the canvas the user-space origin is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    TopLeft,
    #[default]
    BottomLeft,
    TopRight,
    BottomRight,
}

impl Origin {
    fn is_right(self) -> bool {
        matches!(self, Origin::TopRight | Origin::BottomRight)
    }

    fn is_bottom(self) -> bool {
        matches!(self, Origin::BottomLeft | Origin::BottomRight)
    }
}

/// Measurement unit of the canvas size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    Px,
    #[default]
    Mm,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Mm => "mm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Canvas size, unit, origin corner, scale and origin offset of a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub dimensions: Dimensions,
    pub unit: Unit,
    pub origin: Origin,
    pub scale: f64,
    pub origin_offset: Point,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            dimensions: defaults::CANVAS,
            unit: defaults::UNIT,
            origin: defaults::ORIGIN,
            scale: defaults::SCALE,
            origin_offset: defaults::ORIGIN_OFFSET,
        }
    }
}

impl Layout {
    pub fn new(
        dimensions: Dimensions,
        unit: Unit,
        origin: Origin,
        scale: f64,
        origin_offset: Point,
    ) -> Self {
        Layout {
            dimensions,
            unit,
            origin,
            scale,
            origin_offset,
        }
    }

    /// Default layout with the given canvas size
    pub fn with_dimensions(dimensions: Dimensions) -> Self {
        Layout {
            dimensions,
            ..Layout::default()
        }
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_origin_offset(mut self, origin_offset: Point) -> Self {
        self.origin_offset = origin_offset;
        self
    }

    /// Map a user-space x coordinate to output space.
    pub fn transform_x(&self, x: f64) -> f64 {
        if self.origin.is_right() {
            self.dimensions.width - (x + self.origin_offset.x) * self.scale
        } else {
            (self.origin_offset.x + x) * self.scale
        }
    }

    /// Map a user-space y coordinate to output space.
    pub fn transform_y(&self, y: f64) -> f64 {
        if self.origin.is_bottom() {
            self.dimensions.height - (y + self.origin_offset.y) * self.scale
        } else {
            (self.origin_offset.y + y) * self.scale
        }
    }

    /// Scale a length that has magnitude but no position.
    pub fn transform_scale(&self, value: f64) -> f64 {
        value * self.scale
    }

    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(self.transform_x(p.x), self.transform_y(p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(origin: Origin) -> Layout {
        Layout::with_dimensions(Dimensions::new(200.0, 100.0))
            .with_origin(origin)
            .with_scale(2.0)
            .with_origin_offset(Point::new(1.0, 3.0))
    }

    #[test]
    fn default_layout() {
        let l = Layout::default();
        assert_eq!(l.dimensions, Dimensions::new(400.0, 300.0));
        assert_eq!(l.unit, Unit::Mm);
        assert_eq!(l.origin, Origin::BottomLeft);
        assert_eq!(l.scale, 1.0);
        assert_eq!(l.origin_offset, Point::ORIGIN);
    }

    #[test]
    fn top_left_is_plain_offset_and_scale() {
        let l = layout(Origin::TopLeft);
        assert_eq!(l.transform_x(4.0), 10.0);
        assert_eq!(l.transform_y(4.0), 14.0);
    }

    #[test]
    fn bottom_left_flips_y_only() {
        let l = layout(Origin::BottomLeft);
        assert_eq!(l.transform_x(4.0), 10.0);
        assert_eq!(l.transform_y(4.0), 100.0 - 14.0);
    }

    #[test]
    fn top_right_flips_x_only() {
        let l = layout(Origin::TopRight);
        assert_eq!(l.transform_x(4.0), 200.0 - 10.0);
        assert_eq!(l.transform_y(4.0), 14.0);
    }

    #[test]
    fn bottom_right_flips_both() {
        let l = layout(Origin::BottomRight);
        assert_eq!(
            l.transform_point(Point::new(4.0, 4.0)),
            Point::new(190.0, 86.0)
        );
    }

    #[test]
    fn scale_ignores_origin_and_offset() {
        for origin in [
            Origin::TopLeft,
            Origin::BottomLeft,
            Origin::TopRight,
            Origin::BottomRight,
        ] {
            assert_eq!(layout(origin).transform_scale(7.5), 15.0);
        }
    }

    #[test]
    fn zero_scale_collapses_to_edge() {
        let l = Layout::with_dimensions(Dimensions::new(50.0, 40.0)).with_scale(0.0);
        assert_eq!(l.transform_x(123.0), 0.0);
        assert_eq!(l.transform_y(123.0), 40.0);
    }

    #[test]
    fn unit_suffix() {
        assert_eq!(Unit::Px.to_string(), "px");
        assert_eq!(Unit::Mm.suffix(), "mm");
    }
}
