use crate::geometry::Point;
use crate::layout::Layout;
use crate::markup::{Num, attribute};
use crate::style::Fill;

use super::{Appearance, Shape};

/// A circle
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub(super) appearance: Appearance,
}

impl Circle {
    pub fn new(center: Point, radius: f64, fill: impl Into<Fill>) -> Self {
        Circle {
            center,
            radius,
            appearance: Appearance {
                fill: fill.into(),
                ..Appearance::default()
            },
        }
    }
}

impl Shape for Circle {
    fn element_name(&self) -> &'static str {
        "circle"
    }

    fn write_geometry(&self, layout: &Layout, out: &mut String) {
        attribute(out, "cx", Num(layout.transform_x(self.center.x)));
        attribute(out, "cy", Num(layout.transform_y(self.center.y)));
        attribute(out, "r", Num(layout.transform_scale(self.radius)));
    }

    fn offset(&mut self, delta: Point) {
        self.center += delta;
    }

    fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    fn appearance_mut(&mut self) -> &mut Appearance {
        &mut self.appearance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Dimensions;
    use crate::style::{NamedColor, Stroke};

    #[test]
    fn bottom_left_origin_flips_center() {
        let layout = Layout::with_dimensions(Dimensions::new(100.0, 80.0)).with_scale(2.0);
        let circle = Circle::new(Point::new(10.0, 5.0), 3.0, NamedColor::Blue);
        let mut out = String::new();
        circle.write_geometry(&layout, &mut out);
        assert_eq!(out, r#" cx="20" cy="70" r="6""#);
    }

    #[test]
    fn offset_moves_center_only() {
        let mut circle = Circle::new(Point::new(1.0, 1.0), 3.0, NamedColor::Blue);
        circle.offset(Point::new(2.0, -1.0));
        circle.offset(Point::new(0.5, 0.5));
        assert_eq!(circle.center, Point::new(3.5, 0.5));
        assert_eq!(circle.radius, 3.0);
    }

    #[test]
    fn stroke_follows_fill() {
        let circle = Circle::new(Point::ORIGIN, 1.0, NamedColor::White)
            .with_stroke(Stroke::new(0.5, NamedColor::Black));
        let svg = circle.to_svg(&Layout::default());
        assert!(svg.starts_with(
            r#"<circle cx="0" cy="300" r="1" fill="rgb(255,255,255)" stroke-width="0.5" stroke="rgb(0,0,0)">"#
        ));
    }
}
