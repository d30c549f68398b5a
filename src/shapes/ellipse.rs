use crate::geometry::Point;
use crate::layout::Layout;
use crate::markup::{Num, attribute};

use super::{Appearance, Shape};

/// An axis-aligned ellipse, built from its full width and height
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipse {
    pub center: Point,
    pub radius_width: f64,
    pub radius_height: f64,
    pub(super) appearance: Appearance,
}

impl Ellipse {
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Ellipse {
            center,
            radius_width: width / 2.0,
            radius_height: height / 2.0,
            appearance: Appearance::default(),
        }
    }
}

impl Shape for Ellipse {
    fn element_name(&self) -> &'static str {
        "ellipse"
    }

    fn write_geometry(&self, layout: &Layout, out: &mut String) {
        attribute(out, "cx", Num(layout.transform_x(self.center.x)));
        attribute(out, "cy", Num(layout.transform_y(self.center.y)));
        attribute(out, "rx", Num(layout.transform_scale(self.radius_width)));
        attribute(out, "ry", Num(layout.transform_scale(self.radius_height)));
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
