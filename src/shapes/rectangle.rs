use crate::geometry::Point;
use crate::layout::Layout;
use crate::markup::{Num, attribute};

use super::{Appearance, Shape};

/// A rectangle anchored at its `edge` corner
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub edge: Point,
    pub width: f64,
    pub height: f64,
    pub(super) appearance: Appearance,
}

impl Rectangle {
    pub fn new(edge: Point, width: f64, height: f64) -> Self {
        Rectangle {
            edge,
            width,
            height,
            appearance: Appearance::default(),
        }
    }
}

impl Shape for Rectangle {
    fn element_name(&self) -> &'static str {
        "rect"
    }

    fn write_geometry(&self, layout: &Layout, out: &mut String) {
        attribute(out, "x", Num(layout.transform_x(self.edge.x)));
        attribute(out, "y", Num(layout.transform_y(self.edge.y)));
        attribute(out, "width", Num(layout.transform_scale(self.width)));
        attribute(out, "height", Num(layout.transform_scale(self.height)));
    }

    fn offset(&mut self, delta: Point) {
        self.edge += delta;
    }

    fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    fn appearance_mut(&mut self) -> &mut Appearance {
        &mut self.appearance
    }
}
