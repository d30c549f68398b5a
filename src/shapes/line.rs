use crate::geometry::Point;
use crate::layout::Layout;
use crate::markup::{Num, attribute};

use super::{Appearance, Shape};

/// A straight line segment. Lines have no interior, so their fill is always transparent.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub(super) appearance: Appearance,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Line {
            start,
            end,
            appearance: Appearance::default(),
        }
    }
}

impl Shape for Line {
    fn element_name(&self) -> &'static str {
        "line"
    }

    fn write_geometry(&self, layout: &Layout, out: &mut String) {
        attribute(out, "x1", Num(layout.transform_x(self.start.x)));
        attribute(out, "y1", Num(layout.transform_y(self.start.y)));
        attribute(out, "x2", Num(layout.transform_x(self.end.x)));
        attribute(out, "y2", Num(layout.transform_y(self.end.y)));
    }

    fn offset(&mut self, delta: Point) {
        self.start += delta;
        self.end += delta;
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
    use crate::layout::Origin;
    use crate::style::{NamedColor, Stroke};

    #[test]
    fn line_is_never_filled() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0))
            .with_stroke(Stroke::new(1.0, NamedColor::Green));
        let layout = Layout::default().with_origin(Origin::TopLeft);
        assert_eq!(
            line.to_svg(&layout),
            "<line x1=\"0\" y1=\"0\" x2=\"10\" y2=\"10\" fill=\"none\" stroke-width=\"1\" stroke=\"rgb(0,128,0)\">\n<desc></desc>\n</line>\n"
        );
    }

    #[test]
    fn offset_moves_both_ends() {
        let mut line = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        line.offset(Point::new(1.0, 2.0));
        assert_eq!(line.start, Point::new(1.0, 2.0));
        assert_eq!(line.end, Point::new(11.0, 12.0));
    }
}
