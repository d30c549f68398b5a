use crate::geometry::Point;
use crate::layout::Layout;
use crate::markup::{Num, attribute, escape_xml};
use crate::style::Font;

use super::{Appearance, Shape};

/// A run of text anchored at `origin`
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub origin: Point,
    pub content: String,
    pub font: Font,
    pub(super) appearance: Appearance,
}

impl Text {
    pub fn new(origin: Point, content: impl Into<String>) -> Self {
        Text {
            origin,
            content: content.into(),
            font: Font::default(),
            appearance: Appearance::default(),
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }
}

impl Shape for Text {
    fn element_name(&self) -> &'static str {
        "text"
    }

    fn write_geometry(&self, layout: &Layout, out: &mut String) {
        attribute(out, "x", Num(layout.transform_x(self.origin.x)));
        attribute(out, "y", Num(layout.transform_y(self.origin.y)));
        self.font.write_svg(layout, out);
    }

    fn write_content(&self, out: &mut String) {
        escape_xml(out, &self.content);
    }

    fn offset(&mut self, delta: Point) {
        self.origin += delta;
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
    use crate::layout::Origin;
    use crate::style::NamedColor;

    #[test]
    fn content_is_the_element_body() {
        let layout = Layout::with_dimensions(Dimensions::new(100.0, 100.0))
            .with_origin(Origin::TopLeft)
            .with_scale(0.5);
        let text = Text::new(Point::new(20.0, 40.0), "Fish & Chips")
            .with_font(Font::new(20.0, "Courier"))
            .with_fill(NamedColor::Black);
        assert_eq!(
            text.to_svg(&layout),
            "<text x=\"10\" y=\"20\" font-size=\"10\" font-family=\"Courier\" fill=\"rgb(0,0,0)\">Fish &amp; Chips\n<desc></desc>\n</text>\n"
        );
    }

    #[test]
    fn offset_moves_anchor() {
        let mut text = Text::new(Point::new(1.0, 1.0), "a");
        text.offset(Point::new(1.0, 1.0));
        assert_eq!(text.origin, Point::new(2.0, 2.0));
    }
}
