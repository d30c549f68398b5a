//! Fill, stroke and font descriptors and the colors they carry.
//!
//! Each descriptor writes itself as a run of attributes for a shape's
//! opening tag. Only lengths (stroke width, font size) go through the
//! layout; colors and names are written literally.

use std::fmt;
use std::str::FromStr;

use crate::defaults;
use crate::errors::ColorError;
use crate::layout::Layout;
use crate::markup::{Num, attribute, escape_xml};

/// An RGB color, or no color at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Transparent,
    Rgb(u8, u8, u8),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Look up a color by its symbolic name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        name.parse::<NamedColor>().map(Color::from)
    }

    pub fn is_transparent(self) -> bool {
        matches!(self, Color::Transparent)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Transparent => f.write_str("none"),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
        }
    }
}

/// Symbolic color presets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamedColor {
    Transparent,
    Aqua,
    Black,
    Blue,
    Brown,
    Cyan,
    Fuchsia,
    Green,
    Lime,
    Magenta,
    Orange,
    Purple,
    Red,
    Silver,
    White,
    Yellow,
}

impl NamedColor {
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Transparent,
        NamedColor::Aqua,
        NamedColor::Black,
        NamedColor::Blue,
        NamedColor::Brown,
        NamedColor::Cyan,
        NamedColor::Fuchsia,
        NamedColor::Green,
        NamedColor::Lime,
        NamedColor::Magenta,
        NamedColor::Orange,
        NamedColor::Purple,
        NamedColor::Red,
        NamedColor::Silver,
        NamedColor::White,
        NamedColor::Yellow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Transparent => "Transparent",
            NamedColor::Aqua => "Aqua",
            NamedColor::Black => "Black",
            NamedColor::Blue => "Blue",
            NamedColor::Brown => "Brown",
            NamedColor::Cyan => "Cyan",
            NamedColor::Fuchsia => "Fuchsia",
            NamedColor::Green => "Green",
            NamedColor::Lime => "Lime",
            NamedColor::Magenta => "Magenta",
            NamedColor::Orange => "Orange",
            NamedColor::Purple => "Purple",
            NamedColor::Red => "Red",
            NamedColor::Silver => "Silver",
            NamedColor::White => "White",
            NamedColor::Yellow => "Yellow",
        }
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        match named {
            NamedColor::Transparent => Color::Transparent,
            NamedColor::Aqua | NamedColor::Cyan => Color::rgb(0, 255, 255),
            NamedColor::Black => Color::rgb(0, 0, 0),
            NamedColor::Blue => Color::rgb(0, 0, 255),
            NamedColor::Brown => Color::rgb(165, 42, 42),
            NamedColor::Fuchsia | NamedColor::Magenta => Color::rgb(255, 0, 255),
            NamedColor::Green => Color::rgb(0, 128, 0),
            NamedColor::Lime => Color::rgb(0, 255, 0),
            NamedColor::Orange => Color::rgb(255, 165, 0),
            NamedColor::Purple => Color::rgb(128, 0, 128),
            NamedColor::Red => Color::rgb(255, 0, 0),
            NamedColor::Silver => Color::rgb(192, 192, 192),
            NamedColor::White => Color::rgb(255, 255, 255),
            NamedColor::Yellow => Color::rgb(255, 255, 0),
        }
    }
}

impl FromStr for NamedColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NamedColor::ALL
            .into_iter()
            .find(|named| named.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColorError::UnknownName {
                name: s.to_string(),
            })
    }
}

/// Interior paint of a shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Fill {
    pub color: Color,
}

impl Fill {
    pub fn new(color: impl Into<Color>) -> Self {
        Fill {
            color: color.into(),
        }
    }

    pub fn write_svg(&self, _layout: &Layout, out: &mut String) {
        attribute(out, "fill", self.color);
    }

    pub fn to_svg(&self, layout: &Layout) -> String {
        let mut out = String::new();
        self.write_svg(layout, &mut out);
        out
    }
}

impl From<Color> for Fill {
    fn from(color: Color) -> Self {
        Fill { color }
    }
}

impl From<NamedColor> for Fill {
    fn from(named: NamedColor) -> Self {
        Fill::new(named)
    }
}

/// Outline of a shape.
///
/// A negative width is the "no stroke" sentinel: nothing at all is written.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
    pub non_scaling: bool,
}

impl Default for Stroke {
    fn default() -> Self {
        Stroke::none()
    }
}

impl Stroke {
    pub fn new(width: f64, color: impl Into<Color>) -> Self {
        Stroke {
            width,
            color: color.into(),
            non_scaling: false,
        }
    }

    pub fn none() -> Self {
        Stroke {
            width: defaults::NO_STROKE_WIDTH,
            color: Color::Transparent,
            non_scaling: false,
        }
    }

    /// Keep the on-screen stroke width fixed when the SVG is zoomed.
    pub fn non_scaling(mut self) -> Self {
        self.non_scaling = true;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.width >= 0.0
    }

    pub fn write_svg(&self, layout: &Layout, out: &mut String) {
        if !self.is_visible() {
            return;
        }
        attribute(out, "stroke-width", Num(layout.transform_scale(self.width)));
        attribute(out, "stroke", self.color);
        if self.non_scaling {
            attribute(out, "vector-effect", "non-scaling-stroke");
        }
    }

    pub fn to_svg(&self, layout: &Layout) -> String {
        let mut out = String::new();
        self.write_svg(layout, &mut out);
        out
    }
}

/// Font of a text element
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub size: f64,
    pub family: String,
}

impl Default for Font {
    fn default() -> Self {
        Font {
            size: defaults::FONT_SIZE,
            family: defaults::FONT_FAMILY.to_string(),
        }
    }
}

impl Font {
    pub fn new(size: f64, family: impl Into<String>) -> Self {
        Font {
            size,
            family: family.into(),
        }
    }

    pub fn write_svg(&self, layout: &Layout, out: &mut String) {
        attribute(out, "font-size", Num(layout.transform_scale(self.size)));
        out.push_str(" font-family=\"");
        escape_xml(out, &self.family);
        out.push('"');
    }

    pub fn to_svg(&self, layout: &Layout) -> String {
        let mut out = String::new();
        self.write_svg(layout, &mut out);
        out
    }
}
