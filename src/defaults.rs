//! Default layout and style settings

use crate::geometry::{Dimensions, Point};
use crate::layout::{Origin, Unit};

pub const CANVAS: Dimensions = Dimensions {
    width: 400.0,
    height: 300.0,
};
pub const UNIT: Unit = Unit::Mm;
pub const ORIGIN: Origin = Origin::BottomLeft;
pub const SCALE: f64 = 1.0;
pub const ORIGIN_OFFSET: Point = Point::ORIGIN;

pub const FONT_SIZE: f64 = 12.0;
pub const FONT_FAMILY: &str = "Verdana";

/// Negative width means "draw no stroke"
pub const NO_STROKE_WIDTH: f64 = -1.0;
