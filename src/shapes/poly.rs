//! Point-list shapes: closed polygons and open polylines.

use crate::geometry::Point;
use crate::layout::Layout;
use crate::markup::coordinate_pair;

use super::{Appearance, Shape};

/// Write ` points="x,y x,y "` in insertion order.
fn write_points(points: &[Point], layout: &Layout, out: &mut String) {
    out.push_str(" points=\"");
    for p in points {
        coordinate_pair(out, layout.transform_x(p.x), layout.transform_y(p.y));
    }
    out.push('"');
}

fn offset_points(points: &mut [Point], delta: Point) {
    for p in points {
        *p += delta;
    }
}

macro_rules! point_list_shape {
    ($(#[$meta:meta])* $name:ident, $element:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Default)]
        pub struct $name {
            pub points: Vec<Point>,
            pub(super) appearance: Appearance,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
                Self {
                    points: points.into_iter().collect(),
                    appearance: Appearance::default(),
                }
            }

            /// Append a point, returning `self` for chaining.
            pub fn push(&mut self, point: Point) -> &mut Self {
                self.points.push(point);
                self
            }
        }

        impl Extend<Point> for $name {
            fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
                self.points.extend(iter);
            }
        }

        impl Shape for $name {
            fn element_name(&self) -> &'static str {
                $element
            }

            fn write_geometry(&self, layout: &Layout, out: &mut String) {
                write_points(&self.points, layout, out);
            }

            fn offset(&mut self, delta: Point) {
                offset_points(&mut self.points, delta);
            }

            fn appearance(&self) -> &Appearance {
                &self.appearance
            }

            fn appearance_mut(&mut self) -> &mut Appearance {
                &mut self.appearance
            }
        }
    };
}

point_list_shape!(
    /// A closed shape through an ordered list of points
    Polygon,
    "polygon"
);

point_list_shape!(
    /// An open run of straight segments through an ordered list of points
    Polyline,
    "polyline"
);
