//! Geometry primitives in user space.

use std::ops::{Add, AddAssign};

use glam::DVec2;

/// A 2D coordinate in user space
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// Translate a point by a delta
impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        (DVec2::from(self) + DVec2::from(rhs)).into()
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

/// A width by height extent. Negative values are not rejected.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Dimensions { width, height }
    }

    /// Same extent on both axes
    pub fn square(side: f64) -> Self {
        Dimensions {
            width: side,
            height: side,
        }
    }
}

/// Component-wise minimum of `points`, or `None` when there are no points.
pub fn min_point(points: &[Point]) -> Option<Point> {
    points
        .iter()
        .copied()
        .map(DVec2::from)
        .reduce(DVec2::min)
        .map(Point::from)
}

/// Component-wise maximum of `points`, or `None` when there are no points.
pub fn max_point(points: &[Point]) -> Option<Point> {
    points
        .iter()
        .copied()
        .map(DVec2::from)
        .reduce(DVec2::max)
        .map(Point::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_addition_translates() {
        let mut p = Point::new(1.0, 2.0);
        p += Point::new(3.0, -4.0);
        assert_eq!(p, Point::new(4.0, -2.0));
        assert_eq!(p + Point::ORIGIN, p);
    }

    #[test]
    fn dimensions_square() {
        assert_eq!(Dimensions::square(5.0), Dimensions::new(5.0, 5.0));
    }

    #[test]
    fn min_max_are_component_wise() {
        let points = [
            Point::new(3.0, -1.0),
            Point::new(-2.0, 7.0),
            Point::new(5.0, 0.5),
        ];
        assert_eq!(min_point(&points), Some(Point::new(-2.0, -1.0)));
        assert_eq!(max_point(&points), Some(Point::new(5.0, 7.0)));
    }

    #[test]
    fn single_point_is_its_own_bound() {
        let points = [Point::new(1.5, 2.5)];
        assert_eq!(min_point(&points), Some(points[0]));
        assert_eq!(max_point(&points), Some(points[0]));
    }

    #[test]
    fn empty_input_has_no_bounds() {
        assert_eq!(min_point(&[]), None);
        assert_eq!(max_point(&[]), None);
    }

    #[test]
    #[should_panic]
    fn unwrapping_empty_bounds_panics() {
        let _ = min_point(&[]).unwrap();
    }
}
