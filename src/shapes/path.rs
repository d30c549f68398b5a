use crate::geometry::Point;
use crate::layout::Layout;
use crate::markup::coordinate_pair;

use super::{Appearance, Shape};

/// A set of closed straight-segment sub-paths, filled with the even-odd rule.
///
/// Points are always appended to the last sub-path. Empty sub-paths are
/// skipped on output.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    sub_paths: Vec<Vec<Point>>,
    pub(super) appearance: Appearance,
}

impl Default for Path {
    fn default() -> Self {
        Path {
            sub_paths: vec![Vec::new()],
            appearance: Appearance::default(),
        }
    }
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point to the current sub-path.
    pub fn push(&mut self, point: Point) -> &mut Self {
        match self.sub_paths.last_mut() {
            Some(current) => current.push(point),
            None => self.sub_paths.push(vec![point]),
        }
        self
    }

    /// Start a new sub-path, unless the current one is still empty.
    pub fn start_sub_path(&mut self) -> &mut Self {
        if self.sub_paths.last().is_none_or(|current| !current.is_empty()) {
            self.sub_paths.push(Vec::new());
        }
        self
    }

    pub fn sub_paths(&self) -> &[Vec<Point>] {
        &self.sub_paths
    }
}

impl Extend<Point> for Path {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.push(point);
        }
    }
}

impl Shape for Path {
    fn element_name(&self) -> &'static str {
        "path"
    }

    fn write_geometry(&self, layout: &Layout, out: &mut String) {
        out.push_str(" d=\"");
        for sub_path in self.sub_paths.iter().filter(|s| !s.is_empty()) {
            out.push('M');
            for p in sub_path {
                coordinate_pair(out, layout.transform_x(p.x), layout.transform_y(p.y));
            }
            out.push_str("z ");
        }
        out.push_str("\" fill-rule=\"evenodd\"");
    }

    fn offset(&mut self, delta: Point) {
        for p in self.sub_paths.iter_mut().flatten() {
            *p += delta;
        }
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

    fn top_left() -> Layout {
        Layout::with_dimensions(Dimensions::new(100.0, 100.0)).with_origin(Origin::TopLeft)
    }

    fn geometry(path: &Path) -> String {
        let mut out = String::new();
        path.write_geometry(&top_left(), &mut out);
        out
    }

    #[test]
    fn single_sub_path() {
        let mut path = Path::new();
        path.push(Point::new(0.0, 0.0))
            .push(Point::new(10.0, 0.0))
            .push(Point::new(10.0, 10.0));
        assert_eq!(geometry(&path), r#" d="M0,0 10,0 10,10 z " fill-rule="evenodd""#);
    }

    #[test]
    fn several_sub_paths() {
        let mut path = Path::new();
        path.extend([Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0)]);
        path.start_sub_path()
            .push(Point::new(1.0, 1.0))
            .push(Point::new(2.0, 1.0));
        assert_eq!(
            geometry(&path),
            r#" d="M0,0 4,0 0,4 z M1,1 2,1 z " fill-rule="evenodd""#
        );
    }

    #[test]
    fn empty_sub_paths_are_not_duplicated_or_written() {
        let mut path = Path::new();
        path.start_sub_path().start_sub_path();
        assert_eq!(path.sub_paths().len(), 1);
        assert_eq!(geometry(&path), r#" d="" fill-rule="evenodd""#);

        path.push(Point::new(1.0, 2.0)).start_sub_path();
        assert_eq!(path.sub_paths().len(), 2);
        assert_eq!(geometry(&path), r#" d="M1,2 z " fill-rule="evenodd""#);
    }

    #[test]
    fn offset_reaches_every_sub_path() {
        let mut path = Path::new();
        path.push(Point::new(0.0, 0.0));
        path.start_sub_path().push(Point::new(5.0, 5.0));
        path.offset(Point::new(1.0, -1.0));
        assert_eq!(
            path.sub_paths(),
            [vec![Point::new(1.0, -1.0)], vec![Point::new(6.0, 4.0)]]
        );
    }
}
