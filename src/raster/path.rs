//! Ordered cell sequences produced by rasterization.

use crate::geometry::Point;

/// An ordered sequence of grid cells.
///
/// Order is the walk order of the rasterizer. A `Path` built by
/// [`rasterize_line`](super::rasterize_line) is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the path has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First cell in walk order.
    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last cell in walk order.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Iterate over the cells in walk order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Borrow the cells as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// True if `point` is one of the cells.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Consume the path, returning its cells.
    #[must_use]
    pub fn into_vec(self) -> Vec<Point> {
        self.points
    }

    /// True if every consecutive pair of cells are neighbours (or equal).
    #[must_use]
    pub fn is_eight_connected(&self) -> bool {
        self.points.windows(2).all(|pair| pair[0].touches(pair[1]))
    }

    /// The same cells in reverse order.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.points.reverse();
        self
    }

    /// Reorder so the walk begins at `start` when `start` is the last cell.
    ///
    /// The rasterizer always walks along increasing dominant-axis
    /// coordinates. Callers that need the cells in argument order pass the
    /// requested start point here. Paths that already begin at `start`, or
    /// do not end at it, are returned unchanged.
    #[must_use]
    pub fn oriented_from(self, start: Point) -> Self {
        if self.first() != Some(start) && self.last() == Some(start) {
            self.reversed()
        } else {
            self
        }
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl From<Path> for Vec<Point> {
    fn from(path: Path) -> Self {
        path.points
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::rasterize_line;

    #[test]
    fn test_empty_path() {
        let path = Path::new();
        assert!(path.is_empty());
        assert_eq!(path.first(), None);
        assert_eq!(path.last(), None);
        assert!(path.is_eight_connected());
    }

    #[test]
    fn test_contains() {
        let path = rasterize_line(0, 0, 4, 2);
        assert!(path.contains(Point::new(2, 1)));
        assert!(!path.contains(Point::new(2, 0)));
    }

    #[test]
    fn test_eight_connected_detects_gap() {
        let path = Path::from(vec![Point::new(0, 0), Point::new(2, 0)]);
        assert!(!path.is_eight_connected());
    }

    #[test]
    fn test_reversed() {
        let path = rasterize_line(0, 0, 2, 0).reversed();
        assert_eq!(path.into_vec(), vec![Point::new(2, 0), Point::new(1, 0), Point::new(0, 0)]);
    }

    #[test]
    fn test_oriented_from_flips_normalized_walk() {
        let requested_start = Point::new(0, 0);
        let path = rasterize_line(0, 0, -4, 2).oriented_from(requested_start);
        assert_eq!(path.first(), Some(requested_start));
        assert_eq!(path.last(), Some(Point::new(-4, 2)));
    }

    #[test]
    fn test_oriented_from_keeps_forward_walk() {
        let path = rasterize_line(0, 0, 4, 2);
        assert_eq!(path.clone().oriented_from(Point::new(0, 0)), path);
        // Unrelated start leaves the path alone
        assert_eq!(path.clone().oriented_from(Point::new(9, 9)), path);
    }

    #[test]
    fn test_iteration_forms() {
        let path = rasterize_line(0, 0, 0, 2);
        let borrowed: Vec<i32> = (&path).into_iter().map(|p| p.y).collect();
        assert_eq!(borrowed, vec![0, 1, 2]);
        let owned: Vec<Point> = path.into_iter().collect();
        assert_eq!(owned.len(), 3);
    }
}
