//! Integer grid geometry.
//!
//! Provides the point and segment types consumed and produced by the
//! rasterizer, plus the DBN paper coordinate conventions.
//!
//! DBN paper is a 101×101 grid addressed `0..=100` on both axes with the
//! origin at the bottom-left and y growing upwards. Image buffers use a
//! top-left origin with y growing downwards; [`Point::to_image`] and
//! [`Point::from_image`] convert between the two.

use std::fmt;

use crate::raster::{LineCells, Path};

/// Largest coordinate on DBN paper along either axis.
pub const PAPER_MAX: i32 = 100;

/// A cell on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: the number of 8-connected steps to `other`.
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }

    /// True if `other` is this point or one of its eight neighbours.
    #[must_use]
    pub fn touches(self, other: Self) -> bool {
        self.chebyshev_distance(other) <= 1
    }

    /// True if the point lies on DBN paper.
    #[must_use]
    pub fn is_on_paper(self) -> bool {
        (0..=PAPER_MAX).contains(&self.x) && (0..=PAPER_MAX).contains(&self.y)
    }

    /// Convert from DBN paper space (bottom-left origin) to image space
    /// (top-left origin).
    #[must_use]
    pub const fn to_image(self) -> Self {
        Self::new(self.x, PAPER_MAX - self.y)
    }

    /// Convert a point in image space back to DBN paper space.
    ///
    /// The flip is its own inverse.
    #[must_use]
    pub const fn from_image(image: Self) -> Self {
        image.to_image()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A line segment between two grid points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// The same segment with its endpoints exchanged.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// True if the vertical extent exceeds the horizontal extent.
    #[must_use]
    pub fn is_steep(&self) -> bool {
        self.start.y.abs_diff(self.end.y) > self.start.x.abs_diff(self.end.x)
    }

    /// Extent along the dominant axis.
    #[must_use]
    pub fn dominant_extent(&self) -> u32 {
        self.start.chebyshev_distance(self.end)
    }

    /// Lazily walk the cells covered by this segment.
    #[must_use]
    pub fn cells(&self) -> LineCells {
        LineCells::from(*self)
    }

    /// Rasterize this segment into a [`Path`].
    #[must_use]
    pub fn rasterize(&self) -> Path {
        self.cells().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_chebyshev_distance() {
        let p1 = Point::new(0, 0);
        let p2 = Point::new(3, -4);
        assert_eq!(p1.chebyshev_distance(p2), 4);
        assert_eq!(p2.chebyshev_distance(p1), 4);
    }

    #[test]
    fn test_point_distance_extremes() {
        let p1 = Point::new(i32::MIN, 0);
        let p2 = Point::new(i32::MAX, 0);
        assert_eq!(p1.chebyshev_distance(p2), u32::MAX);
    }

    #[test]
    fn test_point_touches() {
        let p = Point::new(5, 5);
        assert!(p.touches(p));
        assert!(p.touches(Point::new(6, 4)));
        assert!(!p.touches(Point::new(7, 5)));
    }

    #[test]
    fn test_point_on_paper() {
        assert!(Point::ORIGIN.is_on_paper());
        assert!(Point::new(100, 100).is_on_paper());
        assert!(!Point::new(101, 0).is_on_paper());
        assert!(!Point::new(0, -1).is_on_paper());
    }

    #[test]
    fn test_image_conversion() {
        assert_eq!(Point::new(10, 0).to_image(), Point::new(10, 100));
        assert_eq!(Point::new(10, 100).to_image(), Point::new(10, 0));
        let p = Point::new(37, 62);
        assert_eq!(Point::from_image(p.to_image()), p);
    }

    #[test]
    fn test_point_tuple_conversion() {
        let p: Point = (3, 4).into();
        assert_eq!(p, Point::new(3, 4));
        let t: (i32, i32) = p.into();
        assert_eq!(t, (3, 4));
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(-1, 2).to_string(), "(-1, 2)");
    }

    #[test]
    fn test_segment_steep() {
        assert!(Segment::from_coords(0, 0, 1, 5).is_steep());
        assert!(!Segment::from_coords(0, 0, 5, 1).is_steep());
        // Equal extents are not steep
        assert!(!Segment::from_coords(0, 0, 3, 3).is_steep());
    }

    #[test]
    fn test_segment_dominant_extent() {
        assert_eq!(Segment::from_coords(2, 2, -4, 5).dominant_extent(), 6);
        assert_eq!(Segment::default().dominant_extent(), 0);
    }

    #[test]
    fn test_segment_reversed() {
        let s = Segment::from_coords(1, 2, 3, 4);
        assert_eq!(s.reversed(), Segment::from_coords(3, 4, 1, 2));
    }

    #[test]
    fn test_segment_rasterize() {
        let path = Segment::from_coords(0, 0, 4, 2).rasterize();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(Point::new(0, 0)));
        assert_eq!(path.last(), Some(Point::new(4, 2)));
    }
}
