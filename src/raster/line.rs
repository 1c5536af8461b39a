//! Bresenham line walk.
//!
//! The walk always advances along the dominant axis in increasing order. A
//! segment whose dominant coordinate decreases from start to end is walked
//! from its end instead, so the emitted order for `(x1, y1, x0, y0)` is the
//! same as for `(x0, y0, x1, y1)`, not its reverse. Use
//! [`Path::oriented_from`] when the caller needs argument order.
//!
//! The midpoint error term starts at `-delta_major / 2`. It is tracked in
//! doubled units so the half is exact: at an exact half-step the error is
//! zero and the minor axis does not advance.

use std::iter::FusedIterator;
use std::mem;

use crate::error::{Error, Result};
use crate::geometry::{Point, Segment};
use crate::numeric::ensure_finite;

use super::Path;

/// Lazy iterator over the cells of a rasterized segment.
///
/// Yields exactly `max(|dx|, |dy|) + 1` points. Arithmetic is done in `i64`
/// so any pair of `i32` endpoints is walked without overflow.
#[derive(Debug, Clone)]
pub struct LineCells {
    steep: bool,
    major: i64,
    minor: i64,
    minor_step: i64,
    delta_major: i64,
    delta_minor: i64,
    /// Twice the midpoint error.
    error2: i64,
    remaining: u64,
}

impl LineCells {
    /// Start a walk from `(x0, y0)` to `(x1, y1)`.
    #[must_use]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (mut x0, mut y0) = (i64::from(x0), i64::from(y0));
        let (mut x1, mut y1) = (i64::from(x1), i64::from(y1));

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            // Rotate 90 degrees
            mem::swap(&mut x0, &mut y0);
            mem::swap(&mut x1, &mut y1);
        }

        if x0 > x1 {
            mem::swap(&mut x0, &mut x1);
            mem::swap(&mut y0, &mut y1);
        }

        let delta_major = x1 - x0;
        let delta_minor = (y1 - y0).abs();
        let minor_step = if y0 < y1 { 1 } else { -1 };

        Self {
            steep,
            major: x0,
            minor: y0,
            minor_step,
            delta_major,
            delta_minor,
            error2: -delta_major,
            remaining: delta_major as u64 + 1,
        }
    }

    /// True if the walk runs along the y axis.
    #[must_use]
    pub fn is_steep(&self) -> bool {
        self.steep
    }
}

impl From<Segment> for LineCells {
    fn from(segment: Segment) -> Self {
        Self::new(segment.start.x, segment.start.y, segment.end.x, segment.end.y)
    }
}

impl Iterator for LineCells {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // Both coordinates stay between the requested endpoints while emitting.
        let point = if self.steep {
            Point::new(self.minor as i32, self.major as i32)
        } else {
            Point::new(self.major as i32, self.minor as i32)
        };

        self.major += 1;
        self.error2 += 2 * self.delta_minor;
        if self.error2 > 0 {
            self.minor += self.minor_step;
            self.error2 -= 2 * self.delta_major;
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (len, Some(len))
    }
}

impl ExactSizeIterator for LineCells {}

impl FusedIterator for LineCells {}

/// Rasterize the segment from `(x0, y0)` to `(x1, y1)`.
///
/// Returns one cell per unit step along the dominant axis, endpoints
/// included. The path is 8-connected and monotonic along the dominant axis.
///
/// # Examples
///
/// ```
/// use dbn_utils::geometry::Point;
/// use dbn_utils::raster::rasterize_line;
///
/// let path = rasterize_line(0, 0, 4, 2);
/// let expected: Vec<Point> = [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]
///     .into_iter()
///     .map(Point::from)
///     .collect();
/// assert_eq!(path.as_slice(), expected.as_slice());
/// ```
pub fn rasterize_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Path {
    let cells = LineCells::new(x0, y0, x1, y1);
    log::trace!(
        "rasterize ({x0}, {y0}) -> ({x1}, {y1}): steep={}, {} cells",
        cells.is_steep(),
        cells.len()
    );
    cells.collect()
}

/// Rasterize a segment given as host floating-point numbers.
///
/// Each coordinate must be finite, integral and within the `i32` range;
/// otherwise the call fails with [`Error::InvalidArgument`] naming the first
/// offending coordinate.
pub fn rasterize_line_checked(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Path> {
    let x0 = grid_coord("x0", x0)?;
    let y0 = grid_coord("y0", y0)?;
    let x1 = grid_coord("x1", x1)?;
    let y1 = grid_coord("y1", y1)?;
    Ok(rasterize_line(x0, y0, x1, y1))
}

fn grid_coord(name: &'static str, value: f64) -> Result<i32> {
    let value = ensure_finite(name, value)?;
    if value.fract().abs() > 0.0 {
        return Err(Error::invalid_argument(name, format!("must be an integer, got {value}")));
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(Error::invalid_argument(
            name,
            format!("must fit in a 32-bit grid coordinate, got {value}"),
        ));
    }
    Ok(value as i32)
}
