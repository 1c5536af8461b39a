//! Line rasterization.
//!
//! Turns integer segments into the ordered grid cells that best approximate
//! them. Output is coordinates only; plotting them is the caller's business.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer-only midpoint error accumulation, one cell
//!   per unit step along the dominant axis
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod line;
mod path;

pub use line::{rasterize_line, rasterize_line_checked, LineCells};
pub use path::Path;
