//! # dbn-utils
//!
//! Stateless helpers for a Design By Numbers drawing environment.
//!
//! The centrepiece is an integer-only Bresenham rasterizer that turns a
//! segment into the ordered grid cells approximating it. Around it sit the
//! small numeric helpers a DBN interpreter leans on: percent clamping,
//! inclusive range tests, percent-to-gray mapping and shallow copies of
//! variable environments.
//!
//! ## Features
//!
//! - **Pure functions**: no global state, safe to call from any thread
//! - **Exact arithmetic**: the line walk never touches floating point
//! - **Surface agnostic**: rasterization yields coordinates, not pixels
//!
//! ## Quick Start
//!
//! ```rust
//! use dbn_utils::prelude::*;
//!
//! let path = rasterize_line(0, 0, 4, 2);
//! assert_eq!(path.len(), 5);
//! assert!(path.is_eight_connected());
//!
//! assert_eq!(clamp_to_percent(140)?, 100);
//! # Ok::<(), dbn_utils::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`geometry::Point`],
//!   [`geometry::Segment`] and [`raster::Path`]
//! - `wasm`: JavaScript bindings
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Maeda, J. (1999). *Design By Numbers*. MIT Press.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Integer grid points, segments and paper coordinates.
pub mod geometry;

/// Percent clamping, range tests and gray mapping.
pub mod numeric;

/// Flat mappings and shallow copies.
pub mod dict;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line rasterization.
pub mod raster;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for dbn-utils operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use dbn_utils::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dict::{shallow_copy, Dict};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Point, Segment, PAPER_MAX};
    pub use crate::numeric::{clamp_to_percent, is_in_range, percent_to_gray, Numeric};
    pub use crate::raster::{rasterize_line, rasterize_line_checked, LineCells, Path};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_public_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Point>();
        assert_send_sync::<Segment>();
        assert_send_sync::<Path>();
        assert_send_sync::<LineCells>();
        assert_send_sync::<Error>();
    }

    #[test]
    fn test_rasterize_on_paper() {
        let path = Segment::from_coords(0, 0, PAPER_MAX, PAPER_MAX).rasterize();
        assert!(path.iter().all(|p| p.is_on_paper()));
        assert_eq!(path.len(), 101);
    }
}
