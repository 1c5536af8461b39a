//! WebAssembly bindings for dbn-utils.
//!
//! Exposes the helpers to a browser-hosted DBN interpreter. JavaScript
//! numbers arrive as `f64` and are validated before use; invalid arguments
//! are thrown as JS errors carrying the [`Error`](crate::Error) message.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { rasterizeLine, clampToPercent } from 'dbn-utils';
//!
//! await init();
//!
//! // Flat [x0, y0, x1, y1, ...] pairs
//! const cells = rasterizeLine(0, 0, 4, 2);
//! for (let i = 0; i < cells.length; i += 2) {
//!     paper.set(cells[i], cells[i + 1], pen);
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::error::Error;
use crate::geometry::Point;
use crate::numeric;
use crate::raster::{self, Path};

#[allow(clippy::needless_pass_by_value)]
fn to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Flatten a path into interleaved `x, y` coordinates.
fn flatten(path: &Path) -> Vec<i32> {
    path.iter().flat_map(|&Point { x, y }| [x, y]).collect()
}

/// Clamp a value to `[0, 100]`.
#[wasm_bindgen(js_name = clampToPercent)]
pub fn clamp_to_percent(val: f64) -> Result<f64, JsValue> {
    numeric::clamp_to_percent(val).map_err(to_js)
}

/// Inclusive range test.
#[wasm_bindgen(js_name = isInRange)]
pub fn is_in_range(val: f64, lo: f64, hi: f64) -> Result<bool, JsValue> {
    numeric::is_in_range(val, lo, hi).map_err(to_js)
}

/// Map a percentage of ink to an 8-bit gray level.
#[wasm_bindgen(js_name = percentToGray)]
pub fn percent_to_gray(val: f64) -> Result<u8, JsValue> {
    numeric::percent_to_gray(val).map_err(to_js)
}

/// Rasterize a segment into an `Int32Array` of interleaved `x, y` pairs.
///
/// # Arguments
///
/// * `x0`, `y0` - Start coordinates (integers)
/// * `x1`, `y1` - End coordinates (integers)
#[wasm_bindgen(js_name = rasterizeLine)]
pub fn rasterize_line(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Vec<i32>, JsValue> {
    let path = raster::rasterize_line_checked(x0, y0, x1, y1).map_err(to_js)?;
    Ok(flatten(&path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_interleaves() {
        let path = raster::rasterize_line(0, 0, 2, 1);
        assert_eq!(flatten(&path), vec![0, 0, 1, 0, 2, 1]);
    }

    #[test]
    fn test_flatten_single_point() {
        let path = raster::rasterize_line(-7, 3, -7, 3);
        assert_eq!(flatten(&path), vec![-7, 3]);
    }
}
