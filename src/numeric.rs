//! Numeric helpers: percent clamping, inclusive range tests and the
//! percent-to-gray mapping used for pen and paper colors.
//!
//! DBN expresses every color as a percentage of ink, where `0` is white paper
//! and `100` is solid black. The helpers here accept any primitive number
//! through the [`Numeric`] trait and reject non-finite floats with
//! [`Error::InvalidArgument`].

use std::fmt;

use crate::error::{Error, Result};

/// Largest value on the percent scale.
pub const PERCENT_MAX: u8 = 100;

/// Gray level of unmarked paper (0% ink).
pub const GRAY_WHITE: u8 = u8::MAX;

/// Primitive numbers accepted by the percent and range helpers.
pub trait Numeric: Copy + PartialOrd + fmt::Display {
    /// Additive identity.
    const ZERO: Self;
    /// One hundred, the top of the percent scale.
    const HUNDRED: Self;

    /// Returns `false` for NaN and infinities. Always `true` for integers.
    fn is_finite_value(self) -> bool;

    /// Lossy conversion used for gray scaling.
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0;
                const HUNDRED: Self = 100;

                #[inline]
                fn is_finite_value(self) -> bool {
                    true
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0.0;
                const HUNDRED: Self = 100.0;

                #[inline]
                fn is_finite_value(self) -> bool {
                    self.is_finite()
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

/// Fail with [`Error::InvalidArgument`] unless `val` is finite.
#[inline]
pub(crate) fn ensure_finite<T: Numeric>(name: &'static str, val: T) -> Result<T> {
    if val.is_finite_value() {
        Ok(val)
    } else {
        Err(Error::invalid_argument(name, format!("must be finite, got {val}")))
    }
}

/// Clamp a value to the percent scale `[0, 100]`.
///
/// Values below zero become zero, values above one hundred become one
/// hundred, and everything else is returned unchanged.
///
/// # Examples
///
/// ```
/// use dbn_utils::numeric::clamp_to_percent;
///
/// assert_eq!(clamp_to_percent(-5).unwrap(), 0);
/// assert_eq!(clamp_to_percent(42).unwrap(), 42);
/// assert_eq!(clamp_to_percent(250.0).unwrap(), 100.0);
/// assert!(clamp_to_percent(f64::NAN).is_err());
/// ```
pub fn clamp_to_percent<T: Numeric>(val: T) -> Result<T> {
    let val = ensure_finite("val", val)?;
    if val < T::ZERO {
        Ok(T::ZERO)
    } else if val > T::HUNDRED {
        Ok(T::HUNDRED)
    } else {
        Ok(val)
    }
}

/// Inclusive range test: `true` iff `lo <= val <= hi`.
///
/// An inverted range (`lo > hi`) is not an error; it simply contains nothing.
///
/// # Examples
///
/// ```
/// use dbn_utils::numeric::is_in_range;
///
/// assert!(is_in_range(5, 0, 10).unwrap());
/// assert!(is_in_range(10, 0, 10).unwrap());
/// assert!(!is_in_range(5, 10, 0).unwrap());
/// ```
pub fn is_in_range<T: Numeric>(val: T, lo: T, hi: T) -> Result<bool> {
    let val = ensure_finite("val", val)?;
    let lo = ensure_finite("lo", lo)?;
    let hi = ensure_finite("hi", hi)?;
    Ok(val >= lo && val <= hi)
}

/// Map a percentage of ink to an 8-bit gray level.
///
/// The value is clamped to `[0, 100]` first, then `0` maps to white (`255`)
/// and `100` maps to black (`0`). Rounds half away from zero.
///
/// # Examples
///
/// ```
/// use dbn_utils::numeric::percent_to_gray;
///
/// assert_eq!(percent_to_gray(0).unwrap(), 255);
/// assert_eq!(percent_to_gray(100).unwrap(), 0);
/// assert_eq!(percent_to_gray(50).unwrap(), 128);
/// ```
pub fn percent_to_gray<T: Numeric>(val: T) -> Result<u8> {
    let percent = clamp_to_percent(val)?.to_f64();
    let ink = f64::from(PERCENT_MAX) - percent;
    Ok((ink * f64::from(GRAY_WHITE) / f64::from(PERCENT_MAX)).round() as u8)
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// Clamped value always lies on the percent scale
        #[test]
        fn prop_clamp_within_scale(val in any::<i64>()) {
            let clamped = clamp_to_percent(val).unwrap();
            prop_assert!((0..=100).contains(&clamped));
        }

        /// Clamping is the identity inside the scale
        #[test]
        fn prop_clamp_identity_inside(val in 0.0f64..=100.0) {
            prop_assert_eq!(clamp_to_percent(val).unwrap(), val);
        }

        /// Range test agrees with the two comparisons
        #[test]
        fn prop_in_range_matches_comparisons(
            val in any::<i32>(),
            lo in any::<i32>(),
            hi in any::<i32>()
        ) {
            let expected = lo <= val && val <= hi;
            prop_assert_eq!(is_in_range(val, lo, hi).unwrap(), expected);
        }

        /// Inverted ranges never contain anything
        #[test]
        fn prop_in_range_inverted_empty(val in any::<i16>(), lo in 1i16..1000, gap in 1i16..1000) {
            prop_assert!(!is_in_range(val, lo, lo - gap).unwrap());
        }

        /// More ink never yields a lighter gray
        #[test]
        fn prop_gray_monotonic(a in -50i32..150, b in -50i32..150) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(percent_to_gray(lo).unwrap() >= percent_to_gray(hi).unwrap());
        }
    }
}
