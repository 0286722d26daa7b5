//! Bit-level verification of fused multiply-add implementations.
//!
//! A fused multiply-add computes `round(a * b + c)` with a single final
//! rounding. Getting that right is easy everywhere except at the edges: signed
//! zeros, invalid `inf * 0` products, NaN propagation, and rounding decisions
//! taken exactly at the subnormal and overflow boundaries, where an
//! implementation that rounds the product before adding diverges from a true
//! single-rounding one.
//!
//! This crate pins those edges down once, generically over the floating-point
//! width:
//!
//! - [`bits`] names every canonical special value and builds boundary-adjacent
//!   values from raw bit patterns, so no test input depends on the host's
//!   decimal parsing or arithmetic.
//! - [`check`] compares results bit-exactly, except that any NaN matches any
//!   NaN, and renders both sides as hex bit patterns when they differ.
//! - [`suite`] is the table of 13 corner cases and the driver that runs a
//!   candidate `fn(T, T, T) -> T` over it, accumulating every mismatch into a
//!   [`suite::Report`] rather than stopping at the first.
//!
//! ```
//! fpcheck::check_special_values::<f64>(f64::mul_add).assert_pass();
//! ```

pub mod bits;
pub mod check;
pub mod suite;

pub use bits::{BitPattern, FloatBits};
pub use check::{fp_eq, FpHex};
pub use suite::{check_special_values, special_value_cases, Case, CaseKind, Mismatch, Report};

/// Asserts that two floating-point values match under NaN-aware bit equality.
///
/// Unlike `assert_eq!` on floats, any NaN matches any NaN and `+0.0` does not
/// match `-0.0`. On mismatch, panics with both bit patterns rendered in hex.
#[macro_export]
macro_rules! assert_fp_eq {
    ($actual:expr, $expected:expr) => {{
        let (actual, expected) = ($actual, $expected);
        if !$crate::check::fp_eq(actual, expected) {
            panic!(
                "floating-point mismatch: actual {} != expected {}",
                $crate::check::FpHex(actual),
                $crate::check::FpHex(expected),
            );
        }
    }};
}
