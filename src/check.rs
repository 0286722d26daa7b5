//! Result comparison with the equality rules verification needs.
//!
//! IEEE-754 `==` is the wrong oracle for a test suite twice over: NaN never
//! equals NaN, and `-0.0 == 0.0`. Comparison here is bit-exact, except that
//! any NaN matches any NaN (which NaN an operation propagates is not pinned
//! down by the tables).

use core::fmt;

use crate::bits::FloatBits;

/// NaN-aware, signed-zero-aware equality.
pub fn fp_eq<T: FloatBits>(actual: T, expected: T) -> bool {
    if actual.is_nan() || expected.is_nan() {
        actual.is_nan() && expected.is_nan()
    } else {
        actual.to_bits() == expected.to_bits()
    }
}

/// Displays a value as its zero-padded hex bit pattern, e.g. `0x7fc00000`.
///
/// Bit patterns are the one rendering that distinguishes every case the
/// suites care about, signed zeros and subnormal neighbors included.
#[derive(Copy, Clone, Debug)]
pub struct FpHex<T>(pub T);

impl<T: FloatBits> fmt::Display for FpHex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = (T::BITS / 4) as usize;
        write!(f, "{:#0width$x}", self.0.to_bits(), width = digits + 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::FloatBits as _;

    #[test]
    fn any_nan_matches_any_nan() {
        assert!(fp_eq(f64::qnan(), f64::qnan()));
        assert!(fp_eq(-f64::qnan(), f64::qnan()));
        // A payload does not matter either.
        assert!(fp_eq(f64::from_bits(0x7ff8_0000_0000_0004u64), f64::qnan()));
        assert!(!fp_eq(f64::qnan(), f64::infinity()));
        assert!(!fp_eq(0.0f64, f64::qnan()));
    }

    #[test]
    fn zero_signs_do_not_match() {
        assert!(!fp_eq(f32::zero(), f32::neg_zero()));
        assert!(!fp_eq(f64::neg_zero(), f64::zero()));
        assert!(fp_eq(f64::neg_zero(), f64::neg_zero()));
    }

    #[test]
    fn finite_equality_is_bit_exact() {
        assert!(fp_eq(1.5f64, 1.5f64));
        let up = f64::from_bits(1.5f64.to_bits() + 1);
        assert!(!fp_eq(1.5f64, up));
    }

    #[test]
    fn hex_rendering_is_width_padded() {
        assert_eq!(FpHex(f32::qnan()).to_string(), "0x7fc00000");
        assert_eq!(FpHex(f32::min_subnormal()).to_string(), "0x00000001");
        assert_eq!(FpHex(f64::neg_zero()).to_string(), "0x8000000000000000");
    }
}
