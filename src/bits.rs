//! Construction of floating-point values from their bit representation.
//!
//! Every input the test tables use is either a canonical special value or an
//! exact bit pattern derived from one, so a suite instantiation never depends
//! on the host's literal parsing or on the very arithmetic under test.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Shl};

/// An unsigned integer exactly as wide as a floating-point encoding.
///
/// Only the arithmetic needed to synthesize boundary-adjacent values is
/// required: `+ ONE` steps to the next representable value, `<< 1` doubles a
/// power-of-two pattern. Callers only apply these to in-range patterns, so
/// overflow never arises.
pub trait BitPattern:
    Copy + Eq + Add<Output = Self> + Shl<u32, Output = Self> + fmt::LowerHex + fmt::Debug
{
    const ONE: Self;
}

impl BitPattern for u32 {
    const ONE: Self = 1;
}

impl BitPattern for u64 {
    const ONE: Self = 1;
}

/// A floating-point width, seen through its bit representation.
///
/// The `From<f32>` bound supplies small literals (halves, small integers); all
/// of the constants the suites use are exactly representable at every
/// supported width, so the conversion is lossless. `Neg`, `Mul` and `Div` are
/// only used where the result is exact (sign flips, scaling by powers of two,
/// and one product whose rounding matches the single-rounding expectation by
/// construction).
pub trait FloatBits:
    Copy
    + From<f32>
    + Neg<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + fmt::Debug
{
    type Bits: BitPattern;

    /// Total width of the encoding in bits.
    const BITS: u32;

    /// Reinterprets a bit pattern as a value. Inverse of [`Self::to_bits`].
    fn from_bits(bits: Self::Bits) -> Self;

    /// Reads the value's bit pattern back. Inverse of [`Self::from_bits`].
    fn to_bits(self) -> Self::Bits;

    /// Numeric (not bit-level) integer-to-float conversion.
    ///
    /// Exact whenever `bits` is a power of two in range. This is how the
    /// suites turn `min_normal().to_bits() << 1` into the value
    /// `2^(sig_bits + 1)`: the bit pattern of the minimum normal, read as an
    /// integer, is `2^(sig_bits)`.
    fn from_int(bits: Self::Bits) -> Self;

    /// A quiet NaN with an empty payload.
    fn qnan() -> Self;
    fn infinity() -> Self;
    fn neg_infinity() -> Self;
    fn zero() -> Self;
    fn neg_zero() -> Self;
    /// The smallest positive subnormal, bit pattern `1`.
    fn min_subnormal() -> Self;
    /// The smallest positive normal value.
    fn min_normal() -> Self;
    /// The largest finite value.
    fn max_normal() -> Self;

    fn is_nan(self) -> bool;
    fn is_sign_negative(self) -> bool;
}

impl FloatBits for f32 {
    type Bits = u32;

    const BITS: u32 = 32;

    fn from_bits(bits: u32) -> Self {
        f32::from_bits(bits)
    }

    fn to_bits(self) -> u32 {
        self.to_bits()
    }

    fn from_int(bits: u32) -> Self {
        bits as f32
    }

    fn qnan() -> Self {
        f32::from_bits(0x7fc0_0000)
    }

    fn infinity() -> Self {
        f32::from_bits(0x7f80_0000)
    }

    fn neg_infinity() -> Self {
        f32::from_bits(0xff80_0000)
    }

    fn zero() -> Self {
        f32::from_bits(0x0000_0000)
    }

    fn neg_zero() -> Self {
        f32::from_bits(0x8000_0000)
    }

    fn min_subnormal() -> Self {
        f32::from_bits(0x0000_0001)
    }

    fn min_normal() -> Self {
        f32::from_bits(0x0080_0000)
    }

    fn max_normal() -> Self {
        f32::from_bits(0x7f7f_ffff)
    }

    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    fn is_sign_negative(self) -> bool {
        f32::is_sign_negative(self)
    }
}

impl FloatBits for f64 {
    type Bits = u64;

    const BITS: u32 = 64;

    fn from_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    fn to_bits(self) -> u64 {
        self.to_bits()
    }

    fn from_int(bits: u64) -> Self {
        bits as f64
    }

    fn qnan() -> Self {
        f64::from_bits(0x7ff8_0000_0000_0000)
    }

    fn infinity() -> Self {
        f64::from_bits(0x7ff0_0000_0000_0000)
    }

    fn neg_infinity() -> Self {
        f64::from_bits(0xfff0_0000_0000_0000)
    }

    fn zero() -> Self {
        f64::from_bits(0x0000_0000_0000_0000)
    }

    fn neg_zero() -> Self {
        f64::from_bits(0x8000_0000_0000_0000)
    }

    fn min_subnormal() -> Self {
        f64::from_bits(0x0000_0000_0000_0001)
    }

    fn min_normal() -> Self {
        f64::from_bits(0x0010_0000_0000_0000)
    }

    fn max_normal() -> Self {
        f64::from_bits(0x7fef_ffff_ffff_ffff)
    }

    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    fn is_sign_negative(self) -> bool {
        f64::is_sign_negative(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_values_match_host_encodings() {
        assert_eq!(<f32 as FloatBits>::infinity(), f32::INFINITY);
        assert_eq!(<f32 as FloatBits>::neg_infinity(), f32::NEG_INFINITY);
        assert_eq!(<f32 as FloatBits>::min_normal(), f32::MIN_POSITIVE);
        assert_eq!(<f32 as FloatBits>::max_normal(), f32::MAX);
        assert!(<f32 as FloatBits>::qnan().is_nan());

        assert_eq!(<f64 as FloatBits>::infinity(), f64::INFINITY);
        assert_eq!(<f64 as FloatBits>::neg_infinity(), f64::NEG_INFINITY);
        assert_eq!(<f64 as FloatBits>::min_normal(), f64::MIN_POSITIVE);
        assert_eq!(<f64 as FloatBits>::max_normal(), f64::MAX);
        assert!(<f64 as FloatBits>::qnan().is_nan());
    }

    #[test]
    fn zero_signs_are_distinct_patterns() {
        assert_eq!(<f32 as FloatBits>::zero().to_bits(), 0);
        assert_eq!(<f32 as FloatBits>::neg_zero().to_bits(), 1 << 31);
        assert!(<f32 as FloatBits>::neg_zero().is_sign_negative());
        assert!(!<f32 as FloatBits>::zero().is_sign_negative());

        assert_eq!(<f64 as FloatBits>::zero().to_bits(), 0);
        assert_eq!(<f64 as FloatBits>::neg_zero().to_bits(), 1 << 63);
        assert!(<f64 as FloatBits>::neg_zero().is_sign_negative());
    }

    #[test]
    fn min_subnormal_is_pattern_one() {
        assert_eq!(<f32 as FloatBits>::min_subnormal().to_bits(), 1);
        assert_eq!(<f64 as FloatBits>::min_subnormal().to_bits(), 1);
        // Doubling a subnormal pattern doubles the value.
        assert_eq!(
            <f64 as FloatBits>::from_bits(<f64 as FloatBits>::min_subnormal().to_bits() << 1),
            2.0 * <f64 as FloatBits>::min_subnormal(),
        );
    }

    #[test]
    fn bit_roundtrip_is_identity() {
        for bits in [0u32, 1, 0x0080_0000, 0x3f80_0000, 0x7f7f_ffff, 0xff80_0000] {
            assert_eq!(<f32 as FloatBits>::from_bits(bits).to_bits(), bits);
        }
        for bits in [0u64, 1, 0x0010_0000_0000_0000, 0x7fef_ffff_ffff_ffff] {
            assert_eq!(<f64 as FloatBits>::from_bits(bits).to_bits(), bits);
        }
    }

    #[test]
    fn from_int_is_exact_on_powers_of_two() {
        // min_normal's pattern, read numerically, is 2^(sig bits).
        assert_eq!(<f32 as FloatBits>::from_int(0x0080_0000), 8388608.0);
        assert_eq!(<f32 as FloatBits>::from_int(0x0080_0000 << 1), 16777216.0);
        assert_eq!(
            <f64 as FloatBits>::from_int(0x0010_0000_0000_0000 << 1),
            9007199254740992.0,
        );
    }
}
