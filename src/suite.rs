//! The fused-multiply-add special-value table and its driver.
//!
//! One table, thirteen rows, applied to any width implementing
//! [`FloatBits`]. Rows 1-8 pin down the special-value algebra (signed zeros,
//! infinite products, invalid operations, NaN propagation); rows 9-11 sit
//! exactly on the subnormal and overflow boundaries where a double-rounding
//! implementation (round the product, then round the sum) diverges from a
//! true single-rounding one; rows 12-13 pin the sign of an exactly cancelled
//! result to `+0`.

use core::fmt;

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::bits::{BitPattern, FloatBits};
use crate::check::{fp_eq, FpHex};

bitflags! {
    /// The behavior class a table row probes.
    ///
    /// A failing [`Report`] unions the classes of its mismatches, so a caller
    /// can tell "gets NaN propagation wrong" apart from "double-rounds at the
    /// subnormal boundary" without pattern-matching on case names.
    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    pub struct CaseKind: u8 {
        const ZERO_SIGN = 1 << 0;
        const INF_ARITH = 1 << 1;
        const INVALID_OP = 1 << 2;
        const NAN_PROP = 1 << 3;
        const SUBNORMAL_ROUND = 1 << 4;
        const OVERFLOW_BOUNDARY = 1 << 5;
        const CANCELLATION = 1 << 6;
    }
}

/// One row of the table: `fma(a, b, c)` must match `expected` under
/// [`fp_eq`]'s rules.
#[derive(Copy, Clone, Debug)]
pub struct Case<T> {
    pub name: &'static str,
    pub kind: CaseKind,
    pub a: T,
    pub b: T,
    pub c: T,
    pub expected: T,
}

/// The thirteen special-value cases, in stable declaration order.
///
/// Every operand is a canonical value, a bit-pattern neighbor of one, or an
/// exact small literal. The two subnormal-boundary rows are the load-bearing
/// ones: their true (infinite-precision) sums land on or just past a rounding
/// midpoint, so only a single final rounding lands on `expected`.
pub fn special_value_cases<T: FloatBits>() -> [Case<T>; 13] {
    let zero = T::zero();
    let neg_zero = T::neg_zero();
    let inf = T::infinity();
    let neg_inf = T::neg_infinity();
    let nan = T::qnan();
    let min_sub = T::min_subnormal();
    let min_norm = T::min_normal();
    let max_norm = T::max_normal();

    // min_normal's successor, one ulp up.
    let above_min_norm = T::from_bits(min_norm.to_bits() + <T::Bits as BitPattern>::ONE);
    // min_normal's pattern read as an integer is 2^(sig bits), so this is the
    // exact power of two 2^(sig bits + 1).
    let scale = T::from_int(min_norm.to_bits() << 1);

    let lit = |x: f32| T::from(x);

    [
        Case {
            name: "zero product, zero addend",
            kind: CaseKind::ZERO_SIGN,
            a: zero,
            b: zero,
            c: zero,
            expected: zero,
        },
        Case {
            name: "zero sign follows the operands",
            kind: CaseKind::ZERO_SIGN,
            a: zero,
            b: neg_zero,
            c: neg_zero,
            expected: neg_zero,
        },
        Case {
            name: "infinity absorbs a finite addend",
            kind: CaseKind::INF_ARITH,
            a: inf,
            b: inf,
            c: zero,
            expected: inf,
        },
        Case {
            name: "infinite product joins a matching infinite addend",
            kind: CaseKind::INF_ARITH,
            a: neg_inf,
            b: inf,
            c: neg_inf,
            expected: neg_inf,
        },
        Case {
            name: "infinity times zero is invalid",
            kind: CaseKind::INVALID_OP,
            a: inf,
            b: zero,
            c: zero,
            expected: nan,
        },
        Case {
            name: "infinite product conflicts with an infinite addend",
            kind: CaseKind::INVALID_OP,
            a: inf,
            b: neg_inf,
            c: inf,
            expected: nan,
        },
        Case {
            name: "nan operand poisons the result",
            kind: CaseKind::NAN_PROP,
            a: nan,
            b: zero,
            c: inf,
            expected: nan,
        },
        Case {
            name: "nan addend poisons an invalid product",
            kind: CaseKind::NAN_PROP,
            a: inf,
            b: neg_inf,
            c: nan,
            expected: nan,
        },
        // True sum is 1.5 * min_subnormal, a tie the final rounding resolves
        // up to the even neighbor; a rounded intermediate product instead
        // ties down to zero and loses the row.
        Case {
            name: "underflow rounds up past the subnormal midpoint",
            kind: CaseKind::SUBNORMAL_ROUND,
            a: lit(0.5),
            b: min_sub,
            c: min_sub,
            expected: T::from_bits(min_sub.to_bits() << 1),
        },
        // The product 2^-(sig+1) * above_min_norm lands below min_subnormal;
        // only the true sum with min_normal carries the extra ulp back in.
        Case {
            name: "underflow at the normal boundary rounds from the true sum",
            kind: CaseKind::SUBNORMAL_ROUND,
            a: lit(1.0) / scale,
            b: above_min_norm,
            c: min_norm,
            expected: above_min_norm,
        },
        // 1.75 * max_normal overflows on its own; the fused form never sees
        // the intermediate and must recombine with the addend exactly.
        Case {
            name: "product beyond max_normal recombines with the addend",
            kind: CaseKind::OVERFLOW_BOUNDARY,
            a: lit(1.75),
            b: max_norm,
            c: -max_norm,
            expected: lit(0.75) * max_norm,
        },
        Case {
            name: "exact cancellation yields positive zero",
            kind: CaseKind::CANCELLATION,
            a: lit(3.0),
            b: lit(5.0),
            c: -lit(15.0),
            expected: zero,
        },
        Case {
            name: "exact cancellation ignores the operand signs",
            kind: CaseKind::CANCELLATION,
            a: lit(-3.0),
            b: lit(5.0),
            c: lit(15.0),
            expected: zero,
        },
    ]
}

/// One failed row, with everything needed to reproduce it.
#[derive(Copy, Clone, Debug)]
pub struct Mismatch<T> {
    /// Zero-based position in the table's declaration order.
    pub index: usize,
    pub name: &'static str,
    pub kind: CaseKind,
    pub a: T,
    pub b: T,
    pub c: T,
    pub expected: T,
    pub actual: T,
}

impl<T: FloatBits> fmt::Display for Mismatch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "case {} ({}): fma({}, {}, {}) = {}, expected {}",
            self.index,
            self.name,
            FpHex(self.a),
            FpHex(self.b),
            FpHex(self.c),
            FpHex(self.actual),
            FpHex(self.expected),
        )
    }
}

/// Outcome of one suite run: every mismatch, not just the first.
///
/// The list stays inline for the common shapes (clean pass, or a handful of
/// rows from one broken behavior class).
#[derive(Clone, Debug)]
pub struct Report<T> {
    cases: usize,
    failures: SmallVec<[Mismatch<T>; 4]>,
}

impl<T: FloatBits> Report<T> {
    /// Number of cases run.
    pub fn cases(&self) -> usize {
        self.cases
    }

    pub fn is_pass(&self) -> bool {
        self.failures.is_empty()
    }

    /// The failed rows, in table order.
    pub fn failures(&self) -> &[Mismatch<T>] {
        &self.failures
    }

    /// Union of the behavior classes of all failed rows.
    pub fn failed_kinds(&self) -> CaseKind {
        self.failures
            .iter()
            .fold(CaseKind::empty(), |kinds, m| kinds | m.kind)
    }

    /// Panics with every mismatch rendered if any case failed.
    pub fn assert_pass(&self) {
        if self.is_pass() {
            return;
        }
        let mut msg = format!(
            "{} of {} fma special-value cases failed:",
            self.failures.len(),
            self.cases,
        );
        for m in &self.failures {
            msg.push_str("\n  ");
            msg.push_str(&m.to_string());
        }
        panic!("{msg}");
    }
}

/// Runs `func` over the whole special-value table, accumulating mismatches.
///
/// Each row is an independent assertion; order of execution is declaration
/// order so failure output is reproducible across runs.
pub fn check_special_values<T: FloatBits>(func: impl Fn(T, T, T) -> T) -> Report<T> {
    let cases = special_value_cases::<T>();
    let mut failures = SmallVec::new();
    for (index, case) in cases.iter().enumerate() {
        let actual = func(case.a, case.b, case.c);
        if !fp_eq(actual, case.expected) {
            failures.push(Mismatch {
                index,
                name: case.name,
                kind: case.kind,
                a: case.a,
                b: case.b,
                c: case.c,
                expected: case.expected,
                actual,
            });
        }
    }
    Report {
        cases: cases.len(),
        failures,
    }
}
