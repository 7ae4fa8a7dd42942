//! Arithmetic between series and scalars.
//!
//! Each operator is one free function taking `(left, right)` operands. The
//! dispatch always runs in the same order:
//!
//! 1. **category check**: each operand must be of a kind the operator
//!    accepts and at least one side must be a series, otherwise
//!    [`Error::UnsupportedOperand`];
//! 2. **index check**: two series must have element-wise equal indexes,
//!    otherwise [`Error::IndexMismatch`];
//! 3. **element-wise computation**, broadcasting scalars.
//!
//! Subtraction and division are derived from addition and multiplication:
//! `a - b = a + (-1 * b)` and `a / b = a * (1 / b)`. Exponentiation only
//! accepts integer scalars on either side, and an integer-valued exponent
//! series.
//!
//! The `try_*` methods on [`TimeSerie`] put the series on the left; the
//! `try_r*` methods put it on the right by calling the same function with
//! the arguments swapped.

use std::ops::{Add, Div, Mul, Neg, Sub};

use tsgen_core::errors::{Error, Result};
use tsgen_core::{fail, Real};

use crate::operand::Operand;
use crate::time_serie::TimeSerie;

/// A binary series operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
    /// Exponentiation.
    Pow,
}

impl Op {
    /// Operator symbol used in error messages.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "**",
        }
    }

    fn accepts(&self, operand: &Operand<'_>) -> bool {
        match operand {
            Operand::Int(_) | Operand::Series(_) => true,
            Operand::Real(_) => *self != Op::Pow,
            Operand::Unsupported(_) => false,
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// A validated operand pair: categories accepted, indexes aligned.
#[derive(Clone, Copy)]
enum Pair<'a> {
    SeriesSeries(&'a TimeSerie, &'a TimeSerie),
    SeriesScalar(&'a TimeSerie, Real),
    ScalarSeries(Real, &'a TimeSerie),
}

fn unsupported(op: Op, left: &Operand<'_>, right: &Operand<'_>) -> Error {
    Error::UnsupportedOperand {
        op: op.symbol(),
        left: left.type_name().to_owned(),
        right: right.type_name().to_owned(),
    }
}

fn check_aligned(a: &TimeSerie, b: &TimeSerie) -> Result<()> {
    if !a.is_aligned_with(b) {
        fail!(Error::IndexMismatch {
            left_len: a.len(),
            right_len: b.len(),
        });
    }
    Ok(())
}

fn prepare<'a>(op: Op, left: Operand<'a>, right: Operand<'a>) -> Result<Pair<'a>> {
    tracing::trace!(op = op.symbol(), left = left.type_name(), right = right.type_name(), "series operator");
    if !(op.accepts(&left) && op.accepts(&right)) {
        return Err(unsupported(op, &left, &right));
    }
    match (left, right) {
        (Operand::Series(a), Operand::Series(b)) => {
            check_aligned(a, b)?;
            Ok(Pair::SeriesSeries(a, b))
        }
        (Operand::Series(a), scalar) => match scalar.as_real() {
            Some(x) => Ok(Pair::SeriesScalar(a, x)),
            None => Err(unsupported(op, &left, &right)),
        },
        (scalar, Operand::Series(b)) => match scalar.as_real() {
            Some(x) => Ok(Pair::ScalarSeries(x, b)),
            None => Err(unsupported(op, &left, &right)),
        },
        _ => Err(unsupported(op, &left, &right)),
    }
}

// ── Element-wise kernels (operands already validated) ─────────────────────────

fn map(s: &TimeSerie, f: impl Fn(Real) -> Real) -> TimeSerie {
    TimeSerie::from_parts(s.index().clone(), s.values().iter().map(|&x| f(x)).collect())
}

fn zip(a: &TimeSerie, b: &TimeSerie, f: impl Fn(Real, Real) -> Real) -> TimeSerie {
    let values = a.values().iter().zip(b.values()).map(|(&x, &y)| f(x, y)).collect();
    TimeSerie::from_parts(a.index().clone(), values)
}

fn add_pair(pair: Pair<'_>) -> TimeSerie {
    match pair {
        Pair::SeriesSeries(a, b) => zip(a, b, |x, y| x + y),
        Pair::SeriesScalar(a, s) => map(a, |x| x + s),
        Pair::ScalarSeries(s, b) => add_pair(Pair::SeriesScalar(b, s)),
    }
}

fn mul_pair(pair: Pair<'_>) -> TimeSerie {
    match pair {
        Pair::SeriesSeries(a, b) => zip(a, b, |x, y| x * y),
        Pair::SeriesScalar(a, s) => map(a, |x| x * s),
        Pair::ScalarSeries(s, b) => mul_pair(Pair::SeriesScalar(b, s)),
    }
}

fn negate(s: &TimeSerie) -> TimeSerie {
    mul_pair(Pair::ScalarSeries(-1.0, s))
}

fn reciprocal(s: &TimeSerie) -> TimeSerie {
    map(s, |x| 1.0 / x)
}

fn sub_pair(pair: Pair<'_>) -> TimeSerie {
    match pair {
        Pair::SeriesSeries(a, b) => add_pair(Pair::SeriesSeries(a, &negate(b))),
        Pair::SeriesScalar(a, s) => add_pair(Pair::SeriesScalar(a, -1.0 * s)),
        Pair::ScalarSeries(s, b) => add_pair(Pair::SeriesScalar(&negate(b), s)),
    }
}

fn div_pair(pair: Pair<'_>) -> TimeSerie {
    match pair {
        Pair::SeriesSeries(a, b) => mul_pair(Pair::SeriesSeries(a, &reciprocal(b))),
        Pair::SeriesScalar(a, s) => mul_pair(Pair::SeriesScalar(a, 1.0 / s)),
        Pair::ScalarSeries(s, b) => mul_pair(Pair::ScalarSeries(s, &reciprocal(b))),
    }
}

fn is_integral(x: Real) -> bool {
    x.is_finite() && x.fract() == 0.0
}

// ── Public operator functions ─────────────────────────────────────────────────

/// `left + right`.
pub fn add<'a>(left: impl Into<Operand<'a>>, right: impl Into<Operand<'a>>) -> Result<TimeSerie> {
    prepare(Op::Add, left.into(), right.into()).map(add_pair)
}

/// `left - right`, computed as `left + (-1 * right)`.
pub fn sub<'a>(left: impl Into<Operand<'a>>, right: impl Into<Operand<'a>>) -> Result<TimeSerie> {
    prepare(Op::Sub, left.into(), right.into()).map(sub_pair)
}

/// `left * right`.
pub fn mul<'a>(left: impl Into<Operand<'a>>, right: impl Into<Operand<'a>>) -> Result<TimeSerie> {
    prepare(Op::Mul, left.into(), right.into()).map(mul_pair)
}

/// `left / right`, computed as `left * (1 / right)`. Division by zero
/// yields infinities or NaN, never an error.
pub fn div<'a>(left: impl Into<Operand<'a>>, right: impl Into<Operand<'a>>) -> Result<TimeSerie> {
    prepare(Op::Div, left.into(), right.into()).map(div_pair)
}

/// `left ** right`.
///
/// Accepted combinations: series and integer scalar (either order), and two
/// aligned series whose exponent (right) series holds only integral values.
/// Real scalars are rejected on both sides, even when they are integral.
pub fn pow<'a>(left: impl Into<Operand<'a>>, right: impl Into<Operand<'a>>) -> Result<TimeSerie> {
    let (left, right) = (left.into(), right.into());
    match prepare(Op::Pow, left, right)? {
        Pair::SeriesSeries(a, b) => {
            if !b.values().iter().all(|&y| is_integral(y)) {
                return Err(unsupported(Op::Pow, &left, &right));
            }
            Ok(zip(a, b, Real::powf))
        }
        Pair::SeriesScalar(a, n) => Ok(map(a, |x| x.powf(n))),
        Pair::ScalarSeries(n, b) => Ok(map(b, |y| n.powf(y))),
    }
}

// ── Method forms ──────────────────────────────────────────────────────────────

impl TimeSerie {
    /// `self + rhs`.
    pub fn try_add<'a>(&'a self, rhs: impl Into<Operand<'a>>) -> Result<TimeSerie> {
        add(self, rhs)
    }

    /// `lhs + self`.
    pub fn try_radd<'a>(&'a self, lhs: impl Into<Operand<'a>>) -> Result<TimeSerie> {
        add(lhs, self)
    }

    /// `self - rhs`.
    pub fn try_sub<'a>(&'a self, rhs: impl Into<Operand<'a>>) -> Result<TimeSerie> {
        sub(self, rhs)
    }

    /// `lhs - self`.
    pub fn try_rsub<'a>(&'a self, lhs: impl Into<Operand<'a>>) -> Result<TimeSerie> {
        sub(lhs, self)
    }

    /// `self * rhs`.
    pub fn try_mul<'a>(&'a self, rhs: impl Into<Operand<'a>>) -> Result<TimeSerie> {
        mul(self, rhs)
    }

    /// `lhs * self`.
    pub fn try_rmul<'a>(&'a self, lhs: impl Into<Operand<'a>>) -> Result<TimeSerie> {
        mul(lhs, self)
    }

    /// `self / rhs`.
    pub fn try_div<'a>(&'a self, rhs: impl Into<Operand<'a>>) -> Result<TimeSerie> {
        div(self, rhs)
    }

    /// `lhs / self`.
    pub fn try_rdiv<'a>(&'a self, lhs: impl Into<Operand<'a>>) -> Result<TimeSerie> {
        div(lhs, self)
    }

    /// `self ** rhs`.
    pub fn try_pow<'a>(&'a self, rhs: impl Into<Operand<'a>>) -> Result<TimeSerie> {
        pow(self, rhs)
    }

    /// `lhs ** self`.
    pub fn try_rpow<'a>(&'a self, lhs: impl Into<Operand<'a>>) -> Result<TimeSerie> {
        pow(lhs, self)
    }
}

// ── Operator traits ───────────────────────────────────────────────────────────
//
// Series ⊗ scalar never fails, so those impls return `TimeSerie` directly.
// Series ⊗ series may hit an index mismatch and returns `Result`.

macro_rules! scalar_ops {
    ($($scalar:ty),*) => {$(
        scalar_ops!(@op Add, add, add_pair, $scalar);
        scalar_ops!(@op Sub, sub, sub_pair, $scalar);
        scalar_ops!(@op Mul, mul, mul_pair, $scalar);
        scalar_ops!(@op Div, div, div_pair, $scalar);
    )*};
    (@op $trait:ident, $method:ident, $kernel:ident, $scalar:ty) => {
        impl $trait<$scalar> for &TimeSerie {
            type Output = TimeSerie;
            fn $method(self, rhs: $scalar) -> TimeSerie {
                $kernel(Pair::SeriesScalar(self, rhs as Real))
            }
        }

        impl $trait<$scalar> for TimeSerie {
            type Output = TimeSerie;
            fn $method(self, rhs: $scalar) -> TimeSerie {
                $kernel(Pair::SeriesScalar(&self, rhs as Real))
            }
        }

        impl $trait<&TimeSerie> for $scalar {
            type Output = TimeSerie;
            fn $method(self, rhs: &TimeSerie) -> TimeSerie {
                $kernel(Pair::ScalarSeries(self as Real, rhs))
            }
        }

        impl $trait<TimeSerie> for $scalar {
            type Output = TimeSerie;
            fn $method(self, rhs: TimeSerie) -> TimeSerie {
                $kernel(Pair::ScalarSeries(self as Real, &rhs))
            }
        }
    };
}

scalar_ops!(f64, i64);

macro_rules! series_ops {
    ($($trait:ident, $method:ident);*) => {$(
        impl $trait<&TimeSerie> for &TimeSerie {
            type Output = Result<TimeSerie>;
            fn $method(self, rhs: &TimeSerie) -> Result<TimeSerie> {
                $method(self, rhs)
            }
        }

        impl $trait<&TimeSerie> for TimeSerie {
            type Output = Result<TimeSerie>;
            fn $method(self, rhs: &TimeSerie) -> Result<TimeSerie> {
                $method(&self, rhs)
            }
        }

        impl $trait<TimeSerie> for &TimeSerie {
            type Output = Result<TimeSerie>;
            fn $method(self, rhs: TimeSerie) -> Result<TimeSerie> {
                $method(self, &rhs)
            }
        }

        impl $trait<TimeSerie> for TimeSerie {
            type Output = Result<TimeSerie>;
            fn $method(self, rhs: TimeSerie) -> Result<TimeSerie> {
                $method(&self, &rhs)
            }
        }
    )*};
}

series_ops!(Add, add; Sub, sub; Mul, mul; Div, div);

impl Neg for &TimeSerie {
    type Output = TimeSerie;
    fn neg(self) -> TimeSerie {
        negate(self)
    }
}

impl Neg for TimeSerie {
    type Output = TimeSerie;
    fn neg(self) -> TimeSerie {
        negate(&self)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
