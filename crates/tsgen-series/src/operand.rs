//! Operands accepted by the series operators.

use num_traits::ToPrimitive;
use tsgen_core::{Integer, Real};

use crate::time_serie::TimeSerie;

/// One side of a binary series operation.
///
/// Every value a caller can put next to a series converts into an
/// `Operand`; the operator dispatch in [`crate::ops`] then decides, per
/// operator, which categories it accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    /// An integral scalar.
    Int(Integer),
    /// A real scalar (never accepted by `**`, even when integral).
    Real(Real),
    /// Another series.
    Series(&'a TimeSerie),
    /// A value of a type no operator accepts, carrying its type name.
    Unsupported(&'static str),
}

impl<'a> Operand<'a> {
    /// The rejected category for any type `T`.
    ///
    /// ```
    /// use tsgen_series::Operand;
    /// let op = Operand::unsupported::<Vec<u8>>();
    /// assert!(matches!(op, Operand::Unsupported(_)));
    /// ```
    pub fn unsupported<T: ?Sized>() -> Self {
        Operand::Unsupported(std::any::type_name::<T>())
    }

    /// Type name reported in error messages.
    pub fn type_name(&self) -> &'static str {
        match *self {
            Operand::Int(_) => "int",
            Operand::Real(_) => "float",
            Operand::Series(_) => "TimeSerie",
            Operand::Unsupported(name) => name,
        }
    }

    /// Whether this operand is a series.
    pub fn is_series(&self) -> bool {
        matches!(self, Operand::Series(_))
    }

    /// The scalar value as a real, if this is a scalar.
    pub fn as_real(&self) -> Option<Real> {
        match *self {
            Operand::Int(n) => Some(n as Real),
            Operand::Real(x) => Some(x),
            _ => None,
        }
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl<'a> From<&'a TimeSerie> for Operand<'a> {
    fn from(s: &'a TimeSerie) -> Self {
        Operand::Series(s)
    }
}

macro_rules! int_operand {
    ($($t:ty),*) => {$(
        impl From<$t> for Operand<'_> {
            /// Integers that do not fit an `i64` degrade to a real scalar.
            fn from(n: $t) -> Self {
                match n.to_i64() {
                    Some(n) => Operand::Int(n),
                    None => Operand::Real(n.to_f64().unwrap_or(Real::NAN)),
                }
            }
        }
    )*};
}

int_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for Operand<'_> {
    fn from(x: f64) -> Self {
        Operand::Real(x)
    }
}

impl From<f32> for Operand<'_> {
    fn from(x: f32) -> Self {
        Operand::Real(Real::from(x))
    }
}

macro_rules! unsupported_operand {
    ($($t:ty),*) => {$(
        impl From<$t> for Operand<'_> {
            fn from(_: $t) -> Self {
                Operand::unsupported::<$t>()
            }
        }
    )*};
}

unsupported_operand!(&str, String, &String, bool, char);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_and_reals_are_distinct_categories() {
        assert_eq!(Operand::from(2), Operand::Int(2));
        assert_eq!(Operand::from(2u8), Operand::Int(2));
        assert_eq!(Operand::from(2.0), Operand::Real(2.0));
        assert_eq!(Operand::from(0.5f32), Operand::Real(0.5));
    }

    #[test]
    fn oversized_integers_become_reals() {
        assert_eq!(Operand::from(u64::MAX), Operand::Real(u64::MAX as Real));
    }

    #[test]
    fn text_is_unsupported() {
        let op = Operand::from("text");
        assert_eq!(op.type_name(), "&str");
        assert!(matches!(Operand::from(String::from("x")), Operand::Unsupported(_)));
        assert!(matches!(Operand::from(true), Operand::Unsupported("bool")));
        assert_eq!(op.as_real(), None);
        assert_eq!(Operand::Int(3).as_real(), Some(3.0));
    }
}
