use std::fmt::{Debug, Display};

/// Runtime tag of a numeric kind.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, clap::ValueEnum, derive_more::Display)]
pub enum Kind {
    /// 64-bit signed integer.
    #[display("integer")]
    Integer,

    /// 64-bit floating point.
    #[display("float")]
    Float,
}

mod sealed {
    pub trait Sealed {}
}

/// Closed set of value types which may be summed: [`i64`] and [`f64`].
///
/// The trait is sealed, so instantiating a generic sum with any other value type
/// is rejected by the compiler:
///
/// ```compile_fail
/// use std::collections::HashMap;
///
/// let map: HashMap<&str, u32> = HashMap::from([("first", 1)]);
/// let _ = tally::sum::sum_numbers(&map);
/// ```
///
/// ```compile_fail
/// use tally::number::Number;
///
/// struct Money(i64);
///
/// impl Number for Money {
///     const ZERO: Self = Self(0);
///     const KIND: tally::number::Kind = tally::number::Kind::Integer;
///
///     fn accumulate(self, rhs: Self) -> Self {
///         Self(self.0 + rhs.0)
///     }
/// }
/// ```
pub trait Number:
    sealed::Sealed + Copy + Send + Sync + Debug + Display + PartialEq + PartialOrd + 'static
{
    /// Additive identity, and the initial value of any accumulator.
    const ZERO: Self;

    const KIND: Kind;

    /// Add `rhs` to the accumulator.
    ///
    /// Integers wrap around on overflow so that the sum stays total and independent
    /// of the order of operands.
    #[must_use]
    fn accumulate(self, rhs: Self) -> Self;
}

macro_rules! number {
    ($type:ty, $kind:ident, $zero:literal, $add:expr) => {
        impl sealed::Sealed for $type {}

        impl Number for $type {
            const ZERO: Self = $zero;
            const KIND: Kind = Kind::$kind;

            fn accumulate(self, rhs: Self) -> Self {
                $add(self, rhs)
            }
        }
    };
}

number!(i64, Integer, 0, i64::wrapping_add);
number!(f64, Float, 0.0, <f64 as std::ops::Add>::add);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(i64::ZERO, 0);
        assert!(f64::ZERO.is_sign_positive());
        assert_eq!(f64::ZERO, 0.0);
    }

    #[test]
    fn test_kind() {
        assert_eq!(i64::KIND, Kind::Integer);
        assert_eq!(f64::KIND, Kind::Float);
        assert_eq!(Kind::Float.to_string(), "float");
    }

    #[test]
    fn test_accumulate_wraps() {
        assert_eq!(i64::MAX.accumulate(1), i64::MIN);
        assert_eq!(i64::MAX.accumulate(1).accumulate(-1), i64::MAX);
    }
}
