//! Sum keyed integer or floating-point values.
//!
//! [`sum::sum_numbers`] accepts any [`HashMap`][std::collections::HashMap] whose values
//! belong to the closed [`number::Number`] set, and the compiler rejects everything else.
//! [`value::try_sum`] is the run-time counterpart for values parsed from text.

pub mod entry;
pub mod number;
pub mod prelude;
pub mod sum;
pub mod value;
