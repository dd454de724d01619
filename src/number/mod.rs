//! Numeric representation of calculator operands.
//!
//! Operands travel through the machine as numeral strings and are parsed into
//! [`Decimal`] only for arithmetic. Factorials use unbounded unsigned integers
//! because they outgrow every fixed-width type after a handful of steps.

mod decimal;

pub use decimal::{Decimal, ParseDecimalError};

use num_bigint::BigUint;

/// Exact `n!`.
///
/// # Example
///
/// ```rust
/// use keycalc::number::factorial;
///
/// assert_eq!(factorial(5).to_string(), "120");
/// assert_eq!(factorial(20).to_string(), "2432902008176640000");
/// ```
pub fn factorial(n: u64) -> BigUint {
    let mut product = BigUint::from(1u32);
    for factor in 2..=n {
        product *= factor;
    }
    product
}
