//! Calculator error types.

use crate::number::ParseDecimalError;
use thiserror::Error;

/// Arithmetic failures.
///
/// These never escape the machine as faults: each one is replaced by an
/// error sentinel on the display.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("factorial requires a non-negative integer within range")]
    InvalidFactorialInput,

    #[error("power has no finite real result")]
    InvalidPower,

    #[error("result needs more than {limit} digits")]
    Overflow { limit: u64 },

    #[error("operand is not a numeral: {0}")]
    InvalidOperand(#[from] ParseDecimalError),
}

/// Errors raised when text cannot be mapped to a token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseTokenError {
    #[error("unknown digit '{0}'")]
    UnknownDigit(String),

    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("unknown control action '{0}'")]
    UnknownAction(String),
}
