//! Build errors for calculator configuration and construction.

use thiserror::Error;

/// Errors that can occur when loading configuration or building a calculator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Error sentinel for {kind} must not be empty")]
    EmptySentinel { kind: &'static str },

    #[error("Error sentinel '{0}' parses as a number and would be mistaken for an operand")]
    NumericSentinel(String),

    #[error("Pi precision {requested} exceeds the maximum of {max} fractional digits")]
    PiPrecisionTooHigh { requested: u32, max: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
