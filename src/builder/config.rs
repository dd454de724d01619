//! Calculator configuration.

use crate::builder::error::BuildError;
use crate::machine::CalcError;
use crate::number::Decimal;
use serde::{Deserialize, Serialize};

/// Largest supported `pi_decimals`; `f64` carries no more accurate digits.
pub const MAX_PI_DECIMALS: u32 = 15;

/// Tunable behavior of a calculator instance.
///
/// Every field has a default, so partial JSON documents are accepted.
///
/// # Example
///
/// ```rust
/// use keycalc::builder::CalculatorConfig;
///
/// let config = CalculatorConfig::from_json(r#"{ "pi_decimals": 4 }"#).unwrap();
/// assert_eq!(config.pi_decimals, 4);
/// assert_eq!(config.division_error, "Can't divide by 0");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Sentinel shown after dividing (or taking a remainder) by zero
    pub division_error: String,
    /// Sentinel shown for every other arithmetic failure
    pub invalid_input_error: String,
    /// Fractional digits of the `pi` function
    pub pi_decimals: u32,
    /// Fractional digits kept by division
    pub division_scale: u32,
    /// Largest accepted factorial argument
    pub max_factorial_input: u64,
    /// Significant digits an arithmetic result may carry before it overflows
    pub max_result_digits: u64,
    /// Phase transitions retained by a session
    pub history_limit: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            division_error: "Can't divide by 0".to_string(),
            invalid_input_error: "Error".to_string(),
            pi_decimals: 8,
            division_scale: 20,
            max_factorial_input: 10_000,
            max_result_digits: 1_000,
            history_limit: 256,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the sentinels can never be confused with operands and that
    /// precision settings are supported.
    pub fn validate(&self) -> Result<(), BuildError> {
        check_sentinel("division by zero", &self.division_error)?;
        check_sentinel("invalid input", &self.invalid_input_error)?;

        if self.pi_decimals > MAX_PI_DECIMALS {
            return Err(BuildError::PiPrecisionTooHigh {
                requested: self.pi_decimals,
                max: MAX_PI_DECIMALS,
            });
        }
        if self.max_result_digits == 0 {
            return Err(BuildError::InvalidConfig(
                "max_result_digits must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Display text substituted for the operand after `error`.
    pub fn sentinel(&self, error: &CalcError) -> &str {
        match error {
            CalcError::DivisionByZero => &self.division_error,
            CalcError::InvalidFactorialInput
            | CalcError::InvalidPower
            | CalcError::Overflow { .. }
            | CalcError::InvalidOperand(_) => &self.invalid_input_error,
        }
    }
}

fn check_sentinel(kind: &'static str, text: &str) -> Result<(), BuildError> {
    if text.is_empty() {
        return Err(BuildError::EmptySentinel { kind });
    }
    if text.parse::<Decimal>().is_ok() {
        return Err(BuildError::NumericSentinel(text.to_string()));
    }
    Ok(())
}
