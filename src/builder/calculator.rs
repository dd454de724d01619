//! Builder for constructing calculators.

use crate::builder::config::CalculatorConfig;
use crate::builder::error::BuildError;
use crate::machine::Calculator;

/// Builder for constructing calculators with a fluent API.
///
/// Every setting starts from [`CalculatorConfig::default`]; validation runs
/// once, in [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sentinel shown after a zero divisor.
    pub fn division_error(mut self, text: impl Into<String>) -> Self {
        self.config.division_error = text.into();
        self
    }

    /// Sentinel shown for invalid factorial or power input and oversized results.
    pub fn invalid_input_error(mut self, text: impl Into<String>) -> Self {
        self.config.invalid_input_error = text.into();
        self
    }

    pub fn pi_decimals(mut self, decimals: u32) -> Self {
        self.config.pi_decimals = decimals;
        self
    }

    pub fn division_scale(mut self, scale: u32) -> Self {
        self.config.division_scale = scale;
        self
    }

    pub fn max_factorial_input(mut self, max: u64) -> Self {
        self.config.max_factorial_input = max;
        self
    }

    /// Cap on the digits of arithmetic results; larger results become errors.
    pub fn max_result_digits(mut self, digits: u64) -> Self {
        self.config.max_result_digits = digits;
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Build the calculator.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Calculator, BuildError> {
        self.config.validate()?;
        Ok(Calculator::from_config(self.config))
    }
}
