//! Configuration and builder API for calculators.
//!
//! This module provides the serde-loadable configuration, a fluent builder
//! that validates it, and the macro used to declare phase enums.

pub mod calculator;
pub mod config;
pub mod error;
pub mod macros;

pub use calculator::CalculatorBuilder;
pub use config::{CalculatorConfig, MAX_PI_DECIMALS};
pub use error::BuildError;
