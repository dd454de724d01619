//! Keycalc: a keypad calculator as an explicit state machine
//!
//! Keycalc follows a "pure core, imperative shell" split. The [`Calculator`]
//! is a plain value that consumes one input token at a time and reports what
//! the display should show; a [`Session`] wires it to a [`DisplaySink`] and
//! keeps a bounded history of phase changes.
//!
//! # Core Concepts
//!
//! - **Tokens**: digits, decimal point, operators, `=`, clear, delete and the
//!   function buttons, as closed enums
//! - **Phases**: `Entering`, `OperatorPending`, `AccumulatingSecondOperand`
//!   and `Errored`, derived from the calculator's data
//! - **Exact arithmetic**: operands are parsed into arbitrary-precision
//!   decimals, so `0.1 + 0.2` is `0.3` and `20!` is exact
//! - **Error sentinels**: division by zero and invalid function input replace
//!   the operand with display text instead of failing
//!
//! # Example
//!
//! ```rust
//! use keycalc::{Calculator, Session};
//!
//! let mut session = Session::new(Calculator::new(), String::new());
//! for key in ["1", "2", "+", "5", "+", "0", ".", "5", "Enter"] {
//!     session.press_key(key);
//! }
//! assert_eq!(session.sink(), "17.5");
//! ```

pub mod builder;
pub mod core;
pub mod input;
pub mod machine;
pub mod number;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder, CalculatorConfig};
pub use self::core::{Phase, State, StateHistory, StateTransition};
pub use machine::{
    CalcError, Calculator, DisplaySink, Function, Operator, Session, StepResult, Token,
};
