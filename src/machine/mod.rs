//! The calculator state machine and its shell.
//!
//! # Key Concepts
//!
//! - **Tokens**: closed enums for digits, operators, functions and controls
//! - **Calculator**: pure core; applies a token and reports a `StepResult`
//! - **Session**: imperative shell; forwards display output to a `DisplaySink`
//!   and records phase history

mod arithmetic;
mod calculator;
mod error;
mod session;
mod token;

pub use calculator::{Calculator, Snapshot, StepResult};
pub use error::{CalcError, ParseTokenError};
pub use session::{DisplaySink, Session};
pub use token::{Digit, Function, Operator, Token};
