//! Core state machine types.
//!
//! This module contains the pure pieces shared by the calculator:
//! - Phase description via the `State` trait
//! - The calculator's `Phase` enum
//! - Bounded, timestamped phase history

mod history;
mod phase;
mod state;

pub use history::{StateHistory, StateTransition};
pub use phase::Phase;
pub use state::State;
