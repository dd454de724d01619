//! Core State trait for state machine phases.
//!
//! Anything that describes where a state machine currently sits implements
//! this trait, which provides pure methods for inspecting the phase.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine phases.
///
/// All methods are pure - no side effects. A phase is an immutable value
/// describing the current position of a machine, derived from its data.
///
/// # Required Traits
///
/// - `Clone`: phases are copied into transition history
/// - `PartialEq`: phases are compared to detect transitions
/// - `Debug`: phases are debuggable for diagnostics
/// - `Serialize` + `Deserialize`: phases can be exported alongside snapshots
///
/// # Example
///
/// ```rust
/// use keycalc::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
///     Broken,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
///
/// assert!(Lamp::Broken.is_error());
/// assert!(!Lamp::On.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the phase's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) phase.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error phase.
    ///
    /// Error phases are not necessarily final: a calculator showing an error
    /// sentinel still accepts a fresh digit.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    #[test]
    fn phase_names_are_stable() {
        assert_eq!(Phase::Entering.name(), "Entering");
        assert_eq!(Phase::OperatorPending.name(), "OperatorPending");
        assert_eq!(
            Phase::AccumulatingSecondOperand.name(),
            "AccumulatingSecondOperand"
        );
        assert_eq!(Phase::Errored.name(), "Errored");
    }

    #[test]
    fn only_errored_is_an_error_phase() {
        assert!(!Phase::Entering.is_error());
        assert!(!Phase::OperatorPending.is_error());
        assert!(!Phase::AccumulatingSecondOperand.is_error());
        assert!(Phase::Errored.is_error());
    }

    #[test]
    fn no_phase_is_final() {
        assert!(!Phase::Entering.is_final());
        assert!(!Phase::Errored.is_final());
    }

    #[test]
    fn phase_serializes_correctly() {
        let phase = Phase::OperatorPending;
        let json = serde_json::to_string(&phase).unwrap();
        let deserialized: Phase = serde_json::from_str(&json).unwrap();
        assert_eq!(phase, deserialized);
    }
}
