//! Imperative shell: routes calculator output to a display sink.

use crate::core::{Phase, StateHistory, StateTransition};
use crate::input::{token_for_key, Button};
use crate::machine::calculator::{Calculator, StepResult};
use crate::machine::token::Token;
use chrono::Utc;
use tracing::debug;

/// Receives the display text after every displayed transition.
pub trait DisplaySink {
    fn show(&mut self, text: &str);
}

/// A single text field: keeps only the latest text.
impl DisplaySink for String {
    fn show(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Records every frame, oldest first.
impl DisplaySink for Vec<String> {
    fn show(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

impl<D: DisplaySink + ?Sized> DisplaySink for &mut D {
    fn show(&mut self, text: &str) {
        (**self).show(text);
    }
}

/// A calculator bound to its display.
///
/// The sink is shown the initial `"0"` on construction and then the result
/// of every token that produces display output.
///
/// # Example
///
/// ```rust
/// use keycalc::machine::{Calculator, Session};
///
/// let mut session = Session::new(Calculator::new(), Vec::<String>::new());
/// for key in ["5", "/", "0", "Enter", "3"] {
///     session.press_key(key);
/// }
/// assert_eq!(session.sink(), &["0", "5", "5 /", "0", "Can't divide by 0", "3"]);
/// ```
#[derive(Debug)]
pub struct Session<D: DisplaySink> {
    calculator: Calculator,
    sink: D,
    history: StateHistory<Phase>,
}

impl<D: DisplaySink> Session<D> {
    pub fn new(calculator: Calculator, mut sink: D) -> Self {
        sink.show(calculator.display());
        let history = StateHistory::with_limit(calculator.config().history_limit);
        Self {
            calculator,
            sink,
            history,
        }
    }

    /// Process one token and forward any display output to the sink.
    pub fn press(&mut self, token: Token) -> StepResult {
        let from = self.calculator.phase();
        let result = self.calculator.apply(token);
        if let StepResult::Displayed(text) = &result {
            self.sink.show(text);
        }

        let to = self.calculator.phase();
        if from != to {
            self.history = self.history.record(StateTransition {
                from,
                to,
                timestamp: Utc::now(),
                trigger: token.to_string(),
            });
        }
        result
    }

    /// Process a keyboard key name. Unmapped keys are ignored.
    pub fn press_key(&mut self, key: &str) -> Option<StepResult> {
        let Some(token) = token_for_key(key) else {
            debug!(key, "ignoring unmapped key");
            return None;
        };
        Some(self.press(token))
    }

    /// Process an on-screen button. Unmapped buttons are ignored.
    pub fn press_button(&mut self, button: &Button) -> Option<StepResult> {
        let Some(token) = button.token() else {
            debug!(?button, "ignoring unmapped button");
            return None;
        };
        Some(self.press(token))
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Recent phase transitions, bounded by the configured history limit.
    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }
}
