//! The arithmetic input state machine.

use crate::builder::{CalculatorBuilder, CalculatorConfig};
use crate::core::{Phase, State};
use crate::machine::arithmetic;
use crate::machine::error::CalcError;
use crate::machine::token::{Digit, Function, Operator, Token};
use crate::number::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// What the display should do after a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// Show this text
    Displayed(String),

    /// State changed, but the display keeps its previous text
    Deferred,

    /// Token had no effect in the current phase
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Operand {
    Numeral(String),
    Sentinel(CalcError),
}

/// An operator waiting for its right-hand operand.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Pending {
    operator: Operator,
    lhs: String,
}

/// Serializable view of a calculator's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub current_operand: String,
    pub previous_operand: Option<String>,
    pub pending_operator: Option<Operator>,
    pub awaiting_new_operand: bool,
    pub phase: Phase,
    pub display: String,
}

/// Calculator state machine.
///
/// Each call to [`apply`](Self::apply) fully processes one token and reports
/// what the display should show. One instance backs one display.
///
/// # Example
///
/// ```rust
/// use keycalc::machine::{Calculator, Operator, StepResult, Token};
///
/// let mut calc = Calculator::new();
/// calc.apply(Token::digit(2).unwrap());
/// calc.apply(Operator::Add.into());
/// calc.apply(Token::digit(3).unwrap());
/// calc.apply(Operator::Add.into());
/// calc.apply(Token::digit(4).unwrap());
///
/// assert_eq!(calc.apply(Token::Equals), StepResult::Displayed("9".to_string()));
/// assert_eq!(calc.apply(Token::Equals), StepResult::Ignored);
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    config: CalculatorConfig,
    current: Operand,
    pending: Option<Pending>,
    awaiting_new_operand: bool,
    display: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the default configuration.
    pub fn new() -> Self {
        Self::from_config(CalculatorConfig::default())
    }

    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    /// Callers are expected to have validated `config`.
    pub(crate) fn from_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            current: Operand::Numeral("0".to_string()),
            pending: None,
            awaiting_new_operand: false,
            display: "0".to_string(),
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// The operand being entered, the last result, or the error sentinel.
    pub fn current_operand(&self) -> &str {
        match &self.current {
            Operand::Numeral(text) => text,
            Operand::Sentinel(error) => self.config.sentinel(error),
        }
    }

    pub fn previous_operand(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.lhs.as_str())
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    pub fn is_awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }

    /// The error behind the current sentinel, if one is showing.
    pub fn error(&self) -> Option<&CalcError> {
        match &self.current {
            Operand::Sentinel(error) => Some(error),
            Operand::Numeral(_) => None,
        }
    }

    /// Text most recently sent to the display.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Derive the phase from the current data (pure).
    pub fn phase(&self) -> Phase {
        match (&self.current, &self.pending) {
            (Operand::Sentinel(_), _) => Phase::Errored,
            (_, None) => Phase::Entering,
            (_, Some(_)) if self.awaiting_new_operand => Phase::OperatorPending,
            (_, Some(_)) => Phase::AccumulatingSecondOperand,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_operand: self.current_operand().to_string(),
            previous_operand: self.previous_operand().map(str::to_string),
            pending_operator: self.pending_operator(),
            awaiting_new_operand: self.awaiting_new_operand,
            phase: self.phase(),
            display: self.display.clone(),
        }
    }

    /// Process one token.
    ///
    /// While a sentinel is showing, only numeral entry and `Clear` have an
    /// effect; everything else is ignored.
    pub fn apply(&mut self, token: Token) -> StepResult {
        let before = self.phase();
        if before.is_error() && !(token.is_numeral_entry() || token == Token::Clear) {
            debug!(%token, "ignoring token while an error sentinel is showing");
            return StepResult::Ignored;
        }

        let result = match token {
            Token::Digit(digit) => self.enter_digit(digit),
            Token::DecimalPoint => self.enter_decimal_point(),
            Token::Operator(op) => self.choose_operator(op),
            Token::Equals => self.equals(),
            Token::Clear => self.clear(),
            Token::Delete => self.delete(),
            Token::Function(function) => self.apply_function(function),
        };

        if let StepResult::Displayed(text) = &result {
            self.display.clone_from(text);
        }
        trace!(
            %token,
            from = before.name(),
            to = self.phase().name(),
            display = %self.display,
            "applied token"
        );
        result
    }

    fn show_current(&self) -> StepResult {
        StepResult::Displayed(self.current_operand().to_string())
    }

    fn replace_current(&mut self, text: String) {
        self.current = Operand::Numeral(text);
        self.awaiting_new_operand = false;
    }

    fn enter_digit(&mut self, digit: Digit) -> StepResult {
        let c = digit.as_char();
        match &mut self.current {
            Operand::Numeral(text) if !self.awaiting_new_operand => {
                if text == "0" {
                    text.clear();
                }
                text.push(c);
            }
            _ => self.replace_current(c.to_string()),
        }
        self.show_current()
    }

    fn enter_decimal_point(&mut self) -> StepResult {
        match &mut self.current {
            Operand::Numeral(text) if !self.awaiting_new_operand => {
                if text.contains('.') {
                    return StepResult::Ignored;
                }
                text.push('.');
            }
            _ => self.replace_current("0.".to_string()),
        }
        self.show_current()
    }

    fn choose_operator(&mut self, operator: Operator) -> StepResult {
        if self.pending.is_some() && !self.awaiting_new_operand {
            if let Err(error) = self.evaluate() {
                return self.fail(error);
            }
        }

        let lhs = self.current_operand().to_string();
        let annotated = format!("{lhs} {}", operator.symbol());
        self.pending = Some(Pending { operator, lhs });
        self.awaiting_new_operand = true;
        StepResult::Displayed(annotated)
    }

    fn equals(&mut self) -> StepResult {
        if self.pending.is_none() || self.awaiting_new_operand {
            return StepResult::Ignored;
        }
        match self.evaluate() {
            Ok(()) => self.show_current(),
            Err(error) => self.fail(error),
        }
    }

    /// Fold the pending operation into the current operand.
    fn evaluate(&mut self) -> Result<(), CalcError> {
        let Some(pending) = &self.pending else {
            return Ok(());
        };
        let lhs: Decimal = pending.lhs.parse()?;
        let rhs: Decimal = self.current_operand().parse()?;
        let result = arithmetic::apply(pending.operator, &lhs, &rhs, &self.config)?;

        self.current = Operand::Numeral(result.to_string());
        self.pending = None;
        self.awaiting_new_operand = true;
        Ok(())
    }

    /// Enter the sentinel state; the next digit starts a fresh operand.
    fn fail(&mut self, error: CalcError) -> StepResult {
        debug!(%error, "arithmetic failed, showing sentinel");
        self.current = Operand::Sentinel(error);
        self.pending = None;
        self.awaiting_new_operand = true;
        self.show_current()
    }

    fn clear(&mut self) -> StepResult {
        self.current = Operand::Numeral("0".to_string());
        self.pending = None;
        self.awaiting_new_operand = false;
        self.show_current()
    }

    /// Trim the last character. Editing a result makes it the operand being
    /// entered, so later digits append to it.
    fn delete(&mut self) -> StepResult {
        if let Operand::Numeral(text) = &mut self.current {
            text.pop();
            if text.is_empty() || text == "-" {
                *text = "0".to_string();
            }
        }
        if self.pending.is_none() {
            self.awaiting_new_operand = false;
        }
        self.show_current()
    }

    fn apply_function(&mut self, function: Function) -> StepResult {
        let outcome = match function {
            Function::Pi => Ok(arithmetic::pi(self.config.pi_decimals)),
            Function::Square => self
                .current_operand()
                .parse::<Decimal>()
                .map_err(CalcError::from)
                .and_then(|value| arithmetic::square(&value, self.config.max_result_digits))
                .map(|value| value.to_string()),
            Function::Factorial => self
                .current_operand()
                .parse::<Decimal>()
                .map_err(CalcError::from)
                .and_then(|value| {
                    arithmetic::factorial_of(&value, self.config.max_factorial_input)
                })
                .map(|value| value.to_string()),
            Function::Power => {
                return match self.choose_operator(Operator::Power) {
                    StepResult::Displayed(_) if self.error().is_none() => StepResult::Deferred,
                    other => other,
                };
            }
        };

        match outcome {
            Ok(text) => {
                self.replace_current(text);
                self.show_current()
            }
            Err(error) => self.fail(error),
        }
    }
}
