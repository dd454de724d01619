//! Input tokens consumed by the calculator.

use crate::machine::error::ParseTokenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| u8::try_from(d).ok()).map(Self)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = ParseTokenError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| ParseTokenError::UnknownDigit(value.to_string()))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Truncated remainder; the result takes the sign of the dividend.
    Modulo,
    Power,
}

impl Operator {
    /// ASCII symbol used in the annotated display.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "^",
        }
    }
}

impl FromStr for Operator {
    type Err = ParseTokenError;

    /// Accepts the ASCII keyboard symbols and the typographic button labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" | "\u{2212}" => Ok(Self::Subtract),
            "*" | "\u{d7}" => Ok(Self::Multiply),
            "/" | "\u{f7}" => Ok(Self::Divide),
            "%" => Ok(Self::Modulo),
            "^" => Ok(Self::Power),
            other => Err(ParseTokenError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Single-operand function buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Function {
    Pi,
    Square,
    Factorial,
    /// Selects `^` without refreshing the display.
    Power,
}

impl Function {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::Square => "square",
            Self::Factorial => "factorial",
            Self::Power => "power",
        }
    }
}

impl FromStr for Function {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pi" => Ok(Self::Pi),
            "square" => Ok(Self::Square),
            "factorial" => Ok(Self::Factorial),
            "power" => Ok(Self::Power),
            other => Err(ParseTokenError::UnknownFunction(other.to_string())),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the calculator reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    Delete,
    Function(Function),
}

impl Token {
    /// Shorthand for a digit token; `None` for values above 9.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// True for tokens that can start a fresh operand.
    pub fn is_numeral_entry(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::DecimalPoint)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl From<Function> for Token {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Digit> for Token {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{}", d.as_char()),
            Self::DecimalPoint => f.write_str("."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("clear"),
            Self::Delete => f.write_str("delete"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_bounded() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::from_char('7').map(Digit::as_char), Some('7'));
        assert!(Digit::from_char('a').is_none());
    }

    #[test]
    fn operators_parse_ascii_and_typographic_symbols() {
        assert_eq!("*".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("\u{d7}".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("\u{f7}".parse::<Operator>().unwrap(), Operator::Divide);
        assert_eq!("\u{2212}".parse::<Operator>().unwrap(), Operator::Subtract);
        assert!(matches!(
            "&".parse::<Operator>(),
            Err(ParseTokenError::UnknownOperator(_))
        ));
    }

    #[test]
    fn functions_parse_by_name() {
        assert_eq!("factorial".parse::<Function>().unwrap(), Function::Factorial);
        assert!("sqrt".parse::<Function>().is_err());
    }

    #[test]
    fn tokens_display_as_labels() {
        assert_eq!(Token::digit(3).unwrap().to_string(), "3");
        assert_eq!(Token::from(Operator::Divide).to_string(), "/");
        assert_eq!(Token::from(Function::Pi).to_string(), "pi");
        assert_eq!(Token::Equals.to_string(), "=");
    }

    #[test]
    fn digit_deserialization_rejects_out_of_range() {
        assert!(serde_json::from_str::<Digit>("4").is_ok());
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }
}
