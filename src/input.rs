//! Mapping from raw input events to calculator tokens.
//!
//! Two event sources feed the calculator: keyboard key names (as reported by
//! a browser `KeyboardEvent.key` or a terminal) and on-screen buttons, each
//! carrying a kind and a value. Anything that does not map to a token yields
//! `None` and is meant to be ignored by the caller.

use crate::machine::{Digit, Function, Operator, ParseTokenError, Token};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Map a key name to a token.
///
/// # Example
///
/// ```rust
/// use keycalc::input::token_for_key;
/// use keycalc::machine::{Operator, Token};
///
/// assert_eq!(token_for_key("Enter"), Some(Token::Equals));
/// assert_eq!(token_for_key("/"), Some(Token::Operator(Operator::Divide)));
/// assert_eq!(token_for_key("Tab"), None);
/// ```
pub fn token_for_key(key: &str) -> Option<Token> {
    match key {
        "." => Some(Token::DecimalPoint),
        "=" | "Enter" => Some(Token::Equals),
        "Backspace" => Some(Token::Delete),
        "Escape" => Some(Token::Clear),
        _ => digit_token(key).or_else(|| key.parse::<Operator>().ok().map(Token::Operator)),
    }
}

fn digit_token(text: &str) -> Option<Token> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Digit::from_char(c).map(Token::Digit),
        _ => None,
    }
}

/// Control actions carried by non-numeric, non-operator buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Clear,
    Delete,
}

impl FromStr for Action {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clear" => Ok(Self::Clear),
            "delete" => Ok(Self::Delete),
            other => Err(ParseTokenError::UnknownAction(other.to_string())),
        }
    }
}

/// An on-screen button: a kind plus the value or action name it carries.
///
/// Buttons are plain data so a keypad layout can be loaded from JSON:
///
/// ```rust
/// use keycalc::input::Button;
/// use keycalc::machine::{Function, Token};
///
/// let layout: Vec<Button> = serde_json::from_str(
///     r#"[{"kind": "number", "value": "7"}, {"kind": "function", "value": "factorial"}]"#,
/// )
/// .unwrap();
/// assert_eq!(layout[1].token(), Some(Token::Function(Function::Factorial)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Button {
    /// A digit or the decimal point
    Number(String),
    /// An operator symbol, or `=`
    Operator(String),
    /// `clear` or `delete`
    Control(String),
    /// `pi`, `square`, `factorial` or `power`
    Function(String),
}

impl Button {
    /// The token this button produces, if it is recognised.
    pub fn token(&self) -> Option<Token> {
        match self {
            Self::Number(value) if value == "." => Some(Token::DecimalPoint),
            Self::Number(value) => digit_token(value),
            Self::Operator(value) if value == "=" => Some(Token::Equals),
            Self::Operator(value) => value.parse::<Operator>().ok().map(Token::Operator),
            Self::Control(action) => action.parse::<Action>().ok().map(|action| match action {
                Action::Clear => Token::Clear,
                Action::Delete => Token::Delete,
            }),
            Self::Function(name) => name.parse::<Function>().ok().map(Token::Function),
        }
    }
}
