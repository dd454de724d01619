//! End-to-end keypad scenarios driven through a `Session`.

use keycalc::input::Button;
use keycalc::machine::{CalcError, Calculator, Operator, Session, StepResult};
use keycalc::{CalculatorConfig, Phase};

fn run_keys(keys: &[&str]) -> Session<Vec<String>> {
    let mut session = Session::new(Calculator::new(), Vec::new());
    for key in keys {
        session.press_key(key);
    }
    session
}

fn last_frame(session: &Session<Vec<String>>) -> &str {
    session.sink().last().map(String::as_str).unwrap_or_default()
}

#[test]
fn divide_by_zero_then_digit_replaces_sentinel() {
    let mut session = run_keys(&["5", "/", "0", "="]);
    assert_eq!(last_frame(&session), "Can't divide by 0");
    assert_eq!(session.calculator().pending_operator(), None);
    assert_eq!(
        session.calculator().error(),
        Some(&CalcError::DivisionByZero)
    );

    session.press_key("3");
    assert_eq!(last_frame(&session), "3");
}

#[test]
fn chained_entry_without_equals() {
    let session = run_keys(&["2", "+", "3", "+", "4", "="]);
    assert_eq!(
        session.sink(),
        &["0", "2", "2 +", "3", "5 +", "4", "9"]
    );
}

#[test]
fn repeated_equals_is_idempotent() {
    let mut session = run_keys(&["7", "*", "6", "Enter"]);
    assert_eq!(last_frame(&session), "42");
    let frames = session.sink().len();
    let before = session.calculator().snapshot();

    assert_eq!(session.press_key("Enter"), Some(StepResult::Ignored));
    assert_eq!(session.sink().len(), frames);
    assert_eq!(session.calculator().snapshot(), before);
}

#[test]
fn escape_clears_mid_expression() {
    let session = run_keys(&["9", "-", "4", "Escape"]);
    let calculator = session.calculator();
    assert_eq!(calculator.current_operand(), "0");
    assert_eq!(calculator.previous_operand(), None);
    assert_eq!(calculator.pending_operator(), None);
    assert!(!calculator.is_awaiting_new_operand());
    assert_eq!(calculator.phase(), Phase::Entering);
}

#[test]
fn backspace_on_single_character_yields_zero() {
    let session = run_keys(&["8", "Backspace"]);
    assert_eq!(last_frame(&session), "0");

    let session = run_keys(&["Backspace"]);
    assert_eq!(last_frame(&session), "0");
}

#[test]
fn unmapped_keys_change_nothing() {
    let mut session = run_keys(&["4"]);
    let before = session.calculator().snapshot();
    assert_eq!(session.press_key("Tab"), None);
    assert_eq!(session.press_key("q"), None);
    assert_eq!(session.calculator().snapshot(), before);
    assert_eq!(session.sink(), &["0", "4"]);
}

#[test]
fn floating_point_artifacts_do_not_appear() {
    let session = run_keys(&["0", ".", "1", "+", "0", ".", "2", "="]);
    assert_eq!(last_frame(&session), "0.3");
}

#[test]
fn modulo_keeps_sign_of_dividend() {
    let session = run_keys(&["0", "-", "7", "=", "%", "3", "="]);
    assert_eq!(last_frame(&session), "-1");
}

#[test]
fn power_key_raises() {
    let session = run_keys(&["3", "^", "4", "="]);
    assert_eq!(last_frame(&session), "81");
}

#[test]
fn button_panel_drives_the_calculator() {
    let layout = r#"[
        {"kind": "number", "value": "5"},
        {"kind": "function", "value": "factorial"},
        {"kind": "operator", "value": "÷"},
        {"kind": "number", "value": "4"},
        {"kind": "operator", "value": "="},
        {"kind": "control", "value": "undo"}
    ]"#;
    let buttons: Vec<Button> = serde_json::from_str(layout).unwrap();

    let mut session = Session::new(Calculator::new(), Vec::new());
    let results: Vec<Option<StepResult>> =
        buttons.iter().map(|b| session.press_button(b)).collect();

    assert_eq!(
        session.sink(),
        &["0", "5", "120", "120 /", "4", "30"]
    );
    assert_eq!(results.last(), Some(&None));
}

#[test]
fn factorial_rejects_negative_and_fractional_input() {
    let mut session = run_keys(&["0", "-", "1", "="]);
    session.press_button(&Button::Function("factorial".into()));
    assert_eq!(last_frame(&session), "Error");

    let mut session = run_keys(&["2", ".", "5"]);
    session.press_button(&Button::Function("factorial".into()));
    assert_eq!(last_frame(&session), "Error");
    assert_eq!(session.calculator().phase(), Phase::Errored);
}

#[test]
fn factorial_exceeds_float_precision_exactly() {
    let mut session = run_keys(&["2", "5"]);
    session.press_button(&Button::Function("factorial".into()));
    assert_eq!(last_frame(&session), "15511210043330985984000000");
}

#[test]
fn pi_square_and_power_buttons() {
    let mut session = Session::new(Calculator::new(), Vec::new());
    session.press_button(&Button::Function("pi".into()));
    assert_eq!(last_frame(&session), "3.14159265");

    session.press_button(&Button::Control("clear".into()));
    session.press_key("9");
    session.press_button(&Button::Function("square".into()));
    assert_eq!(last_frame(&session), "81");

    let frames = session.sink().len();
    session.press_button(&Button::Function("power".into()));
    assert_eq!(session.sink().len(), frames);
    assert_eq!(
        session.calculator().pending_operator(),
        Some(Operator::Power)
    );
    session.press_key("2");
    session.press_key("=");
    assert_eq!(last_frame(&session), "6561");
}

#[test]
fn configuration_from_json_changes_sentinels() {
    let config = CalculatorConfig::from_json(
        r#"{ "division_error": "Undefined", "invalid_input_error": "Invalid" }"#,
    )
    .unwrap();
    let calculator = Calculator::builder().config(config).build().unwrap();
    let mut session = Session::new(calculator, String::new());

    for key in ["1", "/", "0", "="] {
        session.press_key(key);
    }
    assert_eq!(session.sink(), "Undefined");

    session.press_key("4");
    session.press_button(&Button::Number(".".into()));
    session.press_key("5");
    session.press_button(&Button::Function("factorial".into()));
    assert_eq!(session.sink(), "Invalid");
}

#[test]
fn backspace_edits_a_result_in_place() {
    let session = run_keys(&["9", "+", "8", "Enter", "Backspace", "5"]);
    assert_eq!(last_frame(&session), "15");
    assert_eq!(session.calculator().phase(), Phase::Entering);
}

#[test]
fn oversized_results_show_error_immediately() {
    let mut session = run_keys(&["9", "9", "^", "1", "0", "2", "4"]);
    assert_eq!(session.press_key("^"), Some(StepResult::Displayed("Error".into())));
    assert_eq!(session.press_key("="), Some(StepResult::Ignored));
    assert_eq!(last_frame(&session), "Error");
    assert_eq!(
        session.calculator().error(),
        Some(&CalcError::Overflow { limit: 1_000 })
    );

    let mut session = run_keys(&["9", "9"]);
    for _ in 0..12 {
        session.press_button(&Button::Function("square".into()));
    }
    assert_eq!(last_frame(&session), "Error");
}
