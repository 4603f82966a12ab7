//! # Actions
//!
//! Every button press becomes an `Action`.
//! User presses `7`? That's `Action::AddDigit(Digit('7'))`.
//! User presses `=`? That's `Action::Evaluate`.
//!
//! The `update()` function takes the current state and an action,
//! then returns the new state. No side effects here.
//!
//! ```text
//! &State + Action  →  update()  →  New State
//! ```
//!
//! Input that makes no sense in the current state (evaluating with a missing
//! operand, deleting from nothing, a second decimal point) is absorbed: the
//! returned state equals the input.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::evaluate::evaluate;
use crate::core::operation::Operation;
use crate::core::state::CalculatorState;

/// A single keypad character: `0`-`9` or the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    pub const POINT: Digit = Digit('.');
    pub const ZERO: Digit = Digit('0');

    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Digit(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Digit::new(c).ok_or_else(|| format!("not a digit: {c:?}"))
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> char {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    AddDigit(Digit),
    ChooseOperation(Operation),
    Clear,
    DeleteDigit,
    Evaluate,
}

/// Pure transition function: returns the next state, leaving `state` as is.
pub fn update(state: &CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(op) => choose_operation(state, op),
        Action::Clear => CalculatorState::default(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
    }
}

fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            previous_operand: state.previous_operand.clone(),
            operation: state.operation,
            overwrite: false,
        };
    }

    let current = state.current_operand.as_deref().unwrap_or("");
    if digit == Digit::ZERO && current == "0" {
        log::trace!("Ignoring repeated leading zero");
        return state.clone();
    }
    if digit.is_point() && current.contains('.') {
        log::trace!("Ignoring second decimal point");
        return state.clone();
    }

    CalculatorState {
        current_operand: Some(format!("{current}{digit}")),
        previous_operand: state.previous_operand.clone(),
        operation: state.operation,
        overwrite: state.overwrite,
    }
}

fn choose_operation(state: &CalculatorState, op: Operation) -> CalculatorState {
    match (&state.current_operand, &state.previous_operand) {
        (None, None) => {
            log::trace!("Ignoring {op}: no operands");
            state.clone()
        }
        // Operation already pending: the user changed their mind.
        (None, Some(_)) => CalculatorState {
            current_operand: None,
            previous_operand: state.previous_operand.clone(),
            operation: Some(op),
            overwrite: state.overwrite,
        },
        (Some(current), None) => CalculatorState {
            current_operand: None,
            previous_operand: Some(current.clone()),
            operation: Some(op),
            overwrite: state.overwrite,
        },
        // Chaining: fold the pending expression into the new left-hand side.
        (Some(current), Some(previous)) => {
            let previous_operand = match state.operation {
                Some(pending) => evaluate(previous, current, pending),
                None => String::new(),
            };
            CalculatorState {
                current_operand: None,
                previous_operand: Some(previous_operand),
                operation: Some(op),
                overwrite: state.overwrite,
            }
        }
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            previous_operand: state.previous_operand.clone(),
            operation: state.operation,
            overwrite: false,
        };
    }

    let Some(current) = state.current_operand.as_deref() else {
        log::trace!("Ignoring delete: nothing to delete");
        return state.clone();
    };

    let mut chars = current.chars();
    chars.next_back();
    let remaining = chars.as_str();

    CalculatorState {
        current_operand: (!remaining.is_empty()).then(|| remaining.to_string()),
        previous_operand: state.previous_operand.clone(),
        operation: state.operation,
        overwrite: false,
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    let (Some(op), Some(current), Some(previous)) = (
        state.operation,
        state.current_operand.as_deref(),
        state.previous_operand.as_deref(),
    ) else {
        log::trace!("Ignoring evaluate: expression incomplete");
        return state.clone();
    };

    CalculatorState {
        current_operand: Some(evaluate(previous, current, op)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{digit, press};

    #[test]
    fn test_digits_append() {
        let state = press("123");
        assert_eq!(state.current_operand.as_deref(), Some("123"));
        assert!(!state.overwrite);
    }

    #[test]
    fn test_leading_zero_not_duplicated() {
        assert_eq!(press("00").current_operand.as_deref(), Some("0"));
        assert_eq!(press("000").current_operand.as_deref(), Some("0"));
    }

    #[test]
    fn test_zero_after_other_digits_appends() {
        assert_eq!(press("100").current_operand.as_deref(), Some("100"));
    }

    #[test]
    fn test_single_decimal_point() {
        assert_eq!(press("1.2.3").current_operand.as_deref(), Some("1.23"));
        assert_eq!(press("..").current_operand.as_deref(), Some("."));
    }

    #[test]
    fn test_choose_operation_without_operands_is_noop() {
        let state = CalculatorState::new();
        let next = update(&state, Action::ChooseOperation(Operation::Add));
        assert_eq!(next, state);
    }

    #[test]
    fn test_choose_operation_promotes_current() {
        let state = press("12+");
        assert_eq!(state.previous_operand.as_deref(), Some("12"));
        assert_eq!(state.operation, Some(Operation::Add));
        assert_eq!(state.current_operand, None);
    }

    #[test]
    fn test_choose_operation_replaces_pending() {
        let state = press("12+-*");
        assert_eq!(state.previous_operand.as_deref(), Some("12"));
        assert_eq!(state.operation, Some(Operation::Multiply));
    }

    #[test]
    fn test_choose_operation_chains() {
        let state = press("2+3*");
        assert_eq!(state.previous_operand.as_deref(), Some("5"));
        assert_eq!(state.operation, Some(Operation::Multiply));
        assert_eq!(state.current_operand, None);
    }

    #[test]
    fn test_evaluate() {
        let state = press("5+3=");
        assert_eq!(state.current_operand.as_deref(), Some("8"));
        assert_eq!(state.previous_operand, None);
        assert_eq!(state.operation, None);
        assert!(state.overwrite);
    }

    #[test]
    fn test_evaluate_incomplete_is_noop() {
        for keys in ["", "5", "5+", "="] {
            let state = press(keys);
            assert_eq!(update(&state, Action::Evaluate), state, "keys: {keys}");
        }
    }

    #[test]
    fn test_digit_after_result_overwrites() {
        let state = press("5+3=7");
        assert_eq!(state.current_operand.as_deref(), Some("7"));
        assert!(!state.overwrite);
    }

    #[test]
    fn test_operation_after_result_continues_from_it() {
        let state = press("5+3=*2=");
        assert_eq!(state.current_operand.as_deref(), Some("16"));
    }

    #[test]
    fn test_delete_after_result_starts_fresh() {
        let state = update(&press("5+3="), Action::DeleteDigit);
        assert_eq!(state.current_operand, None);
        assert!(!state.overwrite);
    }

    #[test]
    fn test_delete_drops_last_char() {
        let state = update(&press("123"), Action::DeleteDigit);
        assert_eq!(state.current_operand.as_deref(), Some("12"));
    }

    #[test]
    fn test_delete_last_char_unsets() {
        let state = update(&press("7"), Action::DeleteDigit);
        assert_eq!(state.current_operand, None);
    }

    #[test]
    fn test_delete_on_empty_is_noop() {
        let state = CalculatorState::new();
        assert_eq!(update(&state, Action::DeleteDigit), state);
    }

    #[test]
    fn test_delete_keeps_pending_operation() {
        let state = update(&press("12+3"), Action::DeleteDigit);
        assert_eq!(state.current_operand, None);
        assert_eq!(state.previous_operand.as_deref(), Some("12"));
        assert_eq!(state.operation, Some(Operation::Add));
    }

    #[test]
    fn test_clear_resets() {
        let state = update(&press("12+3"), Action::Clear);
        assert!(state.is_empty());
    }

    #[test]
    fn test_update_does_not_touch_input() {
        let state = press("12+3");
        let snapshot = state.clone();
        let _ = update(&state, Action::Evaluate);
        let _ = update(&state, Action::AddDigit(digit('4')));
        let _ = update(&state, Action::Clear);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_divide_by_zero_shows_infinity() {
        assert_eq!(press("4÷0=").current_operand.as_deref(), Some("Infinity"));
    }

    #[test]
    fn test_digit_rejects_non_digits() {
        assert_eq!(Digit::new('a'), None);
        assert_eq!(Digit::new('+'), None);
        assert_eq!(Digit::new('9').map(Digit::as_char), Some('9'));
    }

    #[test]
    fn test_action_serde() {
        let json = serde_json::to_string(&Action::AddDigit(digit('7'))).unwrap();
        assert_eq!(json, r#"{"AddDigit":"7"}"#);
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Action::AddDigit(digit('7')));
        assert!(serde_json::from_str::<Action>(r#"{"AddDigit":"q"}"#).is_err());
    }
}
