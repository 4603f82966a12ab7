//! # Button Labels
//!
//! Maps what is printed on a keypad button to the `Action` it fires, and
//! turns a compact string of button presses into a list of actions for the
//! batch front end.
//!
//! ```text
//! "12+3="  →  [AddDigit(1), AddDigit(2), ChooseOperation(+), AddDigit(3), Evaluate]
//! ```
//!
//! In the compact form `C` stands for `AC` and `<` for `DEL`.

use std::fmt;

use crate::core::action::{Action, Digit};
use crate::core::operation::Operation;

pub const CLEAR_LABEL: &str = "AC";
pub const DELETE_LABEL: &str = "DEL";
pub const EVALUATE_LABEL: &str = "=";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    UnknownKey { key: char, position: usize },
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::UnknownKey { key, position } => {
                write!(f, "unknown key {key:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for KeyError {}

impl Action {
    /// The action fired by the button with this label.
    pub fn from_label(label: &str) -> Option<Action> {
        match label {
            CLEAR_LABEL => Some(Action::Clear),
            DELETE_LABEL => Some(Action::DeleteDigit),
            EVALUATE_LABEL => Some(Action::Evaluate),
            _ => {
                let mut chars = label.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                Action::from_key(c)
            }
        }
    }

    /// The action for a single character in the compact form.
    pub fn from_key(c: char) -> Option<Action> {
        if let Some(digit) = Digit::new(c) {
            return Some(Action::AddDigit(digit));
        }
        if let Some(op) = Operation::from_symbol(c) {
            return Some(Action::ChooseOperation(op));
        }
        match c {
            '=' => Some(Action::Evaluate),
            'C' | 'c' => Some(Action::Clear),
            '<' => Some(Action::DeleteDigit),
            _ => None,
        }
    }
}

/// Parses a compact key sequence. Whitespace is skipped.
///
/// `position` in the error is the character index in `input`.
pub fn parse_sequence(input: &str) -> Result<Vec<Action>, KeyError> {
    input
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, key)| Action::from_key(key).ok_or(KeyError::UnknownKey { key, position }))
        .collect()
}
