//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::buffer::Buffer;

use crate::core::action::{Digit, update};
use crate::core::keys::parse_sequence;
use crate::core::state::CalculatorState;

/// Builds a `Digit`, panicking on anything that is not `0`-`9` or `.`.
pub fn digit(c: char) -> Digit {
    Digit::new(c).unwrap()
}

/// Folds a compact key sequence (`"5+3="`) over the empty state.
pub fn press(keys: &str) -> CalculatorState {
    press_from(CalculatorState::new(), keys)
}

/// Folds a compact key sequence over an existing state.
pub fn press_from(state: CalculatorState, keys: &str) -> CalculatorState {
    parse_sequence(keys)
        .unwrap()
        .into_iter()
        .fold(state, |state, action| update(&state, action))
}

/// Flattens a rendered buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
