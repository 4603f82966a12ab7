//! # Calculator State
//!
//! The whole calculator is one value:
//!
//! ```text
//! CalculatorState
//! ├── current_operand: Option<String>    // being typed, not yet committed
//! ├── previous_operand: Option<String>   // committed left-hand side
//! ├── operation: Option<Operation>       // pending operator
//! └── overwrite: bool                    // next digit replaces current
//! ```
//!
//! State changes only happen through `update(&state, action)` in action.rs,
//! which hands back a new value. Nothing here is mutated in place.

use serde::Serialize;

use crate::core::format::format_operand_with;
use crate::core::operation::Operation;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalculatorState {
    pub current_operand: Option<String>,
    pub previous_operand: Option<String>,
    pub operation: Option<Operation>,
    /// Set right after an evaluation so the next digit starts a new number.
    pub overwrite: bool,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True for the initial, fully cleared state.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Builds the formatted view the presentation layer renders.
    pub fn readout(&self, separator: char) -> Readout {
        Readout {
            previous: format_operand_with(self.previous_operand.as_deref(), separator),
            operation: self.operation,
            current: format_operand_with(self.current_operand.as_deref(), separator),
        }
    }
}

/// Outbound view of a state: formatted operands plus the pending operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readout {
    pub previous: Option<String>,
    pub operation: Option<Operation>,
    pub current: Option<String>,
}

impl Readout {
    /// The upper line: previous operand followed by the pending operation.
    pub fn previous_line(&self) -> String {
        match (&self.previous, self.operation) {
            (Some(previous), Some(op)) => format!("{previous} {op}"),
            (Some(previous), None) => previous.clone(),
            (None, Some(op)) => op.to_string(),
            (None, None) => String::new(),
        }
    }

    /// The lower line: the operand being typed (or the last result).
    pub fn current_line(&self) -> &str {
        self.current.as_deref().unwrap_or("")
    }
}
