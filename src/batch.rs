//! # Batch Front End
//!
//! Runs a compact key sequence (`--keys "12+3="`) through the reducer
//! without a terminal UI and reports the final readout.

use serde::Serialize;
use std::fmt;
use std::io::Write;

use crate::core::action::update;
use crate::core::keys::{KeyError, parse_sequence};
use crate::core::state::{CalculatorState, Readout};

#[derive(Debug)]
pub enum BatchError {
    Keys(KeyError),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::Keys(e) => write!(f, "invalid key sequence: {e}"),
            BatchError::Io(e) => write!(f, "output error: {e}"),
            BatchError::Json(e) => write!(f, "JSON encoding error: {e}"),
        }
    }
}

impl std::error::Error for BatchError {}

impl From<KeyError> for BatchError {
    fn from(e: KeyError) -> Self {
        BatchError::Keys(e)
    }
}

impl From<std::io::Error> for BatchError {
    fn from(e: std::io::Error) -> Self {
        BatchError::Io(e)
    }
}

impl From<serde_json::Error> for BatchError {
    fn from(e: serde_json::Error) -> Self {
        BatchError::Json(e)
    }
}

/// Everything `--json` prints: the raw state and its formatted readout.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub state: CalculatorState,
    pub readout: Readout,
}

/// Folds `keys` over the empty state.
pub fn run_keys(keys: &str) -> Result<CalculatorState, KeyError> {
    let actions = parse_sequence(keys)?;
    log::info!("Running {} actions in batch mode", actions.len());
    Ok(actions
        .into_iter()
        .fold(CalculatorState::new(), |state, action| update(&state, action)))
}

/// Runs `keys` and writes the result to `out`.
///
/// Text output is the readout's two lines; the upper line is omitted when
/// empty. JSON output is a `BatchReport`.
pub fn run(keys: &str, separator: char, json: bool, out: &mut impl Write) -> Result<(), BatchError> {
    let state = run_keys(keys)?;
    let readout = state.readout(separator);

    if json {
        let report = BatchReport { state, readout };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        let previous = readout.previous_line();
        if !previous.is_empty() {
            writeln!(out, "{previous}")?;
        }
        writeln!(out, "{}", readout.current_line())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(keys: &str, json: bool) -> Result<String, BatchError> {
        let mut out = Vec::new();
        run(keys, ',', json, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_text_output_result() {
        assert_eq!(run_to_string("1000*1000=", false).unwrap(), "1,000,000\n");
    }

    #[test]
    fn test_text_output_pending() {
        assert_eq!(run_to_string("12+3", false).unwrap(), "12 +\n3\n");
    }

    #[test]
    fn test_json_output() {
        let out = run_to_string("5+3=", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["state"]["current_operand"], "8");
        assert_eq!(value["state"]["overwrite"], true);
        assert!(value["state"]["previous_operand"].is_null());
        assert_eq!(value["readout"]["current"], "8");
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let err = run_to_string("1?2", false).unwrap_err();
        assert!(matches!(err, BatchError::Keys(KeyError::UnknownKey { key: '?', position: 1 })));
    }
}
