//! # Evaluator
//!
//! Computes the pending operation over the two operand strings and renders
//! the result back to a string the reducer can store as an operand.
//!
//! Failures are silent: an operand that does not parse (or parses to NaN)
//! yields an empty string rather than an error.

use crate::core::operation::Operation;

/// Evaluates `previous <op> current`.
///
/// Returns `""` if either operand is not a number.
pub fn evaluate(previous: &str, current: &str, operation: Operation) -> String {
    let (Some(lhs), Some(rhs)) = (parse_operand(previous), parse_operand(current)) else {
        log::trace!("Unparseable operands {:?} {} {:?}", previous, operation, current);
        return String::new();
    };
    canonical(operation.apply(lhs, rhs))
}

/// Parses an operand string. NaN counts as a parse failure.
pub fn parse_operand(operand: &str) -> Option<f64> {
    operand.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Below this magnitude results switch to exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;
/// At or above this magnitude results switch to exponent notation.
const EXPONENT_FROM: f64 = 1e21;

/// Canonical decimal rendering of a result.
///
/// Finite values use the shortest round-trip digits. Plain decimal is used
/// for magnitudes in `[1e-6, 1e21)`, exponent notation with an explicit sign
/// (`1e+21`, `1.5e-7`) outside it. Negative zero renders as `0`.
pub fn canonical(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else if (EXPONENT_BELOW..EXPONENT_FROM).contains(&value.abs()) {
        value.to_string()
    } else {
        exponential(value)
    }
}

fn exponential(value: f64) -> String {
    // `{:e}` already gives the shortest mantissa, but writes `1e21` for `1e+21`
    let rendered = format!("{value:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}
