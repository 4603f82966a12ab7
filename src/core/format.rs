//! # Operand Formatter
//!
//! Presentation helper: groups the integer part of an operand with a
//! thousands separator and leaves the fractional part untouched, so a
//! half-typed `"1234."` shows as `"1,234."` while the user is still typing.
//!
//! An integer part in exponent notation (`"1e+21"`, `"1e-7"`) is expanded
//! and rounded to a whole number before grouping.

pub const DEFAULT_THOUSANDS_SEPARATOR: char = ',';

/// Formats an operand with the default `,` separator.
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    format_operand_with(operand, DEFAULT_THOUSANDS_SEPARATOR)
}

/// Formats an operand with an explicit thousands separator.
///
/// Returns `None` for an unset operand.
pub fn format_operand_with(operand: Option<&str>, separator: char) -> Option<String> {
    let operand = operand?;
    let (integer, decimal) = match operand.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (operand, None),
    };

    let integer = format_integer(integer, separator);
    Some(match decimal {
        Some(decimal) => format!("{integer}.{decimal}"),
        None => integer,
    })
}

fn format_integer(integer: &str, separator: char) -> String {
    let (sign, magnitude) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    match magnitude {
        "Infinity" => return format!("{sign}∞"),
        "NaN" => return "NaN".to_string(),
        _ => {}
    }

    let expanded;
    let magnitude = if magnitude.contains(['e', 'E']) {
        let Ok(value) = magnitude.parse::<f64>() else {
            return "NaN".to_string();
        };
        expanded = format!("{value:.0}");
        expanded.as_str()
    } else {
        magnitude
    };

    let digits = magnitude.trim_start_matches('0');
    if digits.is_empty() {
        return format!("{sign}0");
    }

    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + len / 3 + 1);
    grouped.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}
