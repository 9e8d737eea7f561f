//! Display projection: formatting operands for the two-line display.
//!
//! Formatting is presentation only. The accumulator's operands stay
//! unformatted text; these functions are pure and never mutate state.

use crate::engine::Accumulator;

/// The two lines of the calculator display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayLines {
    /// Pending operand and operator symbol; empty when nothing is pending.
    pub upper: String,
    /// The operand being entered, or the last result.
    pub lower: String,
}

/// Projects accumulator state into the two display lines.
pub fn display_lines(accumulator: &Accumulator, separator: Option<char>) -> DisplayLines {
    let upper = match accumulator.operation() {
        Some(operation) => format!(
            "{} {}",
            format_operand(accumulator.previous_operand(), separator),
            operation.symbol()
        ),
        None => String::new(),
    };
    DisplayLines {
        upper,
        lower: format_operand(accumulator.current_operand(), separator),
    }
}

/// Formats an operand for display.
///
/// The text before the decimal point is parsed as a number and rendered
/// with `separator` between thousands groups; the fractional part is
/// reattached verbatim. Text that does not parse (an empty operand, a bare
/// `.`) degrades to partial or empty output, never an error. Non-finite
/// operand text (`inf`, `NaN` after a division by zero) passes through
/// ungrouped.
pub fn format_operand(operand: &str, separator: Option<char>) -> String {
    let (integer, fraction) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };

    let integer_display = match integer.parse::<f64>() {
        Ok(value) if value.is_finite() => group_digits(&format!("{value:.0}"), separator),
        Ok(value) => value.to_string(),
        Err(_) => String::new(),
    };

    match fraction {
        Some(fraction) => format!("{integer_display}.{fraction}"),
        None => integer_display,
    }
}

/// Inserts `separator` between three-digit groups, counting from the right.
///
/// `integer` is an optional sign followed by ASCII digits (the output of
/// formatting a finite float with no fraction).
fn group_digits(integer: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return integer.to_string();
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(integer.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
