//! Statement rendering.
//!
//! A statement is a header line followed by one line per transaction, joined
//! with `\n` and without a trailing newline. Entries are listed by date, most
//! recent first; entries sharing a date are listed latest-recorded first.

use chrono::NaiveDate;

use crate::ledger::Transaction;

pub const HEADER: &str = "Date || Amount || Balance";
pub const COLUMN_SEPARATOR: &str = " || ";
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Formats a date as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Magnitudes at or above this switch to exponent notation.
const EXPONENT_UPPER: f64 = 1e21;
/// Non-zero magnitudes below this switch to exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Formats an amount with its plain shortest representation (`1000`, `-100`, `12.5`).
///
/// Extreme magnitudes use exponent notation with an explicit sign (`1e+21`,
/// `1.5e-7`); non-finite values read `Infinity`, `-Infinity` and `NaN`.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0.0 prints as "-0"; a zero withdrawal should read "0".
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }
    value.to_string()
}

pub fn format_line(transaction: &Transaction) -> String {
    [
        format_date(transaction.date),
        format_amount(transaction.amount),
        format_amount(transaction.balance),
    ]
    .join(COLUMN_SEPARATOR)
}

/// Renders `history` (given in call order) into statement text.
pub fn render(history: &[Transaction]) -> String {
    let mut ordered: Vec<&Transaction> = history.iter().rev().collect();
    // `sort_by` is stable, so same-date entries stay latest-recorded first.
    ordered.sort_by(|a, b| b.date.cmp(&a.date));

    let mut lines = Vec::with_capacity(ordered.len() + 1);
    lines.push(HEADER.to_string());
    lines.extend(ordered.into_iter().map(format_line));
    lines.join("\n")
}
