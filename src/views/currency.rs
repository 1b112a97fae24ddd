//! Brazilian real display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol, followed by a non-breaking space in formatted output.
pub const CURRENCY_SYMBOL: &str = "R$";

/// Formats `value` as `R$ 1.234,56`.
///
/// Rounds half away from zero to two places, so totals render the same way the
/// amounts on an invoice do.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    format!(
        "{}{}\u{a0}{},{}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(int_part),
        cents
    )
}

/// Inserts `.` between groups of three digits, counting from the right.
pub(crate) fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
