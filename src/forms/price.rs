//! Price field helpers. The user types digits only and they fill the field from
//! the right, cents first: typing `1`, `2`, `3` shows `0,01`, `0,12`, `1,23`.

use crate::views::currency::group_thousands;
use rust_decimal::Decimal;

fn digits_of(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    digits.trim_start_matches('0').to_string()
}

/// Renders whatever was typed as a `1.234,56` price, ignoring non-digits.
pub fn format_price_input(raw: &str) -> String {
    let digits = format!("{:0>3}", digits_of(raw));
    let (int_part, cents) = digits.split_at(digits.len() - 2);
    format!("{},{}", group_thousands(int_part), cents)
}

/// Reads a price typed through [`format_price_input`].
///
/// Returns `None` when the digits do not fit in a [`Decimal`].
pub fn parse_price_input(formatted: &str) -> Option<Decimal> {
    let digits = digits_of(formatted);
    if digits.is_empty() {
        return Some(Decimal::ZERO);
    }
    let cents: i128 = digits.parse().ok()?;
    Decimal::try_from_i128_with_scale(cents, 2).ok()
}
