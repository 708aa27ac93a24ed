//! Whole-dollar currency formatting for quote output.

use rust_decimal::Decimal;
use wrap_core::calculations::common::round_to_whole;

/// Formats a whole-dollar amount with thousands separators, e.g. `$1,050`.
///
/// Estimate prices are already whole amounts; anything fractional is rounded
/// to the nearest dollar first, half-up like the estimator itself.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = round_to_whole(amount);
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(format_usd(dec!(0)), "$0");
    }

    #[test]
    fn formats_amounts_under_a_thousand() {
        assert_eq!(format_usd(dec!(500)), "$500");
        assert_eq!(format_usd(dec!(616)), "$616");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_usd(dec!(1050)), "$1,050");
        assert_eq!(format_usd(dec!(1234567)), "$1,234,567");
    }

    #[test]
    fn rounds_fractional_amounts() {
        assert_eq!(format_usd(dec!(492.8)), "$493");
    }
}
