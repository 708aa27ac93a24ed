//! Common utility functions for price calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to a whole currency amount using half-up rounding.
///
/// Values at exactly .5 round away from zero, the convention quoted prices
/// have always followed here.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wrap_core::calculations::common::round_to_whole;
///
/// assert_eq!(round_to_whole(dec!(492.8)), dec!(493));
/// assert_eq!(round_to_whole(dec!(492.5)), dec!(493));
/// assert_eq!(round_to_whole(dec!(492.4)), dec!(492));
/// ```
pub fn round_to_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
