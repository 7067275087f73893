//! Rupee rounding.
//!
//! Every percentage in the breakdown is rounded to a whole rupee on its own,
//! and the rounded figure is what later stages consume.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the nearest whole rupee, halves away from zero.
///
/// # Examples
///
/// ```
/// use ctc_engine::calculation::round_rupee;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_rupee(Decimal::new(187765, 1)), Decimal::from(18777));
/// assert_eq!(round_rupee(Decimal::new(-23125, 1)), Decimal::from(-2313));
/// ```
pub fn round_rupee(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Applies `rate` to `base` and rounds the result to a whole rupee.
pub fn rupee_share(base: Decimal, rate: Decimal) -> Decimal {
    round_rupee(base * rate)
}
