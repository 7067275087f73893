//! Rupee and percentage formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::round_rupee;

/// The rupee sign.
pub const RUPEE_SIGN: char = '₹';

/// Formats an amount as whole rupees with Indian digit grouping.
///
/// The last three digits form one group and the rest are grouped in pairs.
/// Fractions are rounded to the nearest rupee. A negative amount keeps its
/// sign after the rupee sign.
///
/// # Examples
///
/// ```
/// use ctc_engine::presentation::format_inr;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_inr(Decimal::from(1_150_000)), "₹11,50,000");
/// assert_eq!(format_inr(Decimal::from(95_833)), "₹95,833");
/// assert_eq!(format_inr(Decimal::from(-1_500)), "₹-1,500");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_rupee(amount);
    if rounded.is_zero() {
        return format!("{}0", RUPEE_SIGN);
    }

    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("{}{}{}", RUPEE_SIGN, sign, group_indian(&digits))
}

/// Inserts Indian-style separators into a string of ASCII digits.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Formats a percentage to one decimal place, e.g. `95.9%`.
pub fn format_percent(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    format!("{}%", rounded)
}
