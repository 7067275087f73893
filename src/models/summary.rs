//! Annual figures and headline ratios.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{Breakdown, SalaryInput};

/// Annualised totals and percentages for a breakdown.
///
/// Ratios are rounded to one decimal place. A figure is `None` when its
/// denominator is zero or when it falls outside the decimal range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySummary {
    /// The annual CTC as entered.
    pub annual_ctc: Decimal,
    /// Gross salary over twelve months.
    pub annual_gross: Option<Decimal>,
    /// Employee deductions over twelve months.
    pub annual_deductions: Option<Decimal>,
    /// Net salary over twelve months.
    pub annual_net: Option<Decimal>,
    /// Employer statutory charges over twelve months.
    pub annual_employer_charges: Option<Decimal>,
    /// Annual net as a percentage of annual CTC.
    pub take_home_percent: Option<Decimal>,
    /// Employer charges as a percentage of gross.
    pub employer_cost_percent: Option<Decimal>,
    /// Deductions as a percentage of gross.
    pub deductions_percent: Option<Decimal>,
}

impl SalarySummary {
    /// Derives the summary for a breakdown and the input it came from.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctc_engine::calculation::compute_breakdown;
    /// use ctc_engine::config::SalaryScheme;
    /// use ctc_engine::models::{SalaryInput, SalarySummary};
    /// use rust_decimal::Decimal;
    ///
    /// let input = SalaryInput::new(Decimal::from(1_150_000), Decimal::from(15_000));
    /// let breakdown = compute_breakdown(&input, &SalaryScheme::basic_50());
    /// let summary = SalarySummary::new(&input, &breakdown);
    ///
    /// assert_eq!(summary.annual_net, Some(Decimal::from(1_102_596)));
    /// assert_eq!(summary.take_home_percent, Some(Decimal::new(959, 1)));
    /// ```
    pub fn new(input: &SalaryInput, breakdown: &Breakdown) -> Self {
        let annual_net = breakdown.annual_net();

        Self {
            annual_ctc: input.ctc_annual,
            annual_gross: breakdown.annual_gross(),
            annual_deductions: breakdown.annual_deductions(),
            annual_net,
            annual_employer_charges: breakdown.annual_employer_charges(),
            take_home_percent: annual_net.and_then(|net| percentage(net, input.ctc_annual)),
            employer_cost_percent: percentage(
                breakdown.total_employer_charges,
                breakdown.gross_salary,
            ),
            deductions_percent: percentage(breakdown.total_deductions, breakdown.gross_salary),
        }
    }
}

/// `part / whole * 100` to one decimal place.
///
/// `None` for a zero whole or when `part * 100` overflows.
fn percentage(part: Decimal, whole: Decimal) -> Option<Decimal> {
    let ratio = part.checked_mul(Decimal::ONE_HUNDRED)?.checked_div(whole)?;
    let mut rounded = ratio.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    Some(rounded)
}
