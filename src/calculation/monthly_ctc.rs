//! Monthly CTC calculation.

use rust_decimal::Decimal;

use super::rounding::round_rupee;
use crate::models::{AuditStep, MONTHS_PER_YEAR};

/// The result of converting annual CTC to a monthly figure.
#[derive(Debug, Clone)]
pub struct MonthlyCtcResult {
    /// Annual CTC divided by twelve, rounded to a whole rupee.
    pub monthly_ctc: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Converts an annual CTC to a monthly CTC.
///
/// # Examples
///
/// ```
/// use ctc_engine::calculation::calculate_monthly_ctc;
/// use rust_decimal::Decimal;
///
/// let result = calculate_monthly_ctc(Decimal::from(1_150_000), 1);
/// assert_eq!(result.monthly_ctc, Decimal::from(95_833));
/// ```
pub fn calculate_monthly_ctc(ctc_annual: Decimal, step_number: u32) -> MonthlyCtcResult {
    let monthly_ctc = round_rupee(ctc_annual / MONTHS_PER_YEAR);

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_ctc".to_string(),
        rule_name: "Monthly CTC".to_string(),
        input: serde_json::json!({
            "ctc_annual": ctc_annual.to_string()
        }),
        output: serde_json::json!({
            "monthly_ctc": monthly_ctc.to_string()
        }),
        reasoning: format!("{} / 12 = {} (rounded)", ctc_annual, monthly_ctc),
    };

    MonthlyCtcResult {
        monthly_ctc,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_ctc_rounds_down() {
        let result = calculate_monthly_ctc(dec("1150000"), 1);
        assert_eq!(result.monthly_ctc, dec("95833"));
    }

    #[test]
    fn test_remainder_above_half_rounds_up() {
        // 1000010 / 12 = 83334.1666..., 1000016 / 12 = 83334.666...
        assert_eq!(calculate_monthly_ctc(dec("1000010"), 1).monthly_ctc, dec("83334"));
        assert_eq!(calculate_monthly_ctc(dec("1000016"), 1).monthly_ctc, dec("83335"));
    }

    #[test]
    fn test_exact_half_rounds_up() {
        // 18 / 12 = 1.5
        assert_eq!(calculate_monthly_ctc(dec("18"), 1).monthly_ctc, dec("2"));
    }

    #[test]
    fn test_zero_and_negative_pass_through() {
        assert_eq!(calculate_monthly_ctc(Decimal::ZERO, 1).monthly_ctc, Decimal::ZERO);
        assert_eq!(calculate_monthly_ctc(dec("-120000"), 1).monthly_ctc, dec("-10000"));
    }

    #[test]
    fn test_fractional_ctc() {
        assert_eq!(calculate_monthly_ctc(dec("600000.60"), 1).monthly_ctc, dec("50000"));
    }

    #[test]
    fn test_audit_step() {
        let result = calculate_monthly_ctc(dec("1150000"), 3);
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "monthly_ctc");
        assert_eq!(result.audit_step.output["monthly_ctc"], "95833");
        assert!(result.audit_step.reasoning.contains("95833"));
    }
}
