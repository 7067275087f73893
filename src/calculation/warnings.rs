//! Warnings for results that are valid arithmetic but unusual.
//!
//! Negative and zero inputs are not rejected; they flow through the
//! calculation. These warnings let a caller notice when that happened.

use rust_decimal::Decimal;

use crate::models::{AuditWarning, Breakdown};

/// Inspects a finished breakdown and lists anything a reviewer should notice.
pub fn collect_warnings(breakdown: &Breakdown) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if breakdown.gross_salary < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NEGATIVE_GROSS".to_string(),
            message: format!(
                "Gross salary {} is negative: employer charges {} exceed monthly CTC {}",
                breakdown.gross_salary, breakdown.total_employer_charges, breakdown.monthly_ctc
            ),
            severity: "high".to_string(),
        });
    }

    if breakdown.net_salary < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NEGATIVE_NET".to_string(),
            message: format!(
                "Net salary {} is negative after deductions of {}",
                breakdown.net_salary, breakdown.total_deductions
            ),
            severity: "high".to_string(),
        });
    }

    if breakdown.pf_enabled && breakdown.employer_epf < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NEGATIVE_EMPLOYER_EPF".to_string(),
            message: format!(
                "Employer EPF {} is negative: 12% of the PF wage base is below the EPS share {}",
                breakdown.employer_epf, breakdown.employer_eps
            ),
            severity: "medium".to_string(),
        });
    }

    if breakdown.esi_enabled && !breakdown.esi_applicable {
        warnings.push(AuditWarning {
            code: "ESI_NOT_APPLICABLE".to_string(),
            message: "ESI is enabled but gross is above the ESI wage ceiling".to_string(),
            severity: "low".to_string(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_breakdown;
    use crate::config::SalaryScheme;
    use crate::models::SalaryInput;

    fn codes(warnings: &[AuditWarning]) -> Vec<&str> {
        warnings.iter().map(|w| w.code.as_str()).collect()
    }

    #[test]
    fn test_ordinary_salary_above_ceiling_only_notes_esi() {
        let input = SalaryInput::new(Decimal::from(1_150_000), Decimal::from(15_000));
        let breakdown = compute_breakdown(&input, &SalaryScheme::basic_40());

        assert_eq!(codes(&collect_warnings(&breakdown)), vec!["ESI_NOT_APPLICABLE"]);
    }

    #[test]
    fn test_ordinary_salary_with_esi_disabled_has_no_warnings() {
        let input = SalaryInput::new(Decimal::from(1_150_000), Decimal::from(15_000))
            .with_esi(false);
        let breakdown = compute_breakdown(&input, &SalaryScheme::basic_40());

        assert!(collect_warnings(&breakdown).is_empty());
    }

    #[test]
    fn test_negative_ctc_warns_about_gross_and_net() {
        let input = SalaryInput::new(Decimal::from(-120_000), Decimal::from(15_000));
        let breakdown = compute_breakdown(&input, &SalaryScheme::basic_40());
        let warnings = collect_warnings(&breakdown);

        let codes = codes(&warnings);
        assert!(codes.contains(&"NEGATIVE_GROSS"));
        assert!(codes.contains(&"NEGATIVE_NET"));
        assert!(warnings.iter().all(|w| !w.message.is_empty()));
    }

    #[test]
    fn test_small_wage_base_warns_about_employer_epf() {
        let input = SalaryInput::new(Decimal::from(600_000), Decimal::from(10_000))
            .with_esi(false);
        let breakdown = compute_breakdown(&input, &SalaryScheme::basic_40());

        assert_eq!(codes(&collect_warnings(&breakdown)), vec!["NEGATIVE_EMPLOYER_EPF"]);
    }
}
