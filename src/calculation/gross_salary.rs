//! Gross salary calculation.

use rust_decimal::Decimal;

use super::employer_pf::EmployerPfResult;
use crate::models::AuditStep;

/// The final employer charges and the gross salary they leave.
#[derive(Debug, Clone)]
pub struct GrossSalaryResult {
    /// All employer statutory charges, PF and ESI together.
    pub total_employer_charges: Decimal,
    /// Monthly CTC less all employer charges.
    pub gross_salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes gross salary from monthly CTC and the complete employer charges.
///
/// Gross is recomputed from monthly CTC rather than adjusted from the
/// provisional gross used for the ESI test.
pub fn calculate_gross_salary(
    monthly_ctc: Decimal,
    employer_pf: &EmployerPfResult,
    employer_esi: Decimal,
    step_number: u32,
) -> GrossSalaryResult {
    let total_employer_charges = employer_pf.employer_epf
        + employer_pf.employer_eps
        + employer_pf.edli
        + employer_pf.epf_admin
        + employer_pf.edli_admin
        + employer_esi;
    let gross_salary = monthly_ctc - total_employer_charges;

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_salary".to_string(),
        rule_name: "Gross Salary".to_string(),
        input: serde_json::json!({
            "monthly_ctc": monthly_ctc.to_string(),
            "pf_charges": employer_pf.total().to_string(),
            "employer_esi": employer_esi.to_string()
        }),
        output: serde_json::json!({
            "total_employer_charges": total_employer_charges.to_string(),
            "gross_salary": gross_salary.to_string()
        }),
        reasoning: format!(
            "{} - employer charges {} = {}",
            monthly_ctc, total_employer_charges, gross_salary
        ),
    };

    GrossSalaryResult {
        total_employer_charges,
        gross_salary,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_employer_pf;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_gross_without_esi() {
        let pf = calculate_employer_pf(dec("15000"), true, false, 2);
        let result = calculate_gross_salary(dec("95833"), &pf, Decimal::ZERO, 4);

        assert_eq!(result.total_employer_charges, dec("1950"));
        assert_eq!(result.gross_salary, dec("93883"));
    }

    #[test]
    fn test_employer_esi_is_included() {
        let pf = calculate_employer_pf(dec("15000"), false, false, 2);
        let result = calculate_gross_salary(dec("20999"), &pf, dec("682"), 4);

        assert_eq!(result.total_employer_charges, dec("682"));
        assert_eq!(result.gross_salary, dec("20317"));
    }

    #[test]
    fn test_audit_step() {
        let pf = calculate_employer_pf(dec("15000"), true, true, 2);
        let result = calculate_gross_salary(dec("95833"), &pf, Decimal::ZERO, 4);

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.input["pf_charges"], "1952");
        assert_eq!(result.audit_step.output["gross_salary"], "93881");
    }
}
