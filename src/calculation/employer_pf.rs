//! Employer provident fund charges.
//!
//! When PF is enabled the employer side of the CTC carries five charges,
//! all derived from the PF wage base rather than the actual basic salary:
//! the EPF share, the flat EPS share, the flat EDLI premium, the EPF admin
//! charge and (depending on the scheme) the EDLI admin charge.

use rust_decimal::Decimal;

use super::rounding::rupee_share;
use crate::models::AuditStep;

/// Combined employer PF contribution rate (12% of the PF wage base).
pub const PF_CONTRIBUTION_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Flat monthly employer pension scheme share.
pub const EMPLOYER_EPS_FLAT: Decimal = Decimal::from_parts(1250, 0, 0, false, 0);

/// Flat monthly EDLI insurance premium.
pub const EDLI_FLAT: Decimal = Decimal::from_parts(75, 0, 0, false, 0);

/// EPF administration charge rate (0.5%).
pub const EPF_ADMIN_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 3);

/// EDLI administration charge rate (0.01%).
pub const EDLI_ADMIN_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

/// The employer PF charges for one month.
#[derive(Debug, Clone)]
pub struct EmployerPfResult {
    /// Employer EPF share: 12% of the wage base less the EPS share.
    pub employer_epf: Decimal,
    /// Employer pension scheme share.
    pub employer_eps: Decimal,
    /// EDLI insurance premium.
    pub edli: Decimal,
    /// EPF administration charge.
    pub epf_admin: Decimal,
    /// EDLI administration charge.
    pub edli_admin: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

impl EmployerPfResult {
    /// Sum of the five PF charges.
    pub fn total(&self) -> Decimal {
        self.employer_epf + self.employer_eps + self.edli + self.epf_admin + self.edli_admin
    }
}

/// Calculates the employer PF charges.
///
/// With PF disabled every charge is zero. The EDLI admin charge is levied only
/// when `include_edli_admin` is set by the scheme.
///
/// # Examples
///
/// ```
/// use ctc_engine::calculation::calculate_employer_pf;
/// use rust_decimal::Decimal;
///
/// let result = calculate_employer_pf(Decimal::from(15_000), true, false, 2);
/// assert_eq!(result.employer_epf, Decimal::from(550));
/// assert_eq!(result.total(), Decimal::from(1_950));
/// ```
pub fn calculate_employer_pf(
    pf_base_cap: Decimal,
    pf_enabled: bool,
    include_edli_admin: bool,
    step_number: u32,
) -> EmployerPfResult {
    if !pf_enabled {
        return EmployerPfResult {
            employer_epf: Decimal::ZERO,
            employer_eps: Decimal::ZERO,
            edli: Decimal::ZERO,
            epf_admin: Decimal::ZERO,
            edli_admin: Decimal::ZERO,
            audit_step: AuditStep {
                step_number,
                rule_id: "employer_pf".to_string(),
                rule_name: "Employer PF Charges".to_string(),
                input: serde_json::json!({
                    "pf_base_cap": pf_base_cap.to_string(),
                    "pf_enabled": false
                }),
                output: serde_json::json!({
                    "total": "0"
                }),
                reasoning: "PF disabled; no employer PF charges".to_string(),
            },
        };
    }

    let employer_eps = EMPLOYER_EPS_FLAT;
    let employer_epf = rupee_share(pf_base_cap, PF_CONTRIBUTION_RATE) - employer_eps;
    let edli = EDLI_FLAT;
    let epf_admin = rupee_share(pf_base_cap, EPF_ADMIN_RATE);
    let edli_admin = if include_edli_admin {
        rupee_share(pf_base_cap, EDLI_ADMIN_RATE)
    } else {
        Decimal::ZERO
    };

    let total = employer_epf + employer_eps + edli + epf_admin + edli_admin;

    let audit_step = AuditStep {
        step_number,
        rule_id: "employer_pf".to_string(),
        rule_name: "Employer PF Charges".to_string(),
        input: serde_json::json!({
            "pf_base_cap": pf_base_cap.to_string(),
            "pf_enabled": true,
            "include_edli_admin": include_edli_admin
        }),
        output: serde_json::json!({
            "employer_epf": employer_epf.to_string(),
            "employer_eps": employer_eps.to_string(),
            "edli": edli.to_string(),
            "epf_admin": epf_admin.to_string(),
            "edli_admin": edli_admin.to_string(),
            "total": total.to_string()
        }),
        reasoning: format!(
            "EPF {} + EPS {} + EDLI {} + EPF admin {} + EDLI admin {} = {}",
            employer_epf, employer_eps, edli, epf_admin, edli_admin, total
        ),
    };

    EmployerPfResult {
        employer_epf,
        employer_eps,
        edli,
        epf_admin,
        edli_admin,
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
    fn test_constants() {
        assert_eq!(PF_CONTRIBUTION_RATE, dec("0.12"));
        assert_eq!(EMPLOYER_EPS_FLAT, dec("1250"));
        assert_eq!(EDLI_FLAT, dec("75"));
        assert_eq!(EPF_ADMIN_RATE, dec("0.005"));
        assert_eq!(EDLI_ADMIN_RATE, dec("0.0001"));
    }

    #[test]
    fn test_standard_wage_base_without_edli_admin() {
        let result = calculate_employer_pf(dec("15000"), true, false, 2);

        assert_eq!(result.employer_eps, dec("1250"));
        assert_eq!(result.employer_epf, dec("550"));
        assert_eq!(result.edli, dec("75"));
        assert_eq!(result.epf_admin, dec("75"));
        assert_eq!(result.edli_admin, Decimal::ZERO);
        assert_eq!(result.total(), dec("1950"));
    }

    #[test]
    fn test_edli_admin_rounds_half_up() {
        // 15000 * 0.0001 = 1.5
        let result = calculate_employer_pf(dec("15000"), true, true, 2);
        assert_eq!(result.edli_admin, dec("2"));
        assert_eq!(result.total(), dec("1952"));
    }

    #[test]
    fn test_disabled_zeroes_every_charge() {
        let result = calculate_employer_pf(dec("15000"), false, true, 2);

        assert_eq!(result.employer_epf, Decimal::ZERO);
        assert_eq!(result.employer_eps, Decimal::ZERO);
        assert_eq!(result.edli, Decimal::ZERO);
        assert_eq!(result.epf_admin, Decimal::ZERO);
        assert_eq!(result.edli_admin, Decimal::ZERO);
        assert_eq!(result.total(), Decimal::ZERO);
        assert_eq!(result.audit_step.input["pf_enabled"], false);
    }

    #[test]
    fn test_small_wage_base_gives_negative_epf() {
        // 12% of 10000 = 1200, less the flat 1250 EPS share
        let result = calculate_employer_pf(dec("10000"), true, false, 2);
        assert_eq!(result.employer_epf, dec("-50"));
        assert_eq!(result.epf_admin, dec("50"));
    }

    #[test]
    fn test_higher_wage_base() {
        let result = calculate_employer_pf(dec("25000"), true, true, 2);
        assert_eq!(result.employer_epf, dec("1750"));
        assert_eq!(result.epf_admin, dec("125"));
        assert_eq!(result.edli_admin, dec("3"));
        assert_eq!(result.total(), dec("3203"));
    }

    #[test]
    fn test_audit_step_lists_each_charge() {
        let result = calculate_employer_pf(dec("15000"), true, true, 2);
        assert_eq!(result.audit_step.rule_id, "employer_pf");
        assert_eq!(result.audit_step.output["employer_epf"], "550");
        assert_eq!(result.audit_step.output["edli_admin"], "2");
        assert_eq!(result.audit_step.output["total"], "1952");
    }
}
