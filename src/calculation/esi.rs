//! Employee State Insurance.
//!
//! ESI eligibility has to be known before the employer ESI share, and the
//! employer share is part of the charges that define gross. So eligibility
//! and the employer share are taken from a provisional gross (monthly CTC
//! less PF charges only), while the employee share is taken from the final
//! gross once it is known.

use rust_decimal::Decimal;

use super::rounding::rupee_share;
use crate::models::AuditStep;

/// Highest provisional gross at which ESI still applies.
pub const ESI_WAGE_CEILING: Decimal = Decimal::from_parts(21000, 0, 0, false, 0);

/// Employer ESI rate (3.25%), applied to the provisional gross.
pub const ESI_EMPLOYER_RATE: Decimal = Decimal::from_parts(325, 0, 0, false, 4);

/// Employee ESI rate (0.75%), applied to the final gross.
pub const ESI_EMPLOYEE_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 4);

/// The outcome of the ESI eligibility test.
#[derive(Debug, Clone)]
pub struct EsiDetermination {
    /// Monthly CTC less PF charges; used only for the eligibility test and
    /// the employer share.
    pub provisional_gross: Decimal,
    /// Whether ESI applies to this employee.
    pub esi_applicable: bool,
    /// Employer ESI share.
    pub employer_esi: Decimal,
    /// The audit step recording this determination.
    pub audit_step: AuditStep,
}

/// Tests ESI eligibility and computes the employer ESI share.
///
/// ESI applies when it is enabled and the provisional gross is at or below
/// [`ESI_WAGE_CEILING`].
///
/// # Examples
///
/// ```
/// use ctc_engine::calculation::determine_esi;
/// use rust_decimal::Decimal;
///
/// let result = determine_esi(Decimal::from(20_999), Decimal::ZERO, true, 3);
/// assert!(result.esi_applicable);
/// assert_eq!(result.employer_esi, Decimal::from(682));
/// ```
pub fn determine_esi(
    monthly_ctc: Decimal,
    pf_charges: Decimal,
    esi_enabled: bool,
    step_number: u32,
) -> EsiDetermination {
    let provisional_gross = monthly_ctc - pf_charges;
    let esi_applicable = esi_enabled && provisional_gross <= ESI_WAGE_CEILING;
    let employer_esi = if esi_applicable {
        rupee_share(provisional_gross, ESI_EMPLOYER_RATE)
    } else {
        Decimal::ZERO
    };

    let reasoning = if !esi_enabled {
        "ESI disabled".to_string()
    } else if esi_applicable {
        format!(
            "Provisional gross {} <= {}; employer ESI {} x 3.25% = {}",
            provisional_gross, ESI_WAGE_CEILING, provisional_gross, employer_esi
        )
    } else {
        format!(
            "Provisional gross {} > {}; ESI not applicable",
            provisional_gross, ESI_WAGE_CEILING
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "esi_eligibility".to_string(),
        rule_name: "ESI Eligibility".to_string(),
        input: serde_json::json!({
            "monthly_ctc": monthly_ctc.to_string(),
            "pf_charges": pf_charges.to_string(),
            "esi_enabled": esi_enabled
        }),
        output: serde_json::json!({
            "provisional_gross": provisional_gross.to_string(),
            "esi_applicable": esi_applicable,
            "employer_esi": employer_esi.to_string()
        }),
        reasoning,
    };

    EsiDetermination {
        provisional_gross,
        esi_applicable,
        employer_esi,
        audit_step,
    }
}

/// The employee ESI deduction.
#[derive(Debug, Clone)]
pub struct EmployeeEsiResult {
    /// Employee ESI deduction.
    pub employee_esi: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the employee ESI deduction from the final gross salary.
pub fn calculate_employee_esi(
    gross_salary: Decimal,
    esi_applicable: bool,
    step_number: u32,
) -> EmployeeEsiResult {
    let employee_esi = if esi_applicable {
        rupee_share(gross_salary, ESI_EMPLOYEE_RATE)
    } else {
        Decimal::ZERO
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "employee_esi".to_string(),
        rule_name: "Employee ESI".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "esi_applicable": esi_applicable
        }),
        output: serde_json::json!({
            "employee_esi": employee_esi.to_string()
        }),
        reasoning: if esi_applicable {
            format!("{} x 0.75% = {}", gross_salary, employee_esi)
        } else {
            "ESI not applicable; no employee ESI".to_string()
        },
    };

    EmployeeEsiResult {
        employee_esi,
        audit_step,
    }
}
