//! Employee deductions and net salary.

use rust_decimal::Decimal;

use super::employer_pf::PF_CONTRIBUTION_RATE;
use super::rounding::rupee_share;
use crate::models::AuditStep;

/// Gross salary above which professional tax is charged.
pub const PT_GROSS_THRESHOLD: Decimal = Decimal::from_parts(15000, 0, 0, false, 0);

/// Flat monthly professional tax.
pub const PT_MONTHLY_AMOUNT: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// The employee PF deduction.
#[derive(Debug, Clone)]
pub struct EmployeePfResult {
    /// Employee PF deduction.
    pub employee_pf: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the employee PF deduction: 12% of the PF wage base.
///
/// This is computed on its own and is not derived from the employer EPF and
/// EPS shares.
pub fn calculate_employee_pf(
    pf_base_cap: Decimal,
    pf_enabled: bool,
    step_number: u32,
) -> EmployeePfResult {
    let employee_pf = if pf_enabled {
        rupee_share(pf_base_cap, PF_CONTRIBUTION_RATE)
    } else {
        Decimal::ZERO
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "employee_pf".to_string(),
        rule_name: "Employee PF".to_string(),
        input: serde_json::json!({
            "pf_base_cap": pf_base_cap.to_string(),
            "pf_enabled": pf_enabled
        }),
        output: serde_json::json!({
            "employee_pf": employee_pf.to_string()
        }),
        reasoning: if pf_enabled {
            format!("{} x 12% = {}", pf_base_cap, employee_pf)
        } else {
            "PF disabled; no employee PF".to_string()
        },
    };

    EmployeePfResult {
        employee_pf,
        audit_step,
    }
}

/// The professional tax deduction.
#[derive(Debug, Clone)]
pub struct ProfessionalTaxResult {
    /// Professional tax deduction.
    pub professional_tax: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes professional tax: a flat amount once gross exceeds the threshold.
///
/// # Examples
///
/// ```
/// use ctc_engine::calculation::calculate_professional_tax;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     calculate_professional_tax(Decimal::from(15_000), true, 1).professional_tax,
///     Decimal::ZERO
/// );
/// assert_eq!(
///     calculate_professional_tax(Decimal::from(15_001), true, 1).professional_tax,
///     Decimal::from(200)
/// );
/// ```
pub fn calculate_professional_tax(
    gross_salary: Decimal,
    pt_enabled: bool,
    step_number: u32,
) -> ProfessionalTaxResult {
    let professional_tax = if pt_enabled && gross_salary > PT_GROSS_THRESHOLD {
        PT_MONTHLY_AMOUNT
    } else {
        Decimal::ZERO
    };

    let reasoning = if !pt_enabled {
        "PT disabled".to_string()
    } else if gross_salary > PT_GROSS_THRESHOLD {
        format!(
            "Gross {} > {}; flat professional tax {}",
            gross_salary, PT_GROSS_THRESHOLD, PT_MONTHLY_AMOUNT
        )
    } else {
        format!(
            "Gross {} <= {}; no professional tax",
            gross_salary, PT_GROSS_THRESHOLD
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "professional_tax".to_string(),
        rule_name: "Professional Tax".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "pt_enabled": pt_enabled
        }),
        output: serde_json::json!({
            "professional_tax": professional_tax.to_string()
        }),
        reasoning,
    };

    ProfessionalTaxResult {
        professional_tax,
        audit_step,
    }
}

/// Total deductions and the take-home pay they leave.
#[derive(Debug, Clone)]
pub struct NetSalaryResult {
    /// Sum of all employee deductions.
    pub total_deductions: Decimal,
    /// Gross less deductions.
    pub net_salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sums the employee deductions and subtracts them from gross.
pub fn calculate_net_salary(
    gross_salary: Decimal,
    employee_pf: Decimal,
    employee_esi: Decimal,
    professional_tax: Decimal,
    step_number: u32,
) -> NetSalaryResult {
    let total_deductions = employee_pf + employee_esi + professional_tax;
    let net_salary = gross_salary - total_deductions;

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "employee_pf": employee_pf.to_string(),
            "employee_esi": employee_esi.to_string(),
            "professional_tax": professional_tax.to_string()
        }),
        output: serde_json::json!({
            "total_deductions": total_deductions.to_string(),
            "net_salary": net_salary.to_string()
        }),
        reasoning: format!(
            "{} - deductions {} = {}",
            gross_salary, total_deductions, net_salary
        ),
    };

    NetSalaryResult {
        total_deductions,
        net_salary,
        audit_step,
    }
}
