//! The CTC to net salary calculation.
//!
//! [`compute_breakdown`] is a pure function of its arguments: no clock, no
//! I/O, no shared state. It can be called from any number of threads at once.

use serde::{Deserialize, Serialize};

use super::deductions::{calculate_employee_pf, calculate_net_salary, calculate_professional_tax};
use super::employer_pf::calculate_employer_pf;
use super::esi::{calculate_employee_esi, determine_esi};
use super::gross_salary::calculate_gross_salary;
use super::monthly_ctc::calculate_monthly_ctc;
use super::salary_components::split_gross_salary;
use super::warnings::collect_warnings;
use crate::config::SalaryScheme;
use crate::models::{AuditStep, AuditWarning, Breakdown, SalaryInput};

/// A breakdown together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditedBreakdown {
    /// The computed breakdown.
    pub breakdown: Breakdown,
    /// Every calculation stage in order.
    pub steps: Vec<AuditStep>,
    /// Unusual results worth a second look.
    pub warnings: Vec<AuditWarning>,
}

/// Computes the monthly salary breakdown for an annual CTC.
///
/// Stages run in this order, each consuming the rounded results of the ones
/// before it:
///
/// 1. monthly CTC
/// 2. employer PF charges
/// 3. ESI eligibility on the provisional gross, and the employer ESI share
/// 4. total employer charges and the final gross
/// 5. Basic+DA, HRA and special allowance
/// 6. employee PF, employee ESI (on the final gross) and professional tax
/// 7. total deductions and net salary
///
/// Any input is accepted. Zero or negative amounts simply propagate.
///
/// # Examples
///
/// ```
/// use ctc_engine::calculation::compute_breakdown;
/// use ctc_engine::config::SalaryScheme;
/// use ctc_engine::models::SalaryInput;
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput::new(Decimal::from(1_150_000), Decimal::from(15_000));
/// let scheme = SalaryScheme::basic_40().with_edli_admin(false);
///
/// let breakdown = compute_breakdown(&input, &scheme);
/// assert_eq!(breakdown.gross_salary, Decimal::from(93_883));
/// assert_eq!(breakdown.net_salary, Decimal::from(91_883));
/// ```
pub fn compute_breakdown(input: &SalaryInput, scheme: &SalaryScheme) -> Breakdown {
    compute_breakdown_audited(input, scheme).breakdown
}

/// Computes the breakdown and keeps the audit steps and warnings.
pub fn compute_breakdown_audited(input: &SalaryInput, scheme: &SalaryScheme) -> AuditedBreakdown {
    let mut steps: Vec<AuditStep> = Vec::with_capacity(9);
    let mut step_number: u32 = 1;

    let monthly = calculate_monthly_ctc(input.ctc_annual, step_number);
    steps.push(monthly.audit_step);
    step_number += 1;

    let employer_pf = calculate_employer_pf(
        input.pf_base_cap,
        input.pf_enabled,
        scheme.include_edli_admin,
        step_number,
    );
    steps.push(employer_pf.audit_step.clone());
    step_number += 1;

    let esi = determine_esi(
        monthly.monthly_ctc,
        employer_pf.total(),
        input.esi_enabled,
        step_number,
    );
    steps.push(esi.audit_step);
    step_number += 1;

    let gross = calculate_gross_salary(
        monthly.monthly_ctc,
        &employer_pf,
        esi.employer_esi,
        step_number,
    );
    steps.push(gross.audit_step);
    step_number += 1;

    let components = split_gross_salary(gross.gross_salary, scheme.basic_ratio, step_number);
    steps.push(components.audit_step);
    step_number += 1;

    let employee_pf = calculate_employee_pf(input.pf_base_cap, input.pf_enabled, step_number);
    steps.push(employee_pf.audit_step);
    step_number += 1;

    let employee_esi = calculate_employee_esi(gross.gross_salary, esi.esi_applicable, step_number);
    steps.push(employee_esi.audit_step);
    step_number += 1;

    let pt = calculate_professional_tax(gross.gross_salary, input.pt_enabled, step_number);
    steps.push(pt.audit_step);
    step_number += 1;

    let net = calculate_net_salary(
        gross.gross_salary,
        employee_pf.employee_pf,
        employee_esi.employee_esi,
        pt.professional_tax,
        step_number,
    );
    steps.push(net.audit_step);

    let breakdown = Breakdown {
        monthly_ctc: monthly.monthly_ctc,
        gross_salary: gross.gross_salary,
        basic_da: components.basic_da,
        hra: components.hra,
        special_allowance: components.special_allowance,
        employee_pf: employee_pf.employee_pf,
        employee_esi: employee_esi.employee_esi,
        professional_tax: pt.professional_tax,
        total_deductions: net.total_deductions,
        net_salary: net.net_salary,
        employer_epf: employer_pf.employer_epf,
        employer_eps: employer_pf.employer_eps,
        employer_esi: esi.employer_esi,
        edli: employer_pf.edli,
        epf_admin: employer_pf.epf_admin,
        edli_admin: employer_pf.edli_admin,
        total_employer_charges: gross.total_employer_charges,
        esi_applicable: esi.esi_applicable,
        pf_enabled: input.pf_enabled,
        pt_enabled: input.pt_enabled,
        esi_enabled: input.esi_enabled,
    };

    let warnings = collect_warnings(&breakdown);

    AuditedBreakdown {
        breakdown,
        steps,
        warnings,
    }
}
