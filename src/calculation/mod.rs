//! Calculation logic for the CTC engine.
//!
//! This module contains every stage of the CTC to take-home calculation:
//! monthly CTC, employer PF charges, ESI eligibility, gross salary, the
//! Basic/HRA/special allowance split, employee deductions and net salary.
//! Each stage returns its figures together with an audit step;
//! [`compute_breakdown`] runs them in order.

mod deductions;
mod employer_pf;
mod engine;
mod esi;
mod gross_salary;
mod monthly_ctc;
mod rounding;
mod salary_components;
mod warnings;

pub use deductions::{
    EmployeePfResult, NetSalaryResult, PT_GROSS_THRESHOLD, PT_MONTHLY_AMOUNT,
    ProfessionalTaxResult, calculate_employee_pf, calculate_net_salary,
    calculate_professional_tax,
};
pub use employer_pf::{
    EDLI_ADMIN_RATE, EDLI_FLAT, EMPLOYER_EPS_FLAT, EPF_ADMIN_RATE, EmployerPfResult,
    PF_CONTRIBUTION_RATE, calculate_employer_pf,
};
pub use engine::{AuditedBreakdown, compute_breakdown, compute_breakdown_audited};
pub use esi::{
    ESI_EMPLOYEE_RATE, ESI_EMPLOYER_RATE, ESI_WAGE_CEILING, EmployeeEsiResult, EsiDetermination,
    calculate_employee_esi, determine_esi,
};
pub use gross_salary::{GrossSalaryResult, calculate_gross_salary};
pub use monthly_ctc::{MonthlyCtcResult, calculate_monthly_ctc};
pub use rounding::{round_rupee, rupee_share};
pub use salary_components::{HRA_RATIO, SalaryComponentsResult, split_gross_salary};
pub use warnings::collect_warnings;

pub use crate::models::MONTHS_PER_YEAR;
