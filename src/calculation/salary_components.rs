//! Salary component split.
//!
//! Gross is split into Basic+DA (a scheme-defined share of gross), HRA (half
//! of Basic+DA) and a special allowance that takes whatever is left. The
//! special allowance is never rounded on its own, so the three components
//! always add back to gross exactly.

use rust_decimal::Decimal;

use super::rounding::rupee_share;
use crate::models::AuditStep;

/// HRA as a share of Basic+DA.
pub const HRA_RATIO: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// The three salary components.
#[derive(Debug, Clone)]
pub struct SalaryComponentsResult {
    /// Basic salary plus dearness allowance.
    pub basic_da: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// The remainder of gross.
    pub special_allowance: Decimal,
    /// The audit step recording this split.
    pub audit_step: AuditStep,
}

/// Splits a gross salary into Basic+DA, HRA and special allowance.
///
/// # Examples
///
/// ```
/// use ctc_engine::calculation::split_gross_salary;
/// use rust_decimal::Decimal;
///
/// let result = split_gross_salary(Decimal::from(93_883), Decimal::new(40, 2), 5);
/// assert_eq!(result.basic_da, Decimal::from(37_553));
/// assert_eq!(result.hra, Decimal::from(18_777));
/// assert_eq!(result.special_allowance, Decimal::from(37_553));
/// ```
pub fn split_gross_salary(
    gross_salary: Decimal,
    basic_ratio: Decimal,
    step_number: u32,
) -> SalaryComponentsResult {
    let basic_da = rupee_share(gross_salary, basic_ratio);
    let hra = rupee_share(basic_da, HRA_RATIO);
    let special_allowance = gross_salary - basic_da - hra;

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_components".to_string(),
        rule_name: "Salary Components".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "basic_ratio": basic_ratio.to_string(),
            "hra_ratio": HRA_RATIO.to_string()
        }),
        output: serde_json::json!({
            "basic_da": basic_da.to_string(),
            "hra": hra.to_string(),
            "special_allowance": special_allowance.to_string()
        }),
        reasoning: format!(
            "Basic+DA {} x {} = {}; HRA {} x {} = {}; special allowance = {}",
            gross_salary, basic_ratio, basic_da, basic_da, HRA_RATIO, hra, special_allowance
        ),
    };

    SalaryComponentsResult {
        basic_da,
        hra,
        special_allowance,
        audit_step,
    }
}
