//! Plain-text salary report.
//!
//! Renders a breakdown as the sections a salary calculator page shows: the
//! calculation flow, salary components, deductions, employer costs, an
//! annual summary and status notes. Rows for inactive schemes are left out.

use std::fmt;

use rust_decimal::Decimal;

use super::currency::{format_inr, format_percent};
use crate::calculation::{ESI_WAGE_CEILING, PT_MONTHLY_AMOUNT};
use crate::config::SalaryScheme;
use crate::models::{Breakdown, SalaryInput, SalarySummary};

const LABEL_WIDTH: usize = 40;
const AMOUNT_WIDTH: usize = 16;
const NOT_AVAILABLE: &str = "n/a";

/// A breakdown ready to be displayed.
///
/// # Example
///
/// ```
/// use ctc_engine::calculation::compute_breakdown;
/// use ctc_engine::config::SalaryScheme;
/// use ctc_engine::models::SalaryInput;
/// use ctc_engine::presentation::SalaryReport;
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput::new(Decimal::from(1_150_000), Decimal::from(15_000));
/// let scheme = SalaryScheme::basic_40();
/// let breakdown = compute_breakdown(&input, &scheme);
///
/// let text = SalaryReport::new(&input, &scheme, &breakdown).to_string();
/// assert!(text.contains("Net In-Hand Salary: ₹91,881"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SalaryReport<'a> {
    input: &'a SalaryInput,
    scheme: &'a SalaryScheme,
    breakdown: &'a Breakdown,
}

impl<'a> SalaryReport<'a> {
    /// Prepares a report for a breakdown and the input and scheme behind it.
    pub fn new(input: &'a SalaryInput, scheme: &'a SalaryScheme, breakdown: &'a Breakdown) -> Self {
        Self {
            input,
            scheme,
            breakdown,
        }
    }

    fn write_headline(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.breakdown;
        writeln!(f, "SALARY BREAKDOWN")?;
        row(f, "Monthly In-Hand", b.net_salary)?;
        annual_row(f, "Annual In-Hand", b.annual_net())?;
        row(f, "Monthly CTC", b.monthly_ctc)?;
        row(f, "Annual CTC", self.input.ctc_annual)
    }

    fn write_flow(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.breakdown;
        writeln!(f)?;
        writeln!(f, "CALCULATION FLOW")?;
        writeln!(f, "  1. Annual CTC: {}", format_inr(self.input.ctc_annual))?;
        writeln!(f, "     ↓ Divide by 12 months")?;
        writeln!(f, "  2. Monthly CTC: {}", format_inr(b.monthly_ctc))?;
        writeln!(
            f,
            "     ↓ Subtract employer statutory charges ({})",
            format_inr(b.total_employer_charges)
        )?;
        writeln!(f, "  3. Gross Salary: {}", format_inr(b.gross_salary))?;
        writeln!(
            f,
            "     ↓ Split: Basic ({}%), HRA (50% of Basic), Special Allowance (balance)",
            self.scheme.basic_percent()
        )?;
        writeln!(
            f,
            "  4. Components: Basic ({}), HRA ({}), SA ({})",
            format_inr(b.basic_da),
            format_inr(b.hra),
            format_inr(b.special_allowance)
        )?;
        writeln!(
            f,
            "     ↓ Subtract employee deductions ({})",
            format_inr(b.total_deductions)
        )?;
        writeln!(f, "  5. Net In-Hand Salary: {}", format_inr(b.net_salary))
    }

    fn write_components(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.breakdown;
        writeln!(f)?;
        writeln!(f, "SALARY COMPONENTS")?;
        row(
            f,
            &format!("Basic Salary + DA ({}%)", self.scheme.basic_percent()),
            b.basic_da,
        )?;
        row(f, "HRA (50% of Basic)", b.hra)?;
        row(f, "Special Allowance", b.special_allowance)?;
        row(f, "Gross Salary", b.gross_salary)
    }

    fn write_deductions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.breakdown;
        writeln!(f)?;
        writeln!(f, "DEDUCTIONS")?;
        if b.pf_enabled {
            row(
                f,
                &format!("Employee PF (12% of {})", format_inr(self.input.pf_base_cap)),
                b.employee_pf,
            )?;
        }
        if b.esi_applicable {
            row(f, "Employee ESI (0.75%)", b.employee_esi)?;
        }
        if b.pt_enabled {
            row(f, "Professional Tax", b.professional_tax)?;
        }
        row(f, "Total Deductions", b.total_deductions)?;
        if !b.has_deductions() {
            writeln!(f, "  (No deductions enabled)")?;
        }
        Ok(())
    }

    fn write_employer_costs(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.breakdown;
        writeln!(f)?;
        writeln!(f, "EMPLOYER COSTS")?;
        row(f, "Gross Salary to Employee", b.gross_salary)?;
        writeln!(f, "  + Employer Statutory Contributions")?;
        if b.pf_enabled {
            row(f, "  EPF (Employee Provident Fund)", b.employer_epf)?;
            row(f, "  EPS (Employee Pension Scheme)", b.employer_eps)?;
        }
        if b.esi_applicable {
            row(f, "  ESI - Employer (3.25%)", b.employer_esi)?;
        }
        if b.pf_enabled {
            row(f, "  EDLI (Insurance)", b.edli)?;
            row(f, "  EPF Admin Charges (0.5%)", b.epf_admin)?;
            if self.scheme.include_edli_admin {
                row(f, "  EDLI Admin Charges (0.01%)", b.edli_admin)?;
            }
        }
        row(f, "Total Employer Charges", b.total_employer_charges)?;
        if !b.has_employer_contributions() {
            writeln!(f, "  (No employer contributions: PF and ESI disabled)")?;
        }
        Ok(())
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = SalarySummary::new(self.input, self.breakdown);
        writeln!(f)?;
        writeln!(f, "ANNUAL SUMMARY")?;
        row(f, "Annual CTC", summary.annual_ctc)?;
        annual_row(f, "Annual Gross", summary.annual_gross)?;
        annual_row(f, "Total Deductions", summary.annual_deductions)?;
        annual_row(f, "Annual In-Hand", summary.annual_net)?;
        ratio_row(f, "Take-home %", summary.take_home_percent)?;
        ratio_row(f, "Employer Cost %", summary.employer_cost_percent)?;
        ratio_row(f, "Total Deductions %", summary.deductions_percent)
    }

    fn write_notes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.breakdown;
        writeln!(f)?;
        writeln!(f, "NOTES")?;
        if b.pf_enabled {
            writeln!(
                f,
                "  - PF Status: Enabled - Calculated on {}",
                format_inr(self.input.pf_base_cap)
            )?;
        } else {
            writeln!(f, "  - PF Status: Disabled")?;
        }
        if b.pt_enabled {
            writeln!(
                f,
                "  - PT Status: Enabled - {}/month",
                format_inr(PT_MONTHLY_AMOUNT)
            )?;
        } else {
            writeln!(f, "  - PT Status: Disabled")?;
        }
        let ceiling = format_inr(ESI_WAGE_CEILING);
        if !b.esi_enabled {
            writeln!(f, "  - ESI Status: Disabled")?;
        } else if b.esi_applicable {
            writeln!(
                f,
                "  - ESI Status: Applicable (Gross ≤ {}) - Employee: 0.75%, Employer: 3.25%",
                ceiling
            )?;
        } else {
            writeln!(
                f,
                "  - ESI Status: Enabled but not applicable (Gross > {})",
                ceiling
            )?;
        }
        let yearly = b
            .annual_employer_charges()
            .map(format_inr)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        writeln!(
            f,
            "  - Employer additionally pays {}/year in statutory contributions",
            yearly
        )
    }
}

impl fmt::Display for SalaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_headline(f)?;
        self.write_flow(f)?;
        self.write_components(f)?;
        self.write_deductions(f)?;
        self.write_employer_costs(f)?;
        self.write_summary(f)?;
        self.write_notes(f)
    }
}

/// Renders the full text report for a breakdown.
pub fn render_report(input: &SalaryInput, scheme: &SalaryScheme, breakdown: &Breakdown) -> String {
    SalaryReport::new(input, scheme, breakdown).to_string()
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, amount: Decimal) -> fmt::Result {
    cell(f, label, &format_inr(amount))
}

/// An annual amount, `n/a` when it could not be computed.
fn annual_row(f: &mut fmt::Formatter<'_>, label: &str, amount: Option<Decimal>) -> fmt::Result {
    match amount {
        Some(amount) => row(f, label, amount),
        None => cell(f, label, NOT_AVAILABLE),
    }
}

fn ratio_row(f: &mut fmt::Formatter<'_>, label: &str, value: Option<Decimal>) -> fmt::Result {
    match value {
        Some(value) => cell(f, label, &format_percent(value)),
        None => cell(f, label, NOT_AVAILABLE),
    }
}

fn cell(f: &mut fmt::Formatter<'_>, label: &str, text: &str) -> fmt::Result {
    writeln!(
        f,
        "  {:<label_w$}{:>amount_w$}",
        label,
        text,
        label_w = LABEL_WIDTH,
        amount_w = AMOUNT_WIDTH
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_breakdown;

    fn report_for(input: &SalaryInput, scheme: &SalaryScheme) -> String {
        let breakdown = compute_breakdown(input, scheme);
        render_report(input, scheme, &breakdown)
    }

    fn default_input() -> SalaryInput {
        SalaryInput::new(Decimal::from(1_150_000), Decimal::from(15_000))
    }

    #[test]
    fn test_report_has_every_section_in_order() {
        let text = report_for(&default_input(), &SalaryScheme::basic_40());
        let sections = [
            "SALARY BREAKDOWN",
            "CALCULATION FLOW",
            "SALARY COMPONENTS",
            "DEDUCTIONS",
            "EMPLOYER COSTS",
            "ANNUAL SUMMARY",
            "NOTES",
        ];

        let mut last = 0;
        for section in sections {
            let at = text.find(section).unwrap_or_else(|| panic!("missing {}", section));
            assert!(at >= last, "{} out of order", section);
            last = at;
        }
    }

    #[test]
    fn test_flow_and_components_use_scheme_ratio() {
        let text = report_for(&default_input(), &SalaryScheme::basic_50());
        assert!(text.contains("Split: Basic (50%)"));
        assert!(text.contains("Basic Salary + DA (50%)"));
        assert!(text.contains("₹46,942"));
    }

    #[test]
    fn test_default_report_figures() {
        let text = report_for(&default_input(), &SalaryScheme::basic_40());
        assert!(text.contains("1. Annual CTC: ₹11,50,000"));
        assert!(text.contains("2. Monthly CTC: ₹95,833"));
        assert!(text.contains("Subtract employer statutory charges (₹1,952)"));
        assert!(text.contains("Employee PF (12% of ₹15,000)"));
        assert!(text.contains("EDLI Admin Charges (0.01%)"));
        assert!(text.contains("95.9%"));
        assert!(text.contains("Enabled but not applicable (Gross > ₹21,000)"));
        assert!(text.contains("Employer additionally pays ₹23,424/year"));
    }

    #[test]
    fn test_edli_admin_row_hidden_when_scheme_omits_it() {
        let text = report_for(&default_input(), &SalaryScheme::basic_50());
        assert!(!text.contains("EDLI Admin Charges"));
        assert!(text.contains("EDLI (Insurance)"));
    }

    #[test]
    fn test_everything_disabled_notes() {
        let input = default_input().with_pf(false).with_pt(false).with_esi(false);
        let text = report_for(&input, &SalaryScheme::basic_40());

        assert!(text.contains("(No deductions enabled)"));
        assert!(text.contains("(No employer contributions: PF and ESI disabled)"));
        assert!(text.contains("PF Status: Disabled"));
        assert!(text.contains("PT Status: Disabled"));
        assert!(text.contains("ESI Status: Disabled"));
        assert!(!text.contains("Employee PF"));
        assert!(!text.contains("EPS (Employee Pension Scheme)"));
    }

    #[test]
    fn test_esi_rows_appear_when_applicable() {
        let input = SalaryInput::new(Decimal::from(251_988), Decimal::from(15_000)).with_pf(false);
        let text = report_for(&input, &SalaryScheme::basic_40());

        assert!(text.contains("Employee ESI (0.75%)"));
        assert!(text.contains("ESI - Employer (3.25%)"));
        assert!(text.contains("Applicable (Gross ≤ ₹21,000)"));
    }

    #[test]
    fn test_zero_ctc_ratios_render_as_not_available() {
        let input = SalaryInput::new(Decimal::ZERO, Decimal::ZERO)
            .with_pf(false)
            .with_esi(false);
        let text = report_for(&input, &SalaryScheme::basic_40());
        assert!(text.contains("n/a"));
    }

    #[test]
    fn test_huge_ctc_reports_take_home_as_not_available() {
        let ctc = Decimal::from_scientific("1e27").unwrap();
        let input = SalaryInput::new(ctc, Decimal::from(15_000));
        let text = report_for(&input, &SalaryScheme::basic_40());

        assert!(text.contains("ANNUAL SUMMARY"));
        assert!(text.contains("Take-home %"));
        assert!(text.contains("n/a"));
        assert!(text.contains("Employer additionally pays ₹23,424/year"));
    }
}
