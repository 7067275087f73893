//! Salary breakdown model.
//!
//! A [`Breakdown`] is the complete output of one calculation: the salary
//! components paid to the employee, the employee-side deductions, and the
//! employer-side statutory charges that sit inside the CTC.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of salary months in a year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The monthly salary breakdown derived from an annual CTC.
///
/// All amounts are whole rupees per month. Every field is derived from the
/// input and scheme of the call that produced it, so two breakdowns compare
/// equal exactly when they were produced from equal inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Annual CTC divided by twelve, rounded.
    pub monthly_ctc: Decimal,
    /// Monthly CTC less all employer statutory charges.
    pub gross_salary: Decimal,
    /// Basic salary plus dearness allowance.
    pub basic_da: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Remainder of gross after basic and HRA.
    pub special_allowance: Decimal,
    /// Employee provident fund deduction.
    pub employee_pf: Decimal,
    /// Employee state insurance deduction.
    pub employee_esi: Decimal,
    /// Professional tax deduction.
    pub professional_tax: Decimal,
    /// Sum of all employee deductions.
    pub total_deductions: Decimal,
    /// Take-home pay.
    pub net_salary: Decimal,
    /// Employer provident fund share (after the pension split).
    pub employer_epf: Decimal,
    /// Employer pension scheme share.
    pub employer_eps: Decimal,
    /// Employer state insurance contribution.
    pub employer_esi: Decimal,
    /// Deposit linked insurance premium.
    pub edli: Decimal,
    /// Provident fund administration charge.
    pub epf_admin: Decimal,
    /// Deposit linked insurance administration charge.
    pub edli_admin: Decimal,
    /// Sum of all employer statutory charges.
    pub total_employer_charges: Decimal,
    /// Whether the employee fell under the ESI wage ceiling.
    pub esi_applicable: bool,
    /// Echo of the PF flag the breakdown was computed with.
    pub pf_enabled: bool,
    /// Echo of the PT flag the breakdown was computed with.
    pub pt_enabled: bool,
    /// Echo of the ESI flag the breakdown was computed with.
    pub esi_enabled: bool,
}

impl Breakdown {
    /// Sum of the three salary components.
    pub fn components_total(&self) -> Decimal {
        self.basic_da + self.hra + self.special_allowance
    }

    /// Net salary over twelve months, `None` if it leaves the decimal range.
    pub fn annual_net(&self) -> Option<Decimal> {
        annualise(self.net_salary)
    }

    /// Gross salary over twelve months, `None` if it leaves the decimal range.
    pub fn annual_gross(&self) -> Option<Decimal> {
        annualise(self.gross_salary)
    }

    /// Employee deductions over twelve months.
    pub fn annual_deductions(&self) -> Option<Decimal> {
        annualise(self.total_deductions)
    }

    /// Employer charges over twelve months.
    pub fn annual_employer_charges(&self) -> Option<Decimal> {
        annualise(self.total_employer_charges)
    }

    /// Whether any employer contribution is in force.
    pub fn has_employer_contributions(&self) -> bool {
        self.pf_enabled || self.esi_applicable
    }

    /// Whether any employee deduction is in force.
    pub fn has_deductions(&self) -> bool {
        self.pf_enabled || self.pt_enabled || self.esi_applicable
    }
}

fn annualise(monthly: Decimal) -> Option<Decimal> {
    monthly.checked_mul(MONTHS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Breakdown {
        Breakdown {
            monthly_ctc: Decimal::from(50_000),
            gross_salary: Decimal::from(48_050),
            basic_da: Decimal::from(19_220),
            hra: Decimal::from(9_610),
            special_allowance: Decimal::from(19_220),
            employee_pf: Decimal::from(1_800),
            employee_esi: Decimal::ZERO,
            professional_tax: Decimal::from(200),
            total_deductions: Decimal::from(2_000),
            net_salary: Decimal::from(46_050),
            employer_epf: Decimal::from(550),
            employer_eps: Decimal::from(1_250),
            employer_esi: Decimal::ZERO,
            edli: Decimal::from(75),
            epf_admin: Decimal::from(75),
            edli_admin: Decimal::ZERO,
            total_employer_charges: Decimal::from(1_950),
            esi_applicable: false,
            pf_enabled: true,
            pt_enabled: true,
            esi_enabled: true,
        }
    }

    #[test]
    fn test_components_total_matches_gross() {
        let breakdown = sample();
        assert_eq!(breakdown.components_total(), breakdown.gross_salary);
    }

    #[test]
    fn test_annual_figures() {
        let breakdown = sample();
        assert_eq!(breakdown.annual_net(), Some(Decimal::from(552_600)));
        assert_eq!(breakdown.annual_gross(), Some(Decimal::from(576_600)));
        assert_eq!(breakdown.annual_deductions(), Some(Decimal::from(24_000)));
        assert_eq!(breakdown.annual_employer_charges(), Some(Decimal::from(23_400)));
    }

    #[test]
    fn test_annual_figures_past_decimal_range() {
        let mut breakdown = sample();
        breakdown.net_salary = Decimal::MAX;
        breakdown.gross_salary = Decimal::MAX / Decimal::from(11);

        assert_eq!(breakdown.annual_net(), None);
        assert_eq!(breakdown.annual_gross(), None);
        assert_eq!(breakdown.annual_deductions(), Some(Decimal::from(24_000)));
    }

    #[test]
    fn test_contribution_flags() {
        let mut breakdown = sample();
        assert!(breakdown.has_employer_contributions());
        assert!(breakdown.has_deductions());

        breakdown.pf_enabled = false;
        breakdown.pt_enabled = false;
        assert!(!breakdown.has_employer_contributions());
        assert!(!breakdown.has_deductions());
    }

    #[test]
    fn test_serializes_amounts_as_strings() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["net_salary"], "46050");
        assert_eq!(json["esi_applicable"], false);
    }
}
