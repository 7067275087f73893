//! Caller-owned form state.
//!
//! The calculation takes an immutable [`SalaryInput`]. A front end that lets
//! a user edit values keeps them here, mutates them as the user types or
//! flips a toggle, and takes a [`FormState::snapshot`] for every recalculation.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SalaryInput;

/// Annual CTC shown when a form first opens.
pub const DEFAULT_CTC_ANNUAL: Decimal = Decimal::from_parts(1_150_000, 0, 0, false, 0);

/// PF wage base shown when a form first opens.
pub const DEFAULT_PF_BASE_CAP: Decimal = Decimal::from_parts(15_000, 0, 0, false, 0);

/// Parses user-entered amount text the way the form treats it.
///
/// Surrounding whitespace is ignored. Plain and scientific notation are
/// accepted. Anything else, including an empty field, becomes zero.
///
/// # Examples
///
/// ```
/// use ctc_engine::presentation::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount(" 1150000 "), Decimal::from(1_150_000));
/// assert_eq!(parse_amount("1.5e5"), Decimal::from(150_000));
/// assert_eq!(parse_amount("eleven lakh"), Decimal::ZERO);
/// ```
pub fn parse_amount(text: &str) -> Decimal {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// The editable values behind a salary form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    ctc_annual: Decimal,
    pf_base_cap: Decimal,
    pf_enabled: bool,
    pt_enabled: bool,
    esi_enabled: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            ctc_annual: DEFAULT_CTC_ANNUAL,
            pf_base_cap: DEFAULT_PF_BASE_CAP,
            pf_enabled: true,
            pt_enabled: true,
            esi_enabled: true,
        }
    }
}

impl FormState {
    /// Current annual CTC.
    pub fn ctc_annual(&self) -> Decimal {
        self.ctc_annual
    }

    /// Current PF wage base.
    pub fn pf_base_cap(&self) -> Decimal {
        self.pf_base_cap
    }

    /// Sets the annual CTC.
    pub fn set_ctc_annual(&mut self, amount: Decimal) {
        self.ctc_annual = amount;
    }

    /// Sets the annual CTC from field text; see [`parse_amount`].
    pub fn set_ctc_annual_text(&mut self, text: &str) {
        self.ctc_annual = parse_amount(text);
    }

    /// Sets the PF wage base.
    pub fn set_pf_base_cap(&mut self, amount: Decimal) {
        self.pf_base_cap = amount;
    }

    /// Sets the PF wage base from field text; see [`parse_amount`].
    pub fn set_pf_base_cap_text(&mut self, text: &str) {
        self.pf_base_cap = parse_amount(text);
    }

    /// Sets the PF toggle.
    pub fn set_pf_enabled(&mut self, enabled: bool) {
        self.pf_enabled = enabled;
    }

    /// Sets the PT toggle.
    pub fn set_pt_enabled(&mut self, enabled: bool) {
        self.pt_enabled = enabled;
    }

    /// Sets the ESI toggle.
    pub fn set_esi_enabled(&mut self, enabled: bool) {
        self.esi_enabled = enabled;
    }

    /// Flips the PF toggle and returns its new state.
    pub fn toggle_pf(&mut self) -> bool {
        self.pf_enabled = !self.pf_enabled;
        self.pf_enabled
    }

    /// Flips the PT toggle and returns its new state.
    pub fn toggle_pt(&mut self) -> bool {
        self.pt_enabled = !self.pt_enabled;
        self.pt_enabled
    }

    /// Flips the ESI toggle and returns its new state.
    pub fn toggle_esi(&mut self) -> bool {
        self.esi_enabled = !self.esi_enabled;
        self.esi_enabled
    }

    /// Builds a fresh input value from the current form values.
    pub fn snapshot(&self) -> SalaryInput {
        SalaryInput {
            ctc_annual: self.ctc_annual,
            pf_base_cap: self.pf_base_cap,
            pf_enabled: self.pf_enabled,
            pt_enabled: self.pt_enabled,
            esi_enabled: self.esi_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let input = FormState::default().snapshot();
        assert_eq!(input.ctc_annual, Decimal::from(1_150_000));
        assert_eq!(input.pf_base_cap, Decimal::from(15_000));
        assert!(input.pf_enabled && input.pt_enabled && input.esi_enabled);
    }

    #[test]
    fn test_non_numeric_text_becomes_zero() {
        let mut form = FormState::default();
        form.set_ctc_annual_text("abc");
        form.set_pf_base_cap_text("");
        assert_eq!(form.ctc_annual(), Decimal::ZERO);
        assert_eq!(form.pf_base_cap(), Decimal::ZERO);
    }

    #[test]
    fn test_grouped_text_is_not_a_number() {
        assert_eq!(parse_amount("11,50,000"), Decimal::ZERO);
    }

    #[test]
    fn test_negative_and_fractional_text() {
        assert_eq!(parse_amount("-5000"), Decimal::from(-5000));
        assert_eq!(parse_amount("1200.75"), Decimal::new(120075, 2));
    }

    #[test]
    fn test_toggles_flip_and_report() {
        let mut form = FormState::default();
        assert!(!form.toggle_pf());
        assert!(!form.toggle_esi());
        assert!(form.toggle_pf());

        let input = form.snapshot();
        assert!(input.pf_enabled);
        assert!(input.pt_enabled);
        assert!(!input.esi_enabled);
    }

    #[test]
    fn test_snapshot_is_detached_from_later_edits() {
        let mut form = FormState::default();
        let before = form.snapshot();

        form.set_ctc_annual(Decimal::from(600_000));
        form.set_pt_enabled(false);

        assert_eq!(before.ctc_annual, Decimal::from(1_150_000));
        assert!(before.pt_enabled);
        assert_eq!(form.snapshot().ctc_annual, Decimal::from(600_000));
    }
}
