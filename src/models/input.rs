//! Salary input model.
//!
//! This module defines the immutable [`SalaryInput`] value that callers build
//! before every calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The per-employee inputs to a salary breakdown.
///
/// Every field is required; the calculation applies no defaults of its own.
/// Callers that keep mutable form state (see
/// [`FormState`](crate::presentation::FormState)) take a fresh snapshot
/// before each calculation.
///
/// # Example
///
/// ```
/// use ctc_engine::models::SalaryInput;
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput::new(Decimal::from(1_150_000), Decimal::from(15_000))
///     .with_pt(false);
/// assert!(input.pf_enabled);
/// assert!(!input.pt_enabled);
/// assert!(input.esi_enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Annual cost to company in rupees.
    pub ctc_annual: Decimal,
    /// The wage base used for provident fund percentages.
    pub pf_base_cap: Decimal,
    /// Whether provident fund contributions apply.
    pub pf_enabled: bool,
    /// Whether professional tax applies.
    pub pt_enabled: bool,
    /// Whether employee state insurance may apply.
    pub esi_enabled: bool,
}

impl SalaryInput {
    /// Creates an input with every statutory scheme switched on.
    pub fn new(ctc_annual: Decimal, pf_base_cap: Decimal) -> Self {
        Self {
            ctc_annual,
            pf_base_cap,
            pf_enabled: true,
            pt_enabled: true,
            esi_enabled: true,
        }
    }

    /// Returns a copy with provident fund switched on or off.
    pub fn with_pf(mut self, enabled: bool) -> Self {
        self.pf_enabled = enabled;
        self
    }

    /// Returns a copy with professional tax switched on or off.
    pub fn with_pt(mut self, enabled: bool) -> Self {
        self.pt_enabled = enabled;
        self
    }

    /// Returns a copy with employee state insurance switched on or off.
    pub fn with_esi(mut self, enabled: bool) -> Self {
        self.esi_enabled = enabled;
        self
    }
}
