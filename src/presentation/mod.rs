//! Presentation helpers for the CTC engine.
//!
//! Everything a front end needs around the pure calculation: the mutable form
//! state it owns, rupee and percentage formatting and a plain-text report of a
//! breakdown.

mod currency;
mod form;
mod report;

pub use currency::{RUPEE_SIGN, format_inr, format_percent};
pub use form::{DEFAULT_CTC_ANNUAL, DEFAULT_PF_BASE_CAP, FormState, parse_amount};
pub use report::{SalaryReport, render_report};
