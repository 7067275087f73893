//! Core data models for the CTC engine.
//!
//! This module contains the input, output and audit types shared by the
//! calculation, presentation and API layers.

mod breakdown;
mod calculation_result;
mod input;
mod summary;

pub use breakdown::{Breakdown, MONTHS_PER_YEAR};
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
pub use input::SalaryInput;
pub use summary::SalarySummary;
