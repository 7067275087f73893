//! Request types for the CTC engine API.
//!
//! This module defines the JSON body shared by `/calculate` and `/report`.
//! It behaves like the salary form it stands in for: every field is optional
//! and falls back to the form's start value, and amount fields accept numbers
//! or numeric strings, with anything non-numeric read as zero. A JSON number
//! beyond the decimal range (about ±7.9e28) is also read as zero, and a
//! warning is logged for it.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use tracing::warn;

use crate::models::SalaryInput;
use crate::presentation::{DEFAULT_CTC_ANNUAL, DEFAULT_PF_BASE_CAP, parse_amount};

/// Request body for the `/calculate` and `/report` endpoints.
///
/// # Example
///
/// ```
/// use ctc_engine::api::CalculationRequest;
/// use rust_decimal::Decimal;
///
/// let request: CalculationRequest =
///     serde_json::from_str(r#"{"ctc_annual": "600000", "pt_enabled": false}"#).unwrap();
/// let input = request.into_input();
///
/// assert_eq!(input.ctc_annual, Decimal::from(600_000));
/// assert_eq!(input.pf_base_cap, Decimal::from(15_000));
/// assert!(!input.pt_enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Annual cost to company.
    #[serde(default = "default_ctc_annual", deserialize_with = "lenient_amount")]
    pub ctc_annual: Decimal,
    /// PF wage base.
    #[serde(default = "default_pf_base_cap", deserialize_with = "lenient_amount")]
    pub pf_base_cap: Decimal,
    /// Whether provident fund applies.
    #[serde(default = "enabled")]
    pub pf_enabled: bool,
    /// Whether professional tax applies.
    #[serde(default = "enabled")]
    pub pt_enabled: bool,
    /// Whether employee state insurance may apply.
    #[serde(default = "enabled")]
    pub esi_enabled: bool,
    /// Name of the scheme preset; the server default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

impl Default for CalculationRequest {
    fn default() -> Self {
        Self {
            ctc_annual: DEFAULT_CTC_ANNUAL,
            pf_base_cap: DEFAULT_PF_BASE_CAP,
            pf_enabled: true,
            pt_enabled: true,
            esi_enabled: true,
            scheme: None,
        }
    }
}

impl CalculationRequest {
    /// Converts the request into the calculation input.
    pub fn into_input(self) -> SalaryInput {
        SalaryInput {
            ctc_annual: self.ctc_annual,
            pf_base_cap: self.pf_base_cap,
            pf_enabled: self.pf_enabled,
            pt_enabled: self.pt_enabled,
            esi_enabled: self.esi_enabled,
        }
    }
}

fn default_ctc_annual() -> Decimal {
    DEFAULT_CTC_ANNUAL
}

fn default_pf_base_cap() -> Decimal {
    DEFAULT_PF_BASE_CAP
}

fn enabled() -> bool {
    true
}

/// Reads a number or numeric string; anything else becomes zero.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number_amount(&number),
        Value::String(text) => parse_amount(&text),
        _ => Decimal::ZERO,
    })
}

/// Every JSON number is numeric, so a failed parse means it is out of range.
fn number_amount(number: &Number) -> Decimal {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .unwrap_or_else(|_| {
            warn!(value = %text, "Amount outside the decimal range, reading it as zero");
            Decimal::ZERO
        })
}
