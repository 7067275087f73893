//! Configuration types for salary schemes.
//!
//! The statutory rates themselves are fixed (see [`crate::calculation`]). What
//! varies between deployments of the tool is how gross is split into Basic+DA
//! and whether the EDLI administration charge is levied; a [`SalaryScheme`]
//! carries exactly those two choices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The configurable part of the salary calculation.
///
/// # Example
///
/// ```
/// use ctc_engine::config::SalaryScheme;
/// use rust_decimal::Decimal;
///
/// let scheme = SalaryScheme::basic_40().with_edli_admin(false);
/// assert_eq!(scheme.basic_ratio, Decimal::new(40, 2));
/// assert!(!scheme.include_edli_admin);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryScheme {
    /// Fraction of gross salary allocated to Basic+DA.
    pub basic_ratio: Decimal,
    /// Whether the EDLI administration charge is part of employer charges.
    pub include_edli_admin: bool,
}

impl SalaryScheme {
    /// Basic+DA at 40% of gross with the EDLI admin charge levied.
    pub fn basic_40() -> Self {
        Self {
            basic_ratio: Decimal::new(40, 2),
            include_edli_admin: true,
        }
    }

    /// Basic+DA at 50% of gross without the EDLI admin charge.
    pub fn basic_50() -> Self {
        Self {
            basic_ratio: Decimal::new(50, 2),
            include_edli_admin: false,
        }
    }

    /// Returns a copy with a different Basic+DA ratio.
    pub fn with_basic_ratio(mut self, basic_ratio: Decimal) -> Self {
        self.basic_ratio = basic_ratio;
        self
    }

    /// Returns a copy with the EDLI admin charge switched on or off.
    pub fn with_edli_admin(mut self, include: bool) -> Self {
        self.include_edli_admin = include;
        self
    }

    /// The Basic+DA ratio expressed as a whole percentage, e.g. `40`.
    pub fn basic_percent(&self) -> Decimal {
        (self.basic_ratio * Decimal::ONE_HUNDRED).normalize()
    }

    /// Checks that the scheme can split a gross salary.
    ///
    /// `name` is only used to label the error.
    pub fn validate(&self, name: &str) -> EngineResult<()> {
        if self.basic_ratio < Decimal::ZERO || self.basic_ratio > Decimal::ONE {
            return Err(EngineError::InvalidScheme {
                name: name.to_string(),
                message: format!(
                    "basic_ratio must be between 0 and 1, got {}",
                    self.basic_ratio
                ),
            });
        }
        Ok(())
    }
}

/// A named scheme, as listed by the API and stored in preset files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemePreset {
    /// Identifier used by callers to select the preset (e.g. "basic_40").
    pub name: String,
    /// A human-readable description of the preset.
    #[serde(default)]
    pub description: String,
    /// The scheme settings.
    pub scheme: SalaryScheme,
}

impl SchemePreset {
    /// Creates a preset from its parts.
    pub fn new(name: impl Into<String>, description: impl Into<String>, scheme: SalaryScheme) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            scheme,
        }
    }

    /// The presets compiled into the engine, default first.
    pub fn builtin() -> Vec<SchemePreset> {
        vec![
            SchemePreset::new(
                "basic_40",
                "Basic + DA at 40% of gross, EDLI admin charge levied",
                SalaryScheme::basic_40(),
            ),
            SchemePreset::new(
                "basic_50",
                "Basic + DA at 50% of gross, no EDLI admin charge",
                SalaryScheme::basic_50(),
            ),
        ]
    }

    /// Checks the preset name and scheme.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidScheme {
                name: self.name.clone(),
                message: "name must not be empty".to_string(),
            });
        }
        self.scheme.validate(&self.name)
    }
}
