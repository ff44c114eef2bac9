//! Scoring configuration.
//!
//! Configuration is resolved once at process startup and then passed to whatever does the
//! scoring. Nothing in this crate reads environment variables; callers hand in the raw value
//! and get back a validated setting.

use crate::scoring::SpO2Scale;
use crate::News2Result;

/// Settings resolved at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoringConfig {
    default_scale: SpO2Scale,
}

impl ScoringConfig {
    pub fn new(default_scale: SpO2Scale) -> Self {
        Self { default_scale }
    }

    /// Saturation scale used when a request does not choose one.
    pub fn default_scale(&self) -> SpO2Scale {
        self.default_scale
    }

    /// The scale for one scoring request: the explicit choice if there is one, otherwise the
    /// configured default.
    pub fn resolve_scale(&self, requested: Option<SpO2Scale>) -> SpO2Scale {
        requested.unwrap_or(self.default_scale)
    }
}

/// Parse the default SpO2 scale from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns scale 1.
pub fn spo2_scale_from_env_value(value: Option<String>) -> News2Result<SpO2Scale> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<SpO2Scale>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}
