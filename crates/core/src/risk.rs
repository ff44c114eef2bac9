//! Clinical risk bands for an aggregate score.
//!
//! Classification looks only at the breakdown it is given. It does not track trends and does
//! not decide on a clinical response; that is the caller's job.

use crate::constants::{HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD};
use crate::scoring::ScoreBreakdown;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalRisk {
    Low,
    /// Aggregate below the medium threshold, but one parameter scored 3.
    LowMedium,
    Medium,
    High,
}

impl ClinicalRisk {
    /// Classify a scored set of observations.
    ///
    /// Aggregate thresholds take precedence; a single red parameter only lifts an otherwise
    /// low aggregate to [`ClinicalRisk::LowMedium`].
    pub fn classify(breakdown: &ScoreBreakdown) -> Self {
        let total = breakdown.total();
        if total >= HIGH_RISK_THRESHOLD {
            Self::High
        } else if total >= MEDIUM_RISK_THRESHOLD {
            Self::Medium
        } else if breakdown.has_red_score() {
            Self::LowMedium
        } else {
            Self::Low
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::LowMedium => "Low-medium",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for ClinicalRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
