//! NEWS2 aggregate score.
//!
//! The aggregate is the sum of one sub-score per physiological parameter plus two flat terms:
//! one for supplemental oxygen and one for any consciousness level other than Alert. Each
//! parameter is scored independently from its own threshold table.
//!
//! Oxygen saturation has two curves. Scale 1 is the default. Scale 2 is for patients with a
//! prescribed lower target range (typically hypercapnic respiratory failure); on oxygen it
//! penalises high saturations as well as low ones.

use crate::bands::BandTable;
use crate::constants::{NOT_ALERT_POINTS, RED_SCORE, SUPPLEMENTAL_OXYGEN_POINTS};
use crate::{ConsciousnessLevel, News2Error, News2Result, VitalSigns};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const RESPIRATORY_RATE: BandTable<i32> =
    BandTable::at_most(&[(8, 3), (11, 1), (20, 0), (24, 1)], 3);

const SPO2_SCALE_1: BandTable<i32> = BandTable::at_least(&[(96, 0), (94, 1), (92, 2)], 3);

const SPO2_SCALE_2_ON_OXYGEN: BandTable<i32> = BandTable::at_least(
    &[(97, 3), (95, 2), (93, 1), (88, 0), (86, 1), (84, 2)],
    3,
);

const SPO2_SCALE_2_ON_AIR: BandTable<i32> = BandTable::at_least(&[(93, 0), (86, 1), (84, 2)], 3);

const SYSTOLIC_BP: BandTable<i32> =
    BandTable::at_least(&[(220, 3), (111, 0), (101, 1), (91, 2)], 3);

const PULSE: BandTable<i32> =
    BandTable::at_most(&[(40, 3), (50, 1), (90, 0), (110, 1), (130, 2)], 3);

const TEMPERATURE: BandTable<f64> =
    BandTable::at_most(&[(35.0, 3), (36.0, 1), (38.0, 0), (39.0, 1)], 2);

/// Which oxygen saturation curve to score against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpO2Scale {
    #[default]
    Scale1,
    /// Lower target range for patients at risk of hypercapnic respiratory failure.
    Scale2,
}

impl SpO2Scale {
    /// Map the boolean "use scale 1" selector onto a scale.
    pub fn from_scale1_flag(use_scale_1: bool) -> Self {
        if use_scale_1 {
            Self::Scale1
        } else {
            Self::Scale2
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Scale1 => "Scale 1",
            Self::Scale2 => "Scale 2",
        }
    }
}

impl fmt::Display for SpO2Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpO2Scale {
    type Err = News2Error;

    fn from_str(s: &str) -> News2Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "scale1" => Ok(Self::Scale1),
            "2" | "scale2" => Ok(Self::Scale2),
            _ => Err(News2Error::UnknownScale(s.to_string())),
        }
    }
}

pub fn respiratory_rate_score(respiratory_rate: i32) -> u8 {
    RESPIRATORY_RATE.score(respiratory_rate)
}

/// Score oxygen saturation on the chosen scale.
///
/// On scale 1 `on_oxygen` has no effect. The flat supplemental oxygen term is separate; see
/// [`supplemental_oxygen_score`].
pub fn oxygen_saturation_score(oxygen_saturation: i32, on_oxygen: bool, scale: SpO2Scale) -> u8 {
    let table = match (scale, on_oxygen) {
        (SpO2Scale::Scale1, _) => &SPO2_SCALE_1,
        (SpO2Scale::Scale2, true) => &SPO2_SCALE_2_ON_OXYGEN,
        (SpO2Scale::Scale2, false) => &SPO2_SCALE_2_ON_AIR,
    };
    table.score(oxygen_saturation)
}

pub fn supplemental_oxygen_score(on_oxygen: bool) -> u8 {
    if on_oxygen {
        SUPPLEMENTAL_OXYGEN_POINTS
    } else {
        0
    }
}

pub fn systolic_bp_score(systolic_bp: i32) -> u8 {
    SYSTOLIC_BP.score(systolic_bp)
}

pub fn pulse_score(pulse: i32) -> u8 {
    PULSE.score(pulse)
}

/// Every level other than Alert scores the same, including unrecognised codes.
pub fn consciousness_score(level: ConsciousnessLevel) -> u8 {
    if level.is_alert() {
        0
    } else {
        NOT_ALERT_POINTS
    }
}

pub fn temperature_score(temperature: f64) -> u8 {
    TEMPERATURE.score(temperature)
}

/// Individual contributions to an aggregate score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub scale: SpO2Scale,
    pub respiratory_rate: u8,
    pub oxygen_saturation: u8,
    pub supplemental_oxygen: u8,
    pub systolic_bp: u8,
    pub pulse: u8,
    pub consciousness: u8,
    pub temperature: u8,
}

impl ScoreBreakdown {
    /// Aggregate NEWS2 score.
    ///
    /// Saturates at `u8::MAX` for hand-built or deserialized breakdowns with oversized terms.
    pub fn total(&self) -> u8 {
        self.terms()
            .into_iter()
            .fold(0u8, |total, (_, score)| total.saturating_add(score))
    }

    /// Whether any single parameter scored 3.
    ///
    /// The supplemental oxygen term never reaches 3 and is not a parameter score.
    pub fn has_red_score(&self) -> bool {
        [
            self.respiratory_rate,
            self.oxygen_saturation,
            self.systolic_bp,
            self.pulse,
            self.consciousness,
            self.temperature,
        ]
        .into_iter()
        .any(|score| score >= RED_SCORE)
    }

    /// Labelled terms in the order they are summed.
    pub fn terms(&self) -> [(&'static str, u8); 7] {
        [
            ("Respiratory rate", self.respiratory_rate),
            ("SpO2", self.oxygen_saturation),
            ("Supplemental oxygen", self.supplemental_oxygen),
            ("Systolic BP", self.systolic_bp),
            ("Pulse", self.pulse),
            ("Consciousness", self.consciousness),
            ("Temperature", self.temperature),
        ]
    }
}

/// Score each parameter of `vitals` on the given saturation scale.
pub fn score_breakdown(vitals: &VitalSigns, scale: SpO2Scale) -> ScoreBreakdown {
    let breakdown = ScoreBreakdown {
        scale,
        respiratory_rate: respiratory_rate_score(vitals.respiratory_rate),
        oxygen_saturation: oxygen_saturation_score(
            vitals.oxygen_saturation,
            vitals.on_oxygen,
            scale,
        ),
        supplemental_oxygen: supplemental_oxygen_score(vitals.on_oxygen),
        systolic_bp: systolic_bp_score(vitals.systolic_bp),
        pulse: pulse_score(vitals.pulse),
        consciousness: consciousness_score(vitals.consciousness),
        temperature: temperature_score(vitals.temperature),
    };

    tracing::debug!(
        "NEWS2 {} on {}: {:?}",
        breakdown.total(),
        scale,
        breakdown
    );

    breakdown
}

/// Compute the NEWS2 aggregate score.
///
/// `use_scale_1` selects the saturation curve: `true` for scale 1, `false` for scale 2.
/// Never fails; out-of-range measurements score in the most extreme band they reach.
pub fn calculate_score(vitals: &VitalSigns, use_scale_1: bool) -> u8 {
    score_breakdown(vitals, SpO2Scale::from_scale1_flag(use_scale_1)).total()
}
