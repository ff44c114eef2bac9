//! Constants used throughout the NEWS2 core crate.
//!
//! Flat score contributions, aggregate thresholds and environment variable names live here so
//! that the scoring, risk and configuration modules agree on them.

/// Points added when the patient is receiving supplemental oxygen.
pub const SUPPLEMENTAL_OXYGEN_POINTS: u8 = 2;

/// Points added for any consciousness level other than Alert.
pub const NOT_ALERT_POINTS: u8 = 3;

/// The score a single parameter must reach to count as a "red" score.
pub const RED_SCORE: u8 = 3;

/// Highest possible aggregate score.
pub const MAX_TOTAL_SCORE: u8 = 20;

/// Aggregate score at or above which clinical risk is medium.
pub const MEDIUM_RISK_THRESHOLD: u8 = 5;

/// Aggregate score at or above which clinical risk is high.
pub const HIGH_RISK_THRESHOLD: u8 = 7;

/// Environment variable naming the default SpO2 scale for callers that do not choose one.
pub const SPO2_SCALE_ENV_VAR: &str = "NEWS2_SPO2_SCALE";
