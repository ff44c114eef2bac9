//! # NEWS2 Core
//!
//! National Early Warning Score 2 calculation from a single set of routine observations.
//!
//! This crate contains pure scoring logic and the types it works on:
//! - [`VitalSigns`] and the ACVPU [`ConsciousnessLevel`]
//! - Per-parameter threshold tables and the aggregate [`calculate_score`]
//! - A [`ScoreBreakdown`] of individual terms and the [`ClinicalRisk`] band it falls in
//! - Parsing vitals from JSON/YAML text
//!
//! **No I/O**: reading files, environment variables or anything else from outside the process
//! belongs to callers such as `news2-cli`.
//!
//! ```rust
//! use news2_core::{calculate_score, ConsciousnessLevel, VitalSigns};
//!
//! let vitals = VitalSigns {
//!     respiratory_rate: 18,
//!     oxygen_saturation: 90,
//!     on_oxygen: true,
//!     systolic_bp: 100,
//!     pulse: 100,
//!     temperature: 36.5,
//!     consciousness: ConsciousnessLevel::Voice,
//! };
//! assert_eq!(calculate_score(&vitals, true), 11);
//! ```

pub mod bands;
pub mod config;
pub mod consciousness;
pub mod constants;
pub mod error;
pub mod risk;
pub mod scoring;
pub mod vitals;

pub use config::{spo2_scale_from_env_value, ScoringConfig};
pub use consciousness::{ConsciousnessLevel, UnknownCode};
pub use error::{News2Error, News2Result};
pub use risk::ClinicalRisk;
pub use scoring::{calculate_score, score_breakdown, ScoreBreakdown, SpO2Scale};
pub use vitals::{DocumentFormat, VitalSigns};
