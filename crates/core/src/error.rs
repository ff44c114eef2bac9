/// Errors raised at the text boundaries of the crate.
///
/// Scoring itself never fails; these only come from parsing names, scale selectors and
/// vitals documents supplied by a caller.
#[derive(Debug, thiserror::Error)]
pub enum News2Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown consciousness level: {0:?} (expected Alert, Confused, Voice, Pain, Unresponsive or A/C/V/P/U)")]
    UnknownConsciousnessLevel(String),
    #[error("unknown SpO2 scale: {0:?} (expected 1, 2, scale1 or scale2)")]
    UnknownScale(String),

    #[error("vitals {format} schema mismatch at {path}: {message}")]
    SchemaMismatch {
        format: &'static str,
        path: String,
        message: String,
    },
    #[error("failed to serialize vitals: {0}")]
    Serialization(serde_json::Error),
}

pub type News2Result<T> = std::result::Result<T, News2Error>;
