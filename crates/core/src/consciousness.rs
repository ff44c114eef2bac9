//! ACVPU consciousness levels.
//!
//! Record systems usually store the level as a small integer code. Codes outside the five known
//! levels are kept rather than rejected: they score as "not alert" and display as `Unknown`.

use crate::{News2Error, News2Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Display name used for codes outside the ACVPU scale.
pub const UNKNOWN_LEVEL_NAME: &str = "Unknown";

/// A stored code outside the ACVPU range.
///
/// Only [`ConsciousnessLevel::from_code`] builds one, so it never holds 0..=4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnknownCode(i32);

impl UnknownCode {
    pub fn value(self) -> i32 {
        self.0
    }
}

/// Level of consciousness on the ACVPU scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConsciousnessLevel {
    #[default]
    Alert,
    /// New confusion.
    Confused,
    /// Responds to voice.
    Voice,
    /// Responds to pain.
    Pain,
    Unresponsive,
    /// A numeric code with no ACVPU meaning.
    Unrecognised(UnknownCode),
}

impl ConsciousnessLevel {
    /// The five ACVPU levels in code order.
    pub const ALL: [ConsciousnessLevel; 5] = [
        ConsciousnessLevel::Alert,
        ConsciousnessLevel::Confused,
        ConsciousnessLevel::Voice,
        ConsciousnessLevel::Pain,
        ConsciousnessLevel::Unresponsive,
    ];

    /// Map a stored numeric code to a level. Never fails.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Alert,
            1 => Self::Confused,
            2 => Self::Voice,
            3 => Self::Pain,
            4 => Self::Unresponsive,
            other => Self::Unrecognised(UnknownCode(other)),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Alert => 0,
            Self::Confused => 1,
            Self::Voice => 2,
            Self::Pain => 3,
            Self::Unresponsive => 4,
            Self::Unrecognised(code) => code.value(),
        }
    }

    /// Human-readable name, or `"Unknown"` for an unrecognised code.
    pub fn name(self) -> &'static str {
        match self {
            Self::Alert => "Alert",
            Self::Confused => "Confused",
            Self::Voice => "Voice",
            Self::Pain => "Pain",
            Self::Unresponsive => "Unresponsive",
            Self::Unrecognised(_) => UNKNOWN_LEVEL_NAME,
        }
    }

    /// Single-letter ACVPU abbreviation, if the level is on the scale.
    pub fn letter(self) -> Option<char> {
        match self {
            Self::Alert => Some('A'),
            Self::Confused => Some('C'),
            Self::Voice => Some('V'),
            Self::Pain => Some('P'),
            Self::Unresponsive => Some('U'),
            Self::Unrecognised(_) => None,
        }
    }

    pub fn is_alert(self) -> bool {
        self == Self::Alert
    }
}

impl fmt::Display for ConsciousnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConsciousnessLevel {
    type Err = News2Error;

    /// Accepts a full level name or its ACVPU letter, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> News2Result<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c.to_ascii_uppercase()),
            _ => None,
        };

        Self::ALL
            .into_iter()
            .find(|level| {
                level.name().eq_ignore_ascii_case(trimmed)
                    || (letter.is_some() && level.letter() == letter)
            })
            .ok_or_else(|| News2Error::UnknownConsciousnessLevel(s.to_string()))
    }
}

impl Serialize for ConsciousnessLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Unrecognised(code) => serializer.serialize_i32(code.value()),
            level => serializer.serialize_str(level.name()),
        }
    }
}

impl<'de> Deserialize<'de> for ConsciousnessLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Stored {
            Code(i32),
            Name(String),
        }

        match Stored::deserialize(deserializer)? {
            Stored::Code(code) => Ok(Self::from_code(code)),
            Stored::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}
