//! Vital signs snapshot and its document formats.
//!
//! A [`VitalSigns`] value is the only input to scoring. Callers either build one directly or
//! parse it from a JSON or YAML document. Parsing is text in, value out: this module never
//! touches the filesystem.
//!
//! Field values are taken as-is. There is no range checking; a negative pulse or a saturation
//! above 100% is scored by whichever band it falls into.

use crate::{ConsciousnessLevel, News2Error, News2Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One set of observations taken together.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VitalSigns {
    /// Breaths per minute.
    pub respiratory_rate: i32,
    /// Peripheral oxygen saturation, percent.
    pub oxygen_saturation: i32,
    /// Whether the patient is receiving supplemental oxygen.
    #[serde(default)]
    pub on_oxygen: bool,
    /// Systolic blood pressure, mmHg.
    pub systolic_bp: i32,
    /// Beats per minute.
    pub pulse: i32,
    /// Degrees Celsius.
    pub temperature: f64,
    pub consciousness: ConsciousnessLevel,
}

impl fmt::Display for VitalSigns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Respiratory rate: {}/min, SpO2: {}%, On oxygen: {}, Systolic BP: {} mmHg, Pulse: {} bpm, Consciousness: {}, Temperature: {:.1}°C",
            self.respiratory_rate,
            self.oxygen_saturation,
            self.on_oxygen,
            self.systolic_bp,
            self.pulse,
            self.consciousness.name(),
            self.temperature,
        )
    }
}

/// Text formats a vitals document can be read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file extension (`json`, `yaml` or `yml`, any case, no leading dot).
    pub fn from_extension(extension: &str) -> News2Result<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(News2Error::InvalidInput(format!(
                "unsupported vitals document extension {other:?} (expected json, yaml or yml)"
            ))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Parse a vitals document in the given format.
pub fn read_document(text: &str, format: DocumentFormat) -> News2Result<VitalSigns> {
    match format {
        DocumentFormat::Json => read_json(text),
        DocumentFormat::Yaml => read_yaml(text),
    }
}

/// Parse vitals from JSON text.
///
/// # Errors
///
/// Returns [`News2Error::SchemaMismatch`] naming the failing field if the text is not valid
/// JSON, a field has the wrong type, a required field is missing or an unknown key is present.
pub fn read_json(json_text: &str) -> News2Result<VitalSigns> {
    let mut deserializer = serde_json::Deserializer::from_str(json_text);
    let vitals: VitalSigns = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        schema_mismatch(DocumentFormat::Json, err.path().to_string(), err.into_inner())
    })?;
    deserializer
        .end()
        .map_err(|err| schema_mismatch(DocumentFormat::Json, String::new(), err))?;
    Ok(vitals)
}

/// Parse vitals from YAML text.
///
/// # Errors
///
/// Returns [`News2Error::SchemaMismatch`] under the same conditions as [`read_json`].
pub fn read_yaml(yaml_text: &str) -> News2Result<VitalSigns> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        schema_mismatch(DocumentFormat::Yaml, err.path().to_string(), err.into_inner())
    })
}

/// Render vitals as pretty-printed JSON.
pub fn write_json(vitals: &VitalSigns) -> News2Result<String> {
    serde_json::to_string_pretty(vitals).map_err(News2Error::Serialization)
}

fn schema_mismatch(format: DocumentFormat, path: String, source: impl fmt::Display) -> News2Error {
    // serde_path_to_error reports "." for a failure at the document root.
    let path = if path.is_empty() || path == "." {
        "<root>".to_string()
    } else {
        path
    };
    News2Error::SchemaMismatch {
        format: format.name(),
        path,
        message: source.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VitalSigns {
        VitalSigns {
            respiratory_rate: 16,
            oxygen_saturation: 98,
            on_oxygen: false,
            systolic_bp: 120,
            pulse: 80,
            temperature: 37.0,
            consciousness: ConsciousnessLevel::Alert,
        }
    }

    #[test]
    fn test_display_uses_fixed_field_order() {
        assert_eq!(
            sample().to_string(),
            "Respiratory rate: 16/min, SpO2: 98%, On oxygen: false, Systolic BP: 120 mmHg, Pulse: 80 bpm, Consciousness: Alert, Temperature: 37.0°C"
        );
    }

    #[test]
    fn test_display_rounds_temperature_and_names_unknown_level() {
        let vitals = VitalSigns {
            temperature: 38.46,
            on_oxygen: true,
            consciousness: ConsciousnessLevel::from_code(12),
            ..sample()
        };
        let rendered = vitals.to_string();
        assert!(rendered.contains("Temperature: 38.5°C"));
        assert!(rendered.contains("On oxygen: true"));
        assert!(rendered.contains("Consciousness: Unknown"));
    }

    #[test]
    fn test_read_json_accepts_names_letters_and_codes() {
        let json = r#"{
            "respiratory_rate": 18,
            "oxygen_saturation": 90,
            "on_oxygen": true,
            "systolic_bp": 100,
            "pulse": 100,
            "temperature": 36.5,
            "consciousness": "V"
        }"#;
        let vitals = read_json(json).expect("valid document");
        assert_eq!(vitals.consciousness, ConsciousnessLevel::Voice);
        assert!(vitals.on_oxygen);

        let coded = json.replace("\"V\"", "99");
        let vitals = read_json(&coded).expect("numeric code is accepted");
        assert_eq!(vitals.consciousness, ConsciousnessLevel::from_code(99));
        assert_eq!(vitals.consciousness.name(), "Unknown");
    }

    #[test]
    fn test_read_yaml_defaults_on_oxygen_to_false() {
        let yaml = "\
respiratory_rate: 16
oxygen_saturation: 98
systolic_bp: 120
pulse: 80
temperature: 37.0
consciousness: Alert
";
        assert_eq!(read_yaml(yaml).expect("valid document"), sample());
    }

    #[test]
    fn test_read_yaml_rejects_unknown_fields() {
        let yaml = "\
respiratory_rate: 16
oxygen_saturation: 98
systolic_bp: 120
pulse: 80
temperature: 37.0
consciousness: Alert
heart_rhythm: regular
";
        let err = read_yaml(yaml).expect_err("unknown field");
        assert!(matches!(err, News2Error::SchemaMismatch { format: "YAML", .. }));
        assert!(err.to_string().contains("heart_rhythm"));
    }

    #[test]
    fn test_read_json_reports_failing_field_path() {
        let json = r#"{"respiratory_rate": 16, "oxygen_saturation": 98, "systolic_bp": 120,
            "pulse": 80, "temperature": 37.0, "consciousness": "drowsy"}"#;
        match read_json(json).expect_err("bad level") {
            News2Error::SchemaMismatch { format, path, message } => {
                assert_eq!(format, "JSON");
                assert_eq!(path, "consciousness");
                assert!(message.contains("drowsy"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_json_rejects_trailing_content() {
        let json = format!("{} {{}}", write_json(&sample()).unwrap());
        assert!(matches!(
            read_json(&json),
            Err(News2Error::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_malformed_documents_report_root_path() {
        let cases = [
            (read_json("not json"), "JSON"),
            (read_json(&format!("{} {{}}", write_json(&sample()).unwrap())), "JSON"),
            (read_yaml(""), "YAML"),
        ];
        for (result, expected_format) in cases {
            match result.expect_err("malformed document") {
                News2Error::SchemaMismatch { format, path, .. } => {
                    assert_eq!(format, expected_format);
                    assert_eq!(path, "<root>");
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_write_json_round_trips() {
        let vitals = VitalSigns {
            consciousness: ConsciousnessLevel::Pain,
            ..sample()
        };
        let json = write_json(&vitals).unwrap();
        assert!(json.contains("\"consciousness\": \"Pain\""));
        assert_eq!(read_json(&json).unwrap(), vitals);
    }

    #[test]
    fn test_json_round_trip_keeps_consciousness_score() {
        for code in [-1, 0, 3, 4, 5, 99] {
            let vitals = VitalSigns {
                consciousness: ConsciousnessLevel::from_code(code),
                ..sample()
            };
            let back = read_json(&write_json(&vitals).unwrap()).unwrap();
            assert_eq!(back, vitals, "code {code}");
            assert_eq!(
                crate::calculate_score(&back, true),
                crate::calculate_score(&vitals, true),
                "code {code}"
            );
        }
    }

    #[test]
    fn test_document_format_from_extension() {
        assert_eq!(DocumentFormat::from_extension("json").unwrap(), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_extension("YML").unwrap(), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_extension("yaml").unwrap(), DocumentFormat::Yaml);

        let err = DocumentFormat::from_extension("csv").expect_err("unsupported");
        assert!(matches!(err, News2Error::InvalidInput(msg) if msg.contains("csv")));
    }

    #[test]
    fn test_read_document_dispatches_on_format() {
        let json = write_json(&sample()).unwrap();
        assert_eq!(read_document(&json, DocumentFormat::Json).unwrap(), sample());
        // JSON is a subset of YAML.
        assert_eq!(read_document(&json, DocumentFormat::Yaml).unwrap(), sample());
    }
}
