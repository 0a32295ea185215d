// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the npk-bridge project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! NPK frame parsing
//!
//! This module converts raw sensor frames into [`NpkReading`] values. A
//! frame is a short ASCII payload shaped like `"<N>,<P>,<K>."` (for
//! example `"1,0,0."`); the trailing period is a quirk of the sensor
//! firmware and is stripped from the potassium field.
//!
//! Parsing is a pure function of the input bytes. Frames that decode
//! cleanly but carry no usable data (empty payload, wrong field count)
//! are not errors: they map to a reading in which every field is the
//! [`NA`] sentinel. Only an undecodable byte sequence is reported as a
//! [`FrameError`].

use serde::{Deserialize, Serialize};

/// Sentinel value for a missing or unparsable field.
pub const NA: &str = "NA";

/// Error types for frame parsing
#[derive(thiserror::Error, Debug)]
pub enum FrameError {
    #[error("Frame is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// One NPK reading as served on the wire.
///
/// Each field is either a numeric-string taken verbatim from the sensor
/// frame or the literal `"NA"`. Values are deliberately not converted to
/// numbers: the sensor already emits decimal numerals and the bridge
/// passes them through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpkReading {
    /// Nitrogen level reported by the sensor.
    #[serde(rename = "N")]
    pub nitrogen: String,
    /// Phosphorus level reported by the sensor.
    #[serde(rename = "P")]
    pub phosphorus: String,
    /// Potassium level reported by the sensor, with the firmware's
    /// trailing period terminator removed.
    #[serde(rename = "K")]
    pub potassium: String,
}

impl NpkReading {
    /// A reading with every field set to the `"NA"` sentinel.
    ///
    /// Used for frames that carry no data or do not split into exactly
    /// three fields.
    pub fn empty() -> Self {
        Self {
            nitrogen: NA.to_string(),
            phosphorus: NA.to_string(),
            potassium: NA.to_string(),
        }
    }
}

/// Parse one raw sensor frame into an [`NpkReading`].
///
/// The frame is decoded as UTF-8 and trimmed of surrounding whitespace,
/// then split on commas. An empty payload or a field count other than
/// three yields the all-`NA` reading. Empty fields become `"NA"`; all
/// other field values pass through as-is.
///
/// # Errors
///
/// Returns [`FrameError::InvalidUtf8`] if the bytes are not a valid
/// UTF-8 sequence.
pub fn parse_frame(raw: &[u8]) -> Result<NpkReading, FrameError> {
    let text = std::str::from_utf8(raw)?.trim();

    if text.is_empty() {
        return Ok(NpkReading::empty());
    }

    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != 3 {
        return Ok(NpkReading::empty());
    }

    // The sensor terminates the final field with a period.
    let potassium = fields[2].trim_end_matches('.');

    Ok(NpkReading {
        nitrogen: field_or_na(fields[0]),
        phosphorus: field_or_na(fields[1]),
        potassium: field_or_na(potassium),
    })
}

fn field_or_na(field: &str) -> String {
    if field.is_empty() {
        NA.to_string()
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(n: &str, p: &str, k: &str) -> NpkReading {
        NpkReading {
            nitrogen: n.to_string(),
            phosphorus: p.to_string(),
            potassium: k.to_string(),
        }
    }

    #[test]
    fn test_parse_nominal_frame() {
        let parsed = parse_frame(b"1,0,0.").unwrap();
        assert_eq!(parsed, reading("1", "0", "0"));
    }

    #[test]
    fn test_parse_strips_trailing_period_from_potassium_only() {
        let parsed = parse_frame(b"12,34,56.").unwrap();
        assert_eq!(parsed, reading("12", "34", "56"));

        // Periods inside the first two fields are untouched.
        let parsed = parse_frame(b"1.5,2.5,3.5.").unwrap();
        assert_eq!(parsed, reading("1.5", "2.5", "3.5"));
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let parsed = parse_frame(b"  7,3,9.\r\n").unwrap();
        assert_eq!(parsed, reading("7", "3", "9"));
    }

    #[test]
    fn test_empty_frame_is_all_na() {
        assert_eq!(parse_frame(b"").unwrap(), NpkReading::empty());
        assert_eq!(parse_frame(b"   \r\n").unwrap(), NpkReading::empty());
    }

    #[test]
    fn test_too_few_fields_is_all_na() {
        assert_eq!(parse_frame(b"1,2").unwrap(), NpkReading::empty());
    }

    #[test]
    fn test_too_many_fields_is_all_na() {
        assert_eq!(parse_frame(b"1,2,3,4.").unwrap(), NpkReading::empty());
    }

    #[test]
    fn test_empty_field_maps_to_na() {
        let parsed = parse_frame(b",0,0.").unwrap();
        assert_eq!(parsed, reading("NA", "0", "0"));

        // A bare period in the potassium field strips to nothing.
        let parsed = parse_frame(b"1,0,.").unwrap();
        assert_eq!(parsed, reading("1", "0", "NA"));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let result = parse_frame(&[0xff, 0xfe, 0x31, 0x2c, 0x32, 0x2c, 0x33]);
        assert!(matches!(result, Err(FrameError::InvalidUtf8(_))));
    }

    #[test]
    fn test_parsing_is_pure() {
        let frame = b"4,5,6.";
        let first = parse_frame(frame).unwrap();
        let second = parse_frame(frame).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reading_serializes_with_wire_keys() {
        let json = serde_json::to_value(reading("1", "0", "0")).unwrap();
        assert_eq!(json, serde_json::json!({"N": "1", "P": "0", "K": "0"}));
    }
}
