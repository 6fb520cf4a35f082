//! EBU R128 loudness measurement attached to a stream
//!
//! The values come from an external analyzer. This module only carries them:
//! - Integrated loudness (LUFS) - the overall perceived loudness
//! - True peak - the maximum inter-sample peak level
//! - Loudness range (LRA) - the variation in loudness
//! - Threshold - the gating threshold the analyzer used

use crate::error::{Result, StreamError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// EBU R128 broadcast reference level (-23 LUFS)
pub const EBU_R128_BROADCAST_LUFS: f64 = -23.0;

/// EBU R128 streaming reference level (-14 LUFS, common for streaming platforms)
pub const EBU_R128_STREAMING_LUFS: f64 = -14.0;

/// One EBU R128 analysis result for a stream
///
/// Immutable once built. A newer analysis replaces the whole value.
/// Every field is finite, so the value always survives a JSON round trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMeasurement")]
pub struct LoudnessMeasurement {
    integrated: f64,
    true_peak: f64,
    lra: f64,
    threshold: f64,
}

#[derive(Deserialize)]
struct RawMeasurement {
    integrated: f64,
    true_peak: f64,
    lra: f64,
    threshold: f64,
}

impl TryFrom<RawMeasurement> for LoudnessMeasurement {
    type Error = StreamError;

    fn try_from(raw: RawMeasurement) -> Result<Self> {
        Self::new(raw.integrated, raw.true_peak, raw.lra, raw.threshold)
    }
}

impl LoudnessMeasurement {
    /// Create a measurement from analyzer output
    ///
    /// Analyzers report silence as `-inf` LUFS. Such a stream has no usable
    /// measurement, so any non-finite field is rejected.
    pub fn new(integrated: f64, true_peak: f64, lra: f64, threshold: f64) -> Result<Self> {
        for (name, value) in [
            ("integrated", integrated),
            ("true_peak", true_peak),
            ("lra", lra),
            ("threshold", threshold),
        ] {
            if !value.is_finite() {
                return Err(StreamError::malformed(format!(
                    "loudness {name} is not finite: {value}"
                )));
            }
        }

        Ok(Self {
            integrated,
            true_peak,
            lra,
            threshold,
        })
    }

    /// Integrated loudness in LUFS
    pub fn integrated(&self) -> f64 {
        self.integrated
    }

    /// True peak level
    pub fn true_peak(&self) -> f64 {
        self.true_peak
    }

    /// Loudness range in LU
    pub fn lra(&self) -> f64 {
        self.lra
    }

    /// Gating threshold used for the measurement
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Gain in dB that brings this stream to `target_lufs`, rounded to 0.01 dB
    pub fn gain_to(&self, target_lufs: f64) -> f64 {
        ((target_lufs - self.integrated) * 100.0).round() / 100.0
    }
}

impl fmt::Display for LoudnessMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loudness: {:.1} LUFS, True Peak: {:.1} dBTP, Range: {:.1} LU, Threshold: {:.1} LUFS",
            self.integrated, self.true_peak, self.lra, self.threshold
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(integrated: f64, true_peak: f64, lra: f64, threshold: f64) -> LoudnessMeasurement {
        LoudnessMeasurement::new(integrated, true_peak, lra, threshold).unwrap()
    }

    fn reference() -> LoudnessMeasurement {
        measure(-14.0, -1.0, 7.0, -24.0)
    }

    #[test]
    fn equal_when_all_fields_match() {
        assert_eq!(reference(), measure(-14.0, -1.0, 7.0, -24.0));
    }

    #[test]
    fn unequal_when_any_field_differs() {
        let base = reference();
        assert_ne!(base, measure(-13.9, -1.0, 7.0, -24.0));
        assert_ne!(base, measure(-14.0, -1.1, 7.0, -24.0));
        assert_ne!(base, measure(-14.0, -1.0, 7.5, -24.0));
        assert_ne!(base, measure(-14.0, -1.0, 7.0, -24.5));
    }

    #[test]
    fn serializes_field_for_field() {
        let json = serde_json::to_value(reference()).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(json["integrated"], -14.0);
        assert_eq!(json["true_peak"], -1.0);
        assert_eq!(json["lra"], 7.0);
        assert_eq!(json["threshold"], -24.0);
    }

    #[test]
    fn deserialize_requires_all_four_fields() {
        let result: std::result::Result<LoudnessMeasurement, _> =
            serde_json::from_str(r#"{"integrated": -14.0, "true_peak": -1.0, "lra": 7.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn gain_to_streaming_reference() {
        let loud = measure(-8.0, 0.5, 4.0, -18.0);
        assert_eq!(loud.gain_to(EBU_R128_STREAMING_LUFS), -6.0);

        let quiet = measure(-20.333, -3.0, 9.0, -30.0);
        assert_eq!(quiet.gain_to(EBU_R128_STREAMING_LUFS), 6.33);
    }

    #[test]
    fn silence_is_not_a_measurement() {
        let err = LoudnessMeasurement::new(f64::NEG_INFINITY, f64::NEG_INFINITY, 0.0, -70.0)
            .unwrap_err();
        assert!(matches!(err, StreamError::MalformedInput(ref msg) if msg.contains("integrated")));
    }

    #[test]
    fn rejects_nan_in_any_field() {
        assert!(LoudnessMeasurement::new(-14.0, f64::NAN, 7.0, -24.0).is_err());
        assert!(LoudnessMeasurement::new(-14.0, -1.0, f64::INFINITY, -24.0).is_err());
        assert!(LoudnessMeasurement::new(-14.0, -1.0, 7.0, f64::NAN).is_err());
    }

    #[test]
    fn deserialize_rejects_null_fields() {
        let result: std::result::Result<LoudnessMeasurement, _> = serde_json::from_str(
            r#"{"integrated": null, "true_peak": null, "lra": 0.0, "threshold": -70.0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_round_trips() {
        let json = serde_json::to_string(&reference()).unwrap();
        let back: LoudnessMeasurement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reference());
    }
}
