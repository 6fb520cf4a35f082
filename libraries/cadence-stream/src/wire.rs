//! Transmissible form of [`StreamDetails`]
//!
//! The wire object carries identity, descriptive fields and the loudness
//! measurement. Provider-private `data` and the playback bookkeeping
//! (`queue_id`, `seconds_streamed`, `seconds_skipped`, `target_loudness`)
//! never leave the process: they are not written, and when an incoming object
//! carries them anyway they are ignored.
//!
//! ```text
//! {
//!   "provider": "spotify", "item_id": "abc123",
//!   "audio_format": { "content_type": "s16le", "sample_rate": 44100, ... },
//!   "media_type": "track", "stream_title": null, "duration": 215,
//!   "size": null, "expires": 1700003600.25, "direct": null,
//!   "can_seek": true, "loudness": { "integrated": -14.0, ... }
//! }
//! ```

use crate::control::StreamControl;
use crate::details::{default_expiry, StreamDetails, DEFAULT_EXPIRY_TTL_SECS};
use crate::error::{Result, StreamError};
use crate::loudness::LoudnessMeasurement;
use cadence_core::{AudioFormat, MediaType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keys that are never part of the transmissible form
pub const INTERNAL_FIELDS: [&str; 5] = [
    "data",
    "queue_id",
    "seconds_streamed",
    "seconds_skipped",
    "target_loudness",
];

#[derive(Serialize)]
struct OutgoingForm<'a> {
    provider: &'a str,
    item_id: &'a str,
    audio_format: &'a AudioFormat,
    media_type: MediaType,
    stream_title: Option<&'a str>,
    duration: Option<u64>,
    size: Option<u64>,
    expires: f64,
    direct: Option<&'a str>,
    can_seek: bool,
    loudness: Option<&'a LoudnessMeasurement>,
}

#[derive(Deserialize)]
struct IncomingForm {
    provider: String,
    item_id: String,
    audio_format: AudioFormat,
    #[serde(default)]
    media_type: MediaType,
    #[serde(default)]
    stream_title: Option<String>,
    #[serde(default)]
    duration: Option<u64>,
    #[serde(default)]
    size: Option<u64>,
    #[serde(default)]
    expires: Option<f64>,
    #[serde(default)]
    direct: Option<String>,
    #[serde(default = "default_can_seek")]
    can_seek: bool,
    #[serde(default)]
    loudness: Option<LoudnessMeasurement>,
}

fn default_can_seek() -> bool {
    true
}

impl StreamDetails {
    /// Serialize for transmission or storage, without internal fields
    pub fn to_transmissible_form(&self) -> Value {
        let form = OutgoingForm {
            provider: &self.provider,
            item_id: &self.item_id,
            audio_format: &self.audio_format,
            media_type: self.media_type,
            stream_title: self.stream_title.as_deref(),
            duration: self.duration,
            size: self.size,
            expires: to_epoch_seconds(self.expires),
            direct: self.direct.as_deref(),
            can_seek: self.can_seek,
            loudness: self.control.loudness(),
        };

        // Keys are plain strings and every float is finite: `expires` comes
        // from integer millis and loudness is checked on construction. Under
        // those conditions serde_json has no error path.
        serde_json::to_value(form).unwrap_or(Value::Null)
    }

    /// Rebuild stream details from their transmissible form
    ///
    /// `provider`, `item_id` and `audio_format` are mandatory. Internal fields
    /// come back absent whatever the input holds.
    pub fn from_transmissible_form(value: Value) -> Result<Self> {
        let form: IncomingForm = serde_json::from_value(value).map_err(|e| {
            tracing::debug!(error = %e, "rejected stream details");
            StreamError::from(e)
        })?;

        let expires = match form.expires {
            Some(seconds) => from_epoch_seconds(seconds)?,
            None => default_expiry(DEFAULT_EXPIRY_TTL_SECS),
        };

        let mut control = StreamControl::default();
        if let Some(loudness) = form.loudness {
            control.set_loudness(loudness);
        }

        let details = Self {
            provider: form.provider,
            item_id: form.item_id,
            audio_format: form.audio_format,
            media_type: form.media_type,
            stream_title: form.stream_title,
            duration: form.duration,
            size: form.size,
            expires,
            data: None,
            direct: form.direct,
            can_seek: form.can_seek,
            control,
        };

        tracing::debug!(uri = %details, "accepted stream details");
        Ok(details)
    }

    /// Transmissible form as a JSON string
    pub fn to_json(&self) -> String {
        self.to_transmissible_form().to_string()
    }

    /// Parse stream details from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_transmissible_form(value)
    }
}

/// Epoch seconds with millisecond resolution
pub(crate) fn to_epoch_seconds(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / 1000.0
}

pub(crate) fn from_epoch_seconds(seconds: f64) -> Result<DateTime<Utc>> {
    let millis = (seconds * 1000.0).round();
    if !(i64::MIN as f64..=i64::MAX as f64).contains(&millis) {
        return Err(StreamError::malformed(format!(
            "expires out of range: {seconds}"
        )));
    }

    DateTime::from_timestamp_millis(millis as i64)
        .ok_or_else(|| StreamError::malformed(format!("expires out of range: {seconds}")))
}
