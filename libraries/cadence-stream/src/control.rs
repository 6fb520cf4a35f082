//! Controller-owned playback state
//!
//! These fields are written by the stream orchestration layer once a playback
//! session attaches to a [`StreamDetails`](crate::StreamDetails). Until then
//! every field is `None`, which is distinct from a measured or tracked zero.
//! Writes go through `&mut StreamControl`, so one owner at a time can update them.

use crate::loudness::LoudnessMeasurement;

/// Fields populated during playback
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamControl {
    loudness: Option<LoudnessMeasurement>,
    queue_id: Option<String>,
    seconds_streamed: Option<f64>,
    seconds_skipped: Option<f64>,
    target_loudness: Option<f64>,
}

impl StreamControl {
    /// Loudness measurement, if one was attached
    pub fn loudness(&self) -> Option<&LoudnessMeasurement> {
        self.loudness.as_ref()
    }

    /// Queue the stream is playing in
    pub fn queue_id(&self) -> Option<&str> {
        self.queue_id.as_deref()
    }

    /// Seconds of audio delivered to the player so far
    pub fn seconds_streamed(&self) -> Option<f64> {
        self.seconds_streamed
    }

    /// Seconds skipped at the start (seek before playback)
    pub fn seconds_skipped(&self) -> Option<f64> {
        self.seconds_skipped
    }

    /// Loudness target in LUFS the player normalizes to
    pub fn target_loudness(&self) -> Option<f64> {
        self.target_loudness
    }

    /// Replace the loudness measurement as a whole
    pub fn set_loudness(&mut self, loudness: LoudnessMeasurement) {
        self.loudness = Some(loudness);
    }

    /// Drop the loudness measurement
    pub fn clear_loudness(&mut self) {
        self.loudness = None;
    }

    pub fn attach_queue(&mut self, queue_id: impl Into<String>) {
        self.queue_id = Some(queue_id.into());
    }

    pub fn set_target_loudness(&mut self, lufs: f64) {
        self.target_loudness = Some(lufs);
    }

    pub fn record_streamed(&mut self, seconds: f64) {
        self.seconds_streamed = Some(seconds);
    }

    pub fn record_skipped(&mut self, seconds: f64) {
        self.seconds_skipped = Some(seconds);
    }

    /// Gain in dB to reach the target loudness
    ///
    /// `None` until both a measurement and a target are present.
    pub fn gain_correction(&self) -> Option<f64> {
        self.loudness
            .as_ref()
            .zip(self.target_loudness)
            .map(|(loudness, target)| loudness.gain_to(target))
    }

    /// Nothing has been attached yet
    pub fn is_detached(&self) -> bool {
        *self == Self::default()
    }
}
