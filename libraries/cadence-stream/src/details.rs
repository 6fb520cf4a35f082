//! Stream details
//!
//! A [`StreamDetails`] describes one item about to be streamed. The provider
//! integration builds it when resolving a stream. The orchestration layer
//! reads it to open the transport and fills in [`StreamControl`] while the
//! stream plays.
//!
//! Note that the provider/item id of the stream can differ from the media item
//! the user picked (track linking), the details only describe what is streamed.

use crate::config::StreamSettings;
use crate::control::StreamControl;
use crate::loudness::LoudnessMeasurement;
use cadence_core::{AudioFormat, MediaType};
use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use serde_json::Value;
use std::fmt;

/// Seconds a freshly resolved stream stays valid
pub const DEFAULT_EXPIRY_TTL_SECS: u64 = 3600;

/// Expiry instants are kept at this many fractional digits (milliseconds)
pub(crate) const EXPIRY_SUBSEC_DIGITS: u16 = 3;

/// Resolved description of one item about to be streamed
///
/// Identity and descriptive fields are fixed at construction. Build a new
/// value to change them. Playback state lives in [`StreamControl`].
#[derive(Debug, Clone, PartialEq)]
pub struct StreamDetails {
    pub(crate) provider: String,
    pub(crate) item_id: String,
    pub(crate) audio_format: AudioFormat,
    pub(crate) media_type: MediaType,

    /// Radio streams can set this
    pub(crate) stream_title: Option<String>,
    /// Whole seconds
    pub(crate) duration: Option<u64>,
    /// Total size in bytes
    pub(crate) size: Option<u64>,
    pub(crate) expires: DateTime<Utc>,
    /// Provider-private payload, never transmitted
    pub(crate) data: Option<Value>,
    /// Url or path the transcoder can read directly
    pub(crate) direct: Option<String>,
    pub(crate) can_seek: bool,

    pub(crate) control: StreamControl,
}

impl StreamDetails {
    /// Create stream details valid for [`DEFAULT_EXPIRY_TTL_SECS`]
    ///
    /// The expiry is computed from the current time on every call.
    pub fn new(
        provider: impl Into<String>,
        item_id: impl Into<String>,
        audio_format: AudioFormat,
    ) -> Self {
        Self::with_ttl(provider, item_id, audio_format, DEFAULT_EXPIRY_TTL_SECS)
    }

    /// Create stream details using the configured expiry TTL
    pub fn with_settings(
        provider: impl Into<String>,
        item_id: impl Into<String>,
        audio_format: AudioFormat,
        settings: &StreamSettings,
    ) -> Self {
        Self::with_ttl(provider, item_id, audio_format, settings.expiry_ttl_secs)
    }

    fn with_ttl(
        provider: impl Into<String>,
        item_id: impl Into<String>,
        audio_format: AudioFormat,
        ttl_secs: u64,
    ) -> Self {
        Self {
            provider: provider.into(),
            item_id: item_id.into(),
            audio_format,
            media_type: MediaType::default(),
            stream_title: None,
            duration: None,
            size: None,
            expires: default_expiry(ttl_secs),
            data: None,
            direct: None,
            can_seek: true,
            control: StreamControl::default(),
        }
    }

    #[must_use]
    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = media_type;
        self
    }

    #[must_use]
    pub fn with_stream_title(mut self, title: impl Into<String>) -> Self {
        self.stream_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.duration = Some(seconds);
        self
    }

    #[must_use]
    pub fn with_size(mut self, bytes: u64) -> Self {
        self.size = Some(bytes);
        self
    }

    /// Override the expiry instant (kept at millisecond precision)
    #[must_use]
    pub fn with_expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = expires.trunc_subsecs(EXPIRY_SUBSEC_DIGITS);
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn with_direct(mut self, direct: impl Into<String>) -> Self {
        self.direct = Some(direct.into());
        self
    }

    #[must_use]
    pub fn with_can_seek(mut self, can_seek: bool) -> Self {
        self.can_seek = can_seek;
        self
    }

    /// Uri of the streamed item: `{provider}://{media_type}/{item_id}`
    ///
    /// Computed on every call.
    pub fn uri(&self) -> String {
        format!("{}://{}/{}", self.provider, self.media_type, self.item_id)
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn audio_format(&self) -> &AudioFormat {
        &self.audio_format
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn stream_title(&self) -> Option<&str> {
        self.stream_title.as_deref()
    }

    /// Duration in whole seconds
    pub fn duration(&self) -> Option<u64> {
        self.duration
    }

    /// Total size in bytes
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Provider-private payload
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn direct(&self) -> Option<&str> {
        self.direct.as_deref()
    }

    /// Whether the underlying transport supports seeking
    pub fn can_seek(&self) -> bool {
        self.can_seek
    }

    /// Instant after which the details must be resolved again
    pub fn expires(&self) -> DateTime<Utc> {
        self.expires
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Expired strictly after the expiry instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires
    }

    /// Validity left at `now`, zero once expired
    pub fn time_remaining_at(&self, now: DateTime<Utc>) -> TimeDelta {
        (self.expires - now).max(TimeDelta::zero())
    }

    /// Loudness measurement attached by the orchestration layer
    pub fn loudness(&self) -> Option<&LoudnessMeasurement> {
        self.control.loudness()
    }

    pub fn control(&self) -> &StreamControl {
        &self.control
    }

    /// Write access for the playback session that owns this stream
    pub fn control_mut(&mut self) -> &mut StreamControl {
        &mut self.control
    }
}

impl fmt::Display for StreamDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri())
    }
}

pub(crate) fn default_expiry(ttl_secs: u64) -> DateTime<Utc> {
    let ttl = i64::try_from(ttl_secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(TimeDelta::MAX);
    Utc::now()
        .checked_add_signed(ttl)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
        .trunc_subsecs(EXPIRY_SUBSEC_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::{ContentType, SampleRate};

    fn pcm() -> AudioFormat {
        AudioFormat::pcm(ContentType::PcmS16le, SampleRate::CD_QUALITY, 16, 2)
    }

    #[test]
    fn uri_with_default_media_type() {
        let details = StreamDetails::new("spotify", "abc123", pcm());
        assert_eq!(details.uri(), "spotify://track/abc123");
        assert_eq!(details.to_string(), "spotify://track/abc123");
    }

    #[test]
    fn uri_follows_media_type() {
        let details =
            StreamDetails::new("tunein", "s1234", pcm()).with_media_type(MediaType::Radio);
        assert_eq!(details.uri(), "tunein://radio/s1234");
    }

    #[test]
    fn uri_is_stable_across_calls_and_clones() {
        let details = StreamDetails::new("filesystem", "music/a.flac", pcm());
        let cloned = details.clone();
        assert_eq!(details.uri(), details.uri());
        assert_eq!(details.uri(), cloned.uri());
    }

    #[test]
    fn defaults() {
        let details = StreamDetails::new("spotify", "abc123", pcm());
        assert_eq!(details.media_type(), MediaType::Track);
        assert!(details.can_seek());
        assert_eq!(details.stream_title(), None);
        assert_eq!(details.duration(), None);
        assert_eq!(details.size(), None);
        assert_eq!(details.data(), None);
        assert_eq!(details.direct(), None);
        assert!(details.control().is_detached());
    }

    #[test]
    fn default_expiry_is_about_an_hour_out() {
        let before = Utc::now();
        let details = StreamDetails::new("spotify", "abc123", pcm());
        let after = Utc::now();

        assert!(details.expires() > before);
        assert!(details.expires() >= before + TimeDelta::seconds(3599));
        assert!(details.expires() <= after + TimeDelta::seconds(3600));
    }

    #[test]
    fn default_expiry_is_computed_per_construction() {
        let first = StreamDetails::new("spotify", "a", pcm());
        std::thread::sleep(std::time::Duration::from_millis(20));
        let second = StreamDetails::new("spotify", "b", pcm());
        assert!(second.expires() > first.expires());
    }

    #[test]
    fn settings_ttl_is_used() {
        let settings = StreamSettings {
            expiry_ttl_secs: 60,
        };
        let before = Utc::now();
        let details = StreamDetails::with_settings("spotify", "abc123", pcm(), &settings);
        assert!(details.expires() <= before + TimeDelta::seconds(61));
        assert!(details.expires() > before + TimeDelta::seconds(58));
    }

    #[test]
    fn expiry_checks_are_strict() {
        let expires = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let details = StreamDetails::new("spotify", "abc123", pcm()).with_expires(expires);

        assert!(!details.is_expired_at(expires));
        assert!(details.is_expired_at(expires + TimeDelta::milliseconds(1)));
        assert_eq!(
            details.time_remaining_at(expires - TimeDelta::seconds(30)),
            TimeDelta::seconds(30)
        );
        assert_eq!(
            details.time_remaining_at(expires + TimeDelta::seconds(30)),
            TimeDelta::zero()
        );
    }

    #[test]
    fn explicit_expiry_is_truncated_to_millis() {
        let expires = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        let details = StreamDetails::new("spotify", "abc123", pcm()).with_expires(expires);
        assert_eq!(details.expires().timestamp_subsec_nanos(), 123_000_000);
    }

    #[test]
    fn fresh_details_are_not_expired() {
        let details = StreamDetails::new("spotify", "abc123", pcm());
        assert!(!details.is_expired());
    }

    #[test]
    fn control_mut_updates_playback_state() {
        let mut details = StreamDetails::new("spotify", "abc123", pcm());
        details.control_mut().attach_queue("living-room");
        details
            .control_mut()
            .set_loudness(LoudnessMeasurement::new(-14.0, -1.0, 7.0, -24.0).unwrap());

        assert_eq!(details.control().queue_id(), Some("living-room"));
        assert_eq!(
            details.loudness(),
            Some(&LoudnessMeasurement::new(-14.0, -1.0, 7.0, -24.0).unwrap())
        );
    }

    #[test]
    fn huge_ttl_saturates() {
        let expires = default_expiry(u64::MAX);
        assert!(expires > Utc::now());
        assert_eq!(expires.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn unvalidated_settings_keep_millisecond_expiry() {
        let settings = StreamSettings {
            expiry_ttl_secs: u64::MAX,
        };
        let details = StreamDetails::with_settings("spotify", "abc123", pcm(), &settings);
        assert_eq!(details.expires().timestamp_subsec_nanos() % 1_000_000, 0);
        assert_eq!(
            details.expires(),
            DateTime::<Utc>::MAX_UTC.trunc_subsecs(EXPIRY_SUBSEC_DIGITS)
        );
    }
}
