/// Audio encoding types
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sample rate in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleRate(pub u32);

impl SampleRate {
    /// Common sample rates
    pub const CD_QUALITY: Self = Self(44_100);
    pub const DVD_QUALITY: Self = Self(48_000);
    pub const HIGH_RES_88: Self = Self(88_200);
    pub const HIGH_RES_96: Self = Self(96_000);
    pub const HIGH_RES_176: Self = Self(176_400);
    pub const HIGH_RES_192: Self = Self(192_000);

    /// Create a new sample rate
    #[must_use]
    pub fn new(hz: u32) -> Self {
        Self(hz)
    }

    /// Get the sample rate as Hz
    pub fn as_hz(&self) -> u32 {
        self.0
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self::CD_QUALITY
    }
}

/// Container or codec of an audio stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Opus,
    Ogg,
    Flac,
    Mp3,
    Aac,
    Mpeg,
    Alac,
    Dsf,
    Wavpack,
    M4a,
    M4b,
    Wav,
    Aiff,
    Wma,
    Ape,
    /// Raw PCM, signed 16-bit little endian
    #[serde(rename = "s16le")]
    PcmS16le,
    /// Raw PCM, signed 24-bit little endian
    #[serde(rename = "s24le")]
    PcmS24le,
    /// Raw PCM, signed 32-bit little endian
    #[serde(rename = "s32le")]
    PcmS32le,
    /// Raw PCM, 32-bit float little endian
    #[serde(rename = "f32le")]
    PcmF32le,
    /// Raw PCM, 64-bit float little endian
    #[serde(rename = "f64le")]
    PcmF64le,
    #[default]
    Unknown,
}

impl ContentType {
    /// All variants, in declaration order
    pub const ALL: [Self; 21] = [
        Self::Opus,
        Self::Ogg,
        Self::Flac,
        Self::Mp3,
        Self::Aac,
        Self::Mpeg,
        Self::Alac,
        Self::Dsf,
        Self::Wavpack,
        Self::M4a,
        Self::M4b,
        Self::Wav,
        Self::Aiff,
        Self::Wma,
        Self::Ape,
        Self::PcmS16le,
        Self::PcmS24le,
        Self::PcmS32le,
        Self::PcmF32le,
        Self::PcmF64le,
        Self::Unknown,
    ];

    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Opus => "opus",
            Self::Ogg => "ogg",
            Self::Flac => "flac",
            Self::Mp3 => "mp3",
            Self::Aac => "aac",
            Self::Mpeg => "mpeg",
            Self::Alac => "alac",
            Self::Dsf => "dsf",
            Self::Wavpack => "wavpack",
            Self::M4a => "m4a",
            Self::M4b => "m4b",
            Self::Wav => "wav",
            Self::Aiff => "aiff",
            Self::Wma => "wma",
            Self::Ape => "ape",
            Self::PcmS16le => "s16le",
            Self::PcmS24le => "s24le",
            Self::PcmS32le => "s32le",
            Self::PcmF32le => "f32le",
            Self::PcmF64le => "f64le",
            Self::Unknown => "unknown",
        }
    }

    /// Best-effort lookup from a file name, extension or mime type
    ///
    /// Accepts inputs like `"flac"`, `"Song.FLAC"`, `"audio/mpeg"` or
    /// `"pcm_s24le"`. Returns [`ContentType::Unknown`] when nothing matches.
    pub fn try_parse(s: &str) -> Self {
        let lowered = s.trim().to_ascii_lowercase();
        let without_mime = lowered.strip_prefix("audio/").unwrap_or(lowered.as_str());
        let base = without_mime.split(['?', '&', ';']).next().unwrap_or_default();

        // Extension comes last in a file name, so scan segments from the end
        base.rsplit(['.', ','])
            .map(str::trim)
            .filter_map(Self::from_alias)
            .find(|content_type| *content_type != Self::Unknown)
            .unwrap_or(Self::Unknown)
    }

    fn from_alias(s: &str) -> Option<Self> {
        match s {
            "mp4" => Some(Self::M4a),
            "mp4a" => Some(Self::Aac),
            "wv" => Some(Self::Wavpack),
            "x-flac" => Some(Self::Flac),
            "aif" => Some(Self::Aiff),
            _ => s.strip_prefix("pcm_").unwrap_or(s).parse().ok(),
        }
    }

    /// Raw PCM sample data
    pub fn is_pcm(&self) -> bool {
        matches!(
            self,
            Self::PcmS16le | Self::PcmS24le | Self::PcmS32le | Self::PcmF32le | Self::PcmF64le
        )
    }

    /// Lossless encoding (PCM included)
    pub fn is_lossless(&self) -> bool {
        self.is_pcm()
            || matches!(
                self,
                Self::Flac | Self::Alac | Self::Wav | Self::Aiff | Self::Wavpack | Self::Ape | Self::Dsf
            )
    }

    /// Pick the PCM variant for a sample bit depth
    pub fn from_bit_depth(bit_depth: u16, floating_point: bool) -> Self {
        match (bit_depth, floating_point) {
            (24, _) => Self::PcmS24le,
            (32, true) => Self::PcmF32le,
            (32, false) => Self::PcmS32le,
            (64, _) => Self::PcmF64le,
            _ => Self::PcmS16le,
        }
    }
}

impl FromStr for ContentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|content_type| content_type.as_str() == s)
            .ok_or_else(|| CoreError::unknown_variant("content type", s))
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audio format of a stream
///
/// Every field has a default, so a partially specified object on the wire
/// still deserializes. An unrecognized `content_type` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioFormat {
    /// Container or codec
    pub content_type: ContentType,

    /// Sample rate
    pub sample_rate: SampleRate,

    /// Bits per sample
    pub bit_depth: u16,

    /// Number of channels (1 = mono, 2 = stereo, etc.)
    pub channels: u16,

    /// Bit rate in kbps, only meaningful for lossy content
    pub bit_rate: u32,
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self {
            content_type: ContentType::Unknown,
            sample_rate: SampleRate::CD_QUALITY,
            bit_depth: 16,
            channels: 2,
            bit_rate: 320,
        }
    }
}

impl AudioFormat {
    /// Create a format with default sample layout for a content type
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            ..Self::default()
        }
    }

    /// Create a fully specified format
    pub fn pcm(
        content_type: ContentType,
        sample_rate: SampleRate,
        bit_depth: u16,
        channels: u16,
    ) -> Self {
        Self {
            content_type,
            sample_rate,
            bit_depth,
            channels,
            ..Self::default()
        }
    }

    /// Format string as understood by the transcoder
    pub fn output_format_str(&self) -> String {
        if self.content_type.is_pcm() {
            format!(
                "pcm;codec=pcm;rate={};bitrate={};channels={}",
                self.sample_rate.as_hz(),
                self.bit_depth,
                self.channels
            )
        } else {
            self.content_type.as_str().to_string()
        }
    }

    /// Relative quality score, higher is better
    ///
    /// Lossless formats score on resolution, lossy ones on bit rate with a
    /// small bonus for the better codecs.
    pub fn quality(&self) -> u32 {
        if self.content_type.is_lossless() {
            return self.sample_rate.as_hz() / 1000 + u32::from(self.bit_depth);
        }
        let mut score = self.bit_rate / 100;
        if matches!(self.content_type, ContentType::Aac | ContentType::Ogg) {
            score += 1;
        }
        score
    }

    /// Bytes per second of raw PCM in this layout
    pub fn pcm_sample_size(&self) -> u64 {
        u64::from(self.sample_rate.as_hz())
            * u64::from(self.bit_depth / 8)
            * u64::from(self.channels)
    }
}
