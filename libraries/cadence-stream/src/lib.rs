//! Stream details for Cadence
//!
//! This crate provides the metadata envelope handed from the provider
//! integration to the stream orchestration layer:
//! - `StreamDetails`: identity, audio format, descriptive fields and expiry of one stream
//! - `StreamControl`: playback state the orchestration layer fills in
//! - `LoudnessMeasurement`: EBU R128 analysis result attached to a stream
//! - The transmissible form, which leaves provider data and playback bookkeeping out
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────────┐     ┌────────────────────┐
//! │  Provider   │ ──► │ StreamDetails  │ ──► │ Transmissible form │
//! └─────────────┘     └────────────────┘     └────────────────────┘
//!                            │
//!                            ▼
//!                     ┌────────────────┐
//!                     │ StreamControl  │ ◄── orchestration layer
//!                     └────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{AudioFormat, ContentType, SampleRate};
//! use cadence_stream::{LoudnessMeasurement, StreamDetails};
//!
//! let format = AudioFormat::pcm(ContentType::PcmS16le, SampleRate::CD_QUALITY, 16, 2);
//! let mut details = StreamDetails::new("spotify", "abc123", format);
//! assert_eq!(details.uri(), "spotify://track/abc123");
//!
//! details.control_mut().attach_queue("living-room");
//! details
//!     .control_mut()
//!     .set_loudness(LoudnessMeasurement::new(-14.0, -1.0, 7.0, -24.0).unwrap());
//!
//! let form = details.to_transmissible_form();
//! assert!(form.get("queue_id").is_none());
//! assert_eq!(form["loudness"]["integrated"], -14.0);
//!
//! let decoded = StreamDetails::from_transmissible_form(form).unwrap();
//! assert_eq!(decoded.control().queue_id(), None);
//! ```

#![deny(unsafe_code)]

mod config;
mod control;
mod details;
mod error;
mod loudness;
mod wire;

pub use config::{StreamSettings, DEFAULT_CONFIG_FILE, MAX_EXPIRY_TTL_SECS};
pub use control::StreamControl;
pub use details::{StreamDetails, DEFAULT_EXPIRY_TTL_SECS};
pub use error::{Result, StreamError};
pub use loudness::{LoudnessMeasurement, EBU_R128_BROADCAST_LUFS, EBU_R128_STREAMING_LUFS};
pub use wire::INTERNAL_FIELDS;
