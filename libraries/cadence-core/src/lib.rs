//! Cadence Core
//!
//! Shared vocabulary for the Cadence stream metadata model.
//!
//! The stream model does not define what a "track" or a "FLAC stream" is; it
//! consumes these types from here:
//! - **Media types**: `MediaType`, the kind of item a uri points at
//! - **Audio formats**: `ContentType` and `AudioFormat`, the encoding of a stream
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{AudioFormat, ContentType, MediaType, SampleRate};
//!
//! let format = AudioFormat::pcm(ContentType::PcmS16le, SampleRate::CD_QUALITY, 16, 2);
//! assert!(format.content_type.is_lossless());
//! assert_eq!(MediaType::default().as_str(), "track");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{AudioFormat, ContentType, MediaType, SampleRate};
