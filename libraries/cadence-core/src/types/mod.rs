mod audio;
mod media;

pub use audio::{AudioFormat, ContentType, SampleRate};
pub use media::MediaType;
