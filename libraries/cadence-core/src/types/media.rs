/// Media type of a streamable item
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of item a provider resolves, used as the middle segment of a uri
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Artist,
    Album,
    #[default]
    Track,
    Playlist,
    Radio,
    Folder,
    Unknown,
}

impl MediaType {
    /// All variants, in declaration order
    pub const ALL: [Self; 7] = [
        Self::Artist,
        Self::Album,
        Self::Track,
        Self::Playlist,
        Self::Radio,
        Self::Folder,
        Self::Unknown,
    ];

    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Track => "track",
            Self::Playlist => "playlist",
            Self::Radio => "radio",
            Self::Folder => "folder",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for MediaType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|media_type| media_type.as_str() == s)
            .ok_or_else(|| CoreError::unknown_variant("media type", s))
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
