use serde::{Deserialize, Serialize};

use crate::media_type::MediaType;

/// Structured metadata extracted from a media name.
///
/// Text fields are the raw matched substrings: separators captured inside
/// the span are kept verbatim (`"Archer.2009"`, not `"Archer 2009"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaDetails {
    Tv {
        title: String,
        season: u64,
        /// Absent for season-only names like `Show.S06.Special`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        episode: Option<u64>,
    },
    Movie {
        title: String,
        year: u64,
    },
    Music {
        artist: String,
        album: String,
        year: u64,
    },
}

impl MediaDetails {
    /// The media type these details belong to.
    pub fn media_type(&self) -> MediaType {
        match self {
            MediaDetails::Tv { .. } => MediaType::Tv,
            MediaDetails::Movie { .. } => MediaType::Movie,
            MediaDetails::Music { .. } => MediaType::Music,
        }
    }

    /// Title of a show or movie. Music releases have none.
    pub fn title(&self) -> Option<&str> {
        match self {
            MediaDetails::Tv { title, .. } | MediaDetails::Movie { title, .. } => Some(title.as_str()),
            MediaDetails::Music { .. } => None,
        }
    }

    /// Release year, where the name carries one.
    pub fn year(&self) -> Option<u64> {
        match self {
            MediaDetails::Movie { year, .. } | MediaDetails::Music { year, .. } => Some(*year),
            MediaDetails::Tv { .. } => None,
        }
    }
}
