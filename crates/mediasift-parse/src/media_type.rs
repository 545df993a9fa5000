use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use phf::phf_map;
use serde::{Deserialize, Serialize};

/// The category a media name is classified into.
///
/// `Unknown` and `Ambiguous` are sentinel outcomes of classification; no
/// detector ever produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Tv,
    Movie,
    Music,
    AudioBook,
    Ebook,
    Unknown,
    Ambiguous,
}

impl MediaType {
    /// The types that have a detector, in detection order.
    pub const CONCRETE: [MediaType; 5] = [
        MediaType::Tv,
        MediaType::Movie,
        MediaType::Music,
        MediaType::AudioBook,
        MediaType::Ebook,
    ];

    /// Whether this is a real media type rather than a classification sentinel.
    pub fn is_concrete(self) -> bool {
        !matches!(self, MediaType::Unknown | MediaType::Ambiguous)
    }

    /// Human-readable label, e.g. "tv show" or "audio book".
    pub fn label(self) -> &'static str {
        match self {
            MediaType::Tv => "tv show",
            MediaType::Movie => "movie",
            MediaType::Music => "music",
            MediaType::AudioBook => "audio book",
            MediaType::Ebook => "ebook",
            MediaType::Ambiguous => "ambiguous",
            MediaType::Unknown => "unknown",
        }
    }

    /// Machine name used in config files and serialized output.
    pub fn name(self) -> &'static str {
        match self {
            MediaType::Tv => "tv",
            MediaType::Movie => "movie",
            MediaType::Music => "music",
            MediaType::AudioBook => "audio_book",
            MediaType::Ebook => "ebook",
            MediaType::Unknown => "unknown",
            MediaType::Ambiguous => "ambiguous",
        }
    }

    /// The candidate-set bit for this type. Sentinels map to the empty set.
    pub fn flag(self) -> MediaTypeSet {
        match self {
            MediaType::Tv => MediaTypeSet::TV,
            MediaType::Movie => MediaTypeSet::MOVIE,
            MediaType::Music => MediaTypeSet::MUSIC,
            MediaType::AudioBook => MediaTypeSet::AUDIO_BOOK,
            MediaType::Ebook => MediaTypeSet::EBOOK,
            MediaType::Unknown | MediaType::Ambiguous => MediaTypeSet::empty(),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepted spellings, lowercase. Both machine names and labels resolve.
static NAMES: phf::Map<&'static str, MediaType> = phf_map! {
    "tv" => MediaType::Tv,
    "tv show" => MediaType::Tv,
    "movie" => MediaType::Movie,
    "music" => MediaType::Music,
    "audio_book" => MediaType::AudioBook,
    "audio book" => MediaType::AudioBook,
    "ebook" => MediaType::Ebook,
    "unknown" => MediaType::Unknown,
    "ambiguous" => MediaType::Ambiguous,
};

/// Returned when a string names no media type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized media type: {0:?}")]
pub struct ParseMediaTypeError(pub String);

impl FromStr for MediaType {
    type Err = ParseMediaTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ParseMediaTypeError(s.to_string()))
    }
}

bitflags! {
    /// A set of concrete media types, e.g. the detectors that matched a name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MediaTypeSet: u8 {
        const TV = 0b0000_0001;
        const MOVIE = 0b0000_0010;
        const MUSIC = 0b0000_0100;
        const AUDIO_BOOK = 0b0000_1000;
        const EBOOK = 0b0001_0000;
    }
}

impl MediaTypeSet {
    /// Media types in the set, in [`MediaType::CONCRETE`] order.
    pub fn media_types(self) -> impl Iterator<Item = MediaType> {
        MediaType::CONCRETE
            .into_iter()
            .filter(move |t| self.contains(t.flag()))
    }

    /// Number of types in the set.
    pub fn count(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// The single member, if the set holds exactly one type.
    pub fn single(self) -> Option<MediaType> {
        if self.count() == 1 {
            self.media_types().next()
        } else {
            None
        }
    }
}

impl FromIterator<MediaType> for MediaTypeSet {
    fn from_iter<I: IntoIterator<Item = MediaType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(MediaTypeSet::empty(), |set, t| set | t.flag())
    }
}

impl fmt::Display for MediaTypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, t) in self.media_types().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(t.name())?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(MediaType::Tv.label(), "tv show");
        assert_eq!(MediaType::Movie.label(), "movie");
        assert_eq!(MediaType::Music.label(), "music");
        assert_eq!(MediaType::AudioBook.label(), "audio book");
        assert_eq!(MediaType::Ebook.label(), "ebook");
        assert_eq!(MediaType::Ambiguous.label(), "ambiguous");
        assert_eq!(MediaType::Unknown.label(), "unknown");
        assert_eq!(MediaType::AudioBook.to_string(), "audio book");
    }

    #[test]
    fn test_from_str_accepts_names_and_labels() {
        assert_eq!("tv".parse::<MediaType>(), Ok(MediaType::Tv));
        assert_eq!("TV Show".parse::<MediaType>(), Ok(MediaType::Tv));
        assert_eq!("audio_book".parse::<MediaType>(), Ok(MediaType::AudioBook));
        assert_eq!(" audio book ".parse::<MediaType>(), Ok(MediaType::AudioBook));
        assert_eq!("ambiguous".parse::<MediaType>(), Ok(MediaType::Ambiguous));
        assert!("podcast".parse::<MediaType>().is_err());
        assert!("".parse::<MediaType>().is_err());
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for t in MediaType::CONCRETE {
            assert_eq!(t.name().parse::<MediaType>(), Ok(t));
            assert_eq!(t.label().parse::<MediaType>(), Ok(t));
        }
    }

    #[test]
    fn test_sentinels_have_no_flag() {
        assert!(MediaType::Unknown.flag().is_empty());
        assert!(MediaType::Ambiguous.flag().is_empty());
        assert!(!MediaType::Unknown.is_concrete());
        assert!(MediaType::CONCRETE.iter().all(|t| t.is_concrete()));
    }

    #[test]
    fn test_set_iteration_order() {
        let set: MediaTypeSet = [MediaType::Music, MediaType::Tv, MediaType::Unknown]
            .into_iter()
            .collect();
        let types: Vec<_> = set.media_types().collect();
        assert_eq!(types, vec![MediaType::Tv, MediaType::Music]);
        assert_eq!(set.count(), 2);
        assert_eq!(set.single(), None);
        assert_eq!(set.to_string(), "{tv, music}");
    }

    #[test]
    fn test_single() {
        assert_eq!(MediaTypeSet::MOVIE.single(), Some(MediaType::Movie));
        assert_eq!(MediaTypeSet::empty().single(), None);
        assert_eq!(MediaTypeSet::empty().to_string(), "{}");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&MediaType::AudioBook).unwrap();
        assert_eq!(json, "\"audio_book\"");
    }
}
