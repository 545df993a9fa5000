//! Per-type detectors.
//!
//! Each detector is a pure function from a name to the details it can
//! extract, or `None`. Detectors are independent of each other; conflicts
//! between them are resolved by the classifier, not here.

pub mod movie;
pub mod music;
pub mod tv;

use crate::details::MediaDetails;
use crate::media_type::{MediaType, MediaTypeSet};

/// Signature shared by every detector.
pub type DetectFn = fn(&str) -> Option<MediaDetails>;

/// One detector per concrete media type, in [`MediaType::CONCRETE`] order.
pub static DETECTORS: [(MediaType, DetectFn); 5] = [
    (MediaType::Tv, tv::detect),
    (MediaType::Movie, movie::detect),
    (MediaType::Music, music::detect),
    (MediaType::AudioBook, audio_book),
    (MediaType::Ebook, ebook),
];

/// Audio books have no name pattern yet.
fn audio_book(_name: &str) -> Option<MediaDetails> {
    None
}

/// Ebooks have no name pattern yet.
fn ebook(_name: &str) -> Option<MediaDetails> {
    None
}

/// Run the detector for `media_type`. Sentinel types detect nothing.
pub fn detect(media_type: MediaType, name: &str) -> Option<MediaDetails> {
    match media_type {
        MediaType::Tv => tv::detect(name),
        MediaType::Movie => movie::detect(name),
        MediaType::Music => music::detect(name),
        MediaType::AudioBook => audio_book(name),
        MediaType::Ebook => ebook(name),
        MediaType::Unknown | MediaType::Ambiguous => None,
    }
}

/// Run every detector and collect the types that matched.
pub fn detect_all(name: &str) -> MediaTypeSet {
    DETECTORS
        .iter()
        .filter(|(_, detect_fn)| detect_fn(name).is_some())
        .map(|(media_type, _)| *media_type)
        .collect()
}
