//! Classify media names and extract their metadata, without any lookup
//! service.
//!
//! ```
//! use mediasift_core::{media_details_for_name, media_type_for_name, MediaDetails, MediaType};
//!
//! let name = "The.Venture.Bros.S06.Special.All.This.and.Gargantua-2.720p.WEB-DL.DD5.1.H.264-SCENE.mkv";
//! assert_eq!(media_type_for_name(name), MediaType::Tv);
//! assert_eq!(
//!     media_details_for_name(name),
//!     Some(MediaDetails::Tv { title: "The.Venture.Bros".into(), season: 6, episode: None })
//! );
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod policy;

use std::sync::LazyLock;

pub use classifier::Classifier;
pub use config::SiftConfig;
pub use error::SiftError;
pub use mediasift_parse::{MediaDetails, MediaType, MediaTypeSet};
pub use policy::{DisambiguationPolicy, Resolution};

/// Classifier with the built-in policy, shared by the free functions.
static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(Classifier::default);

/// Classify a name using the built-in disambiguation policy.
pub fn media_type_for_name(name: &str) -> MediaType {
    DEFAULT_CLASSIFIER.classify(name)
}

/// Extract details for a name using the built-in disambiguation policy.
pub fn media_details_for_name(name: &str) -> Option<MediaDetails> {
    DEFAULT_CLASSIFIER.details(name)
}

/// Fixed human-readable label for a media type.
pub fn media_type_to_label(media_type: MediaType) -> &'static str {
    media_type.label()
}
