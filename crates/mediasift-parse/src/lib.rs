//! Pattern-based detectors for media names.
//!
//! ```
//! use mediasift_parse::{detector, MediaDetails, MediaType};
//!
//! let details = detector::detect(MediaType::Tv, "Archer.2009.S06E03.720p.HDTV.x264-SCENE.mkv");
//! assert_eq!(
//!     details,
//!     Some(MediaDetails::Tv { title: "Archer.2009".into(), season: 6, episode: Some(3) })
//! );
//! ```

pub mod details;
pub mod detector;
pub mod media_type;

pub use details::MediaDetails;
pub use detector::{detect, detect_all};
pub use media_type::{MediaType, MediaTypeSet, ParseMediaTypeError};
