use regex::Regex;
use std::sync::LazyLock;

use crate::details::MediaDetails;

/// "Artist - Album (2014) - WEB V0": the trailer must carry a `V<digit>`
/// bitrate/version tag somewhere after the final " - ".
static RE_RELEASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<artist>.*)[[:space:]]-[[:space:]](?P<album>.*)[[:space:]]\((?P<year>(?:19|20)[0-9]{2})\)[[:space:]]-[[:space:]].*V[0-9]",
    )
    .unwrap()
});

/// Detect a music release name.
pub fn detect(name: &str) -> Option<MediaDetails> {
    let caps = RE_RELEASE.captures(name)?;
    let year: u64 = caps["year"].parse().ok()?;
    tracing::trace!(
        artist = &caps["artist"],
        album = &caps["album"],
        year,
        "Music pattern matched"
    );
    Some(MediaDetails::Music {
        artist: caps["artist"].to_string(),
        album: caps["album"].to_string(),
        year,
    })
}
