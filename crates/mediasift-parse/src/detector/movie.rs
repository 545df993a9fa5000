use regex::Regex;
use std::sync::LazyLock;

use crate::details::MediaDetails;

/// "Title.1999.": a 19xx/20xx year bounded by separators on both sides.
/// The title is greedy, so the rightmost bounded year wins.
static RE_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<title>.+)[._ \-](?P<year>(?:19|20)[0-9]{2})[._ \-]").unwrap()
});

/// Detect a movie name.
pub fn detect(name: &str) -> Option<MediaDetails> {
    let caps = RE_YEAR.captures(name)?;
    let year: u64 = caps["year"].parse().ok()?;
    tracing::trace!(title = &caps["title"], year, "Movie pattern matched");
    Some(MediaDetails::Movie {
        title: caps["title"].to_string(),
        year,
    })
}
