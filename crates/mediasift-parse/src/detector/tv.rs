use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::details::MediaDetails;

// ── Regex patterns ──────────────────────────────────────────────
//
// Titles are captured greedily, so the rightmost marker that fits bounds
// the title: "Show.S01E01.Extra.S02E05.x" yields title "Show.S01E01.Extra".

/// "Title.S06E03.", "Title_s10x02 ": season and two-digit episode.
static RE_EPISODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<title>.+)[._ \-][Ss](?P<season>[0-9]+)[EeXx](?P<episode>[0-9]{2})[._ \-]")
        .unwrap()
});

/// "Title.S06.": season only, e.g. specials and season packs.
static RE_SEASON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<title>.+)[._ \-][Ss](?P<season>[0-9]+)[._ \-]").unwrap());

/// Detect a TV name. The episode form wins over the season-only form.
pub fn detect(name: &str) -> Option<MediaDetails> {
    if let Some(caps) = RE_EPISODE.captures(name) {
        return from_episode(&caps);
    }
    let caps = RE_SEASON.captures(name)?;
    from_season(&caps)
}

fn from_episode(caps: &Captures<'_>) -> Option<MediaDetails> {
    let season: u64 = caps["season"].parse().ok()?;
    let episode: u64 = caps["episode"].parse().ok()?;
    tracing::trace!(title = &caps["title"], season, episode, "TV episode pattern matched");
    Some(MediaDetails::Tv {
        title: caps["title"].to_string(),
        season,
        episode: Some(episode),
    })
}

fn from_season(caps: &Captures<'_>) -> Option<MediaDetails> {
    let season: u64 = caps["season"].parse().ok()?;
    tracing::trace!(title = &caps["title"], season, "TV season pattern matched");
    Some(MediaDetails::Tv {
        title: caps["title"].to_string(),
        season,
        episode: None,
    })
}
