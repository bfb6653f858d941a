// src/pipeline/extract.rs

//! Stream URL extraction.
//!
//! Scans arbitrary text for HLS manifest URLs (`.m3u8`), deduplicates them
//! by exact string equality, and returns them sorted ascending.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Matches `http(s)://` URLs ending in `.m3u8`, with an optional query
/// string. Non-greedy on the path, so the first suffix occurrence ends the
/// URL body; the query is captured greedily up to the next whitespace or
/// quote character. Scheme and suffix match case-insensitively.
static STREAM_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)https?://[^\s"']+?\.m3u8(?:\?[^\s"']*)?"#).unwrap()
});

/// Extract the set of distinct stream URLs contained in `text`.
///
/// Matched URLs keep their original casing; duplicates are removed by
/// exact comparison, with no normalization of host casing, trailing
/// slashes, or percent-encoding. Zero matches is not an error and yields
/// an empty vector.
pub fn extract_stream_urls(text: &str) -> Vec<String> {
    let unique: BTreeSet<String> = STREAM_URL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    unique.into_iter().collect()
}
