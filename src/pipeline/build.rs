// src/pipeline/build.rs

//! Catalog entry construction.

use crate::models::{CaptureStamp, StreamEntry};

/// Map extracted stream URLs to catalog entries.
///
/// The wall clock is captured exactly once, so every record of the run
/// carries the same instant in all of its timestamp slots.
pub fn build_entries(links: &[String]) -> Vec<StreamEntry> {
    let stamp = CaptureStamp::now();
    links
        .iter()
        .map(|url| StreamEntry::from_url(url, &stamp))
        .collect()
}
