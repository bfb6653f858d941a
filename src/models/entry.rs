//! Catalog entry data structure.
//!
//! One `StreamEntry` describes a single stream, shaped to match the
//! radio-browser directory schema. Most fields are unpopulated placeholders
//! kept for schema compatibility with that broader catalog format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Both textual renderings of a single capture instant.
///
/// The ISO form is a naive UTC rendering with a literal `Z` appended; the
/// local form carries no zone suffix at all. Downstream consumers expect
/// exactly this convention, so no real zone conversion happens here.
#[derive(Debug, Clone)]
pub struct CaptureStamp {
    /// `YYYY-MM-DD HH:MM:SS`
    pub local: String,
    /// `YYYY-MM-DDTHH:MM:SS.ffffffZ`
    pub iso8601: String,
}

impl CaptureStamp {
    /// Render both forms of the given instant.
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        let naive = instant.naive_utc();
        let mut iso8601 = naive.format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
        iso8601.push('Z');
        Self {
            local: naive.format("%Y-%m-%d %H:%M:%S").to_string(),
            iso8601,
        }
    }

    /// Capture and render the current instant.
    pub fn now() -> Self {
        Self::from_instant(Utc::now())
    }
}

/// A single catalog record in the stream directory schema.
///
/// Field order matters: serde serializes in declaration order, and the
/// output contract keeps the directory schema's key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamEntry {
    /// Unique token regenerated on every run
    pub changeuuid: String,
    /// Unique token regenerated on every run
    pub stationuuid: String,
    /// Unique token regenerated on every run
    pub serveruuid: String,

    /// Last path segment of the stream URL
    pub name: String,
    /// Stream URL exactly as extracted
    pub url: String,
    /// Mirrors `url`; no resolution is performed
    pub url_resolved: String,

    // Placeholder metadata, present for schema compatibility only
    pub homepage: String,
    pub favicon: String,
    pub tags: String,
    pub country: String,
    pub countrycode: String,
    pub iso_3166_2: String,
    pub state: String,
    pub language: String,
    pub languagecodes: String,

    pub votes: i32,

    pub lastchangetime: String,
    pub lastchangetime_iso8601: String,

    pub codec: String,
    pub bitrate: i32,
    pub hls: i32,
    pub lastcheckok: i32,

    // All five timestamp slots hold the same capture instant
    pub lastchecktime: String,
    pub lastchecktime_iso8601: String,
    pub lastcheckoktime: String,
    pub lastcheckoktime_iso8601: String,
    pub lastlocalchecktime: String,
    pub lastlocalchecktime_iso8601: String,
    pub clicktimestamp: String,
    pub clicktimestamp_iso8601: String,

    pub clickcount: i32,
    pub clicktrend: i32,
    pub ssl_error: i32,

    pub geo_lat: Option<f64>,
    pub geo_long: Option<f64>,
    pub geo_distance: Option<f64>,

    pub has_extended_info: bool,
}

impl StreamEntry {
    /// Build one catalog record for a stream URL.
    ///
    /// The capture stamp is taken by reference so every record of a run
    /// shares the same instant. This mapping is total: any non-empty URL
    /// yields a record.
    pub fn from_url(url: &str, stamp: &CaptureStamp) -> Self {
        Self {
            changeuuid: Uuid::new_v4().to_string(),
            stationuuid: Uuid::new_v4().to_string(),
            serveruuid: Uuid::new_v4().to_string(),
            name: stream_name(url),
            url: url.to_string(),
            url_resolved: url.to_string(),
            homepage: String::new(),
            favicon: String::new(),
            tags: String::new(),
            country: String::new(),
            countrycode: String::new(),
            iso_3166_2: String::new(),
            state: String::new(),
            language: String::new(),
            languagecodes: String::new(),
            votes: 0,
            lastchangetime: stamp.local.clone(),
            lastchangetime_iso8601: stamp.iso8601.clone(),
            codec: "MP3".to_string(),
            bitrate: 128,
            hls: 1,
            lastcheckok: 1,
            lastchecktime: stamp.local.clone(),
            lastchecktime_iso8601: stamp.iso8601.clone(),
            lastcheckoktime: stamp.local.clone(),
            lastcheckoktime_iso8601: stamp.iso8601.clone(),
            lastlocalchecktime: stamp.local.clone(),
            lastlocalchecktime_iso8601: stamp.iso8601.clone(),
            clicktimestamp: stamp.local.clone(),
            clicktimestamp_iso8601: stamp.iso8601.clone(),
            clickcount: 0,
            clicktrend: 0,
            ssl_error: 0,
            geo_lat: None,
            geo_long: None,
            geo_distance: None,
            has_extended_info: false,
        }
    }
}

/// Derive a display name from the substring after the final `/`.
///
/// A URL without any `/` is its own name.
fn stream_name(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).to_string()
}
