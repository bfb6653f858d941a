//! Pipeline stages for a catalog update run.
//!
//! - `fetch`: Retrieve the raw playlist text from the configured source
//! - `extract`: Scan text for distinct stream URLs
//! - `build`: Map stream URLs to catalog entries
//! - `update`: Run the full fetch → extract → build → write sequence

pub mod build;
pub mod extract;
pub mod fetch;
pub mod update;

pub use build::build_entries;
pub use extract::extract_stream_urls;
pub use fetch::fetch_playlist;
pub use update::run_update;
