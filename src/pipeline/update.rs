// src/pipeline/update.rs

//! Full catalog update run.
//!
//! One linear pass: fetch → extract → build → write. Fetch failures are
//! logged and degrade the run to an empty catalog, so a fresh, valid output
//! document is published on every invocation. Write failures propagate.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::Config;
use crate::pipeline::{build_entries, extract_stream_urls, fetch_playlist};
use crate::storage::LocalStorage;
use crate::utils::http;

/// Summary of an update run.
#[derive(Debug)]
pub struct RunStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub link_count: usize,
}

impl RunStats {
    /// Wall-clock duration of the run in seconds.
    pub fn duration_secs(&self) -> f64 {
        (self.end_time - self.start_time).num_milliseconds() as f64 / 1000.0
    }
}

/// Run a full catalog update and return the number of entries written.
///
/// The final count is also printed to stdout as `link_count=<N>`, a stable
/// contract line for the orchestration layer that greps this output. Log
/// lines go to stderr and carry no such guarantee.
pub async fn run_update(config: &Config, storage: &LocalStorage) -> Result<usize> {
    let start_time = Utc::now();

    let fetched = match http::create_client(&config.source) {
        Ok(client) => fetch_playlist(&client, &config.source.url).await,
        Err(error) => Err(error),
    };
    let links = links_from_fetch(fetched);

    let entries = build_entries(&links);
    let count = storage.write_catalog(&config.output.file, &entries).await?;

    let stats = RunStats {
        start_time,
        end_time: Utc::now(),
        link_count: count,
    };
    log::info!(
        "Written {} entries to {} in {:.2}s",
        stats.link_count,
        storage.catalog_path(&config.output.file).display(),
        stats.duration_secs()
    );
    println!("link_count={count}");

    Ok(count)
}

/// Degrade any fetch-phase failure to an empty link set.
///
/// Extraction itself cannot fail, so the only error source feeding this
/// step is the fetch. The run continues either way.
fn links_from_fetch(fetched: Result<String>) -> Vec<String> {
    match fetched {
        Ok(text) => extract_stream_urls(&text),
        Err(error) => {
            log::error!("Error fetching playlist: {error}. Publishing an empty catalog.");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::StreamEntry;
    use tempfile::TempDir;

    #[test]
    fn test_links_from_successful_fetch() {
        let text = "#EXTM3U\nhttp://a.com/x.m3u8\n".to_string();
        assert_eq!(links_from_fetch(Ok(text)), vec!["http://a.com/x.m3u8"]);
    }

    #[test]
    fn test_fetch_failure_degrades_to_empty() {
        let failed = Err(AppError::fetch(reqwest::StatusCode::NOT_FOUND));
        assert!(links_from_fetch(failed).is_empty());
    }

    #[tokio::test]
    async fn test_degraded_run_still_publishes_valid_empty_catalog() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let failed = Err(AppError::fetch(reqwest::StatusCode::BAD_GATEWAY));
        let entries = build_entries(&links_from_fetch(failed));
        let count = storage.write_catalog("streams.json", &entries).await.unwrap();

        assert_eq!(count, 0);
        let written: Vec<StreamEntry> = storage
            .read_catalog("streams.json")
            .await
            .unwrap()
            .expect("catalog file must exist after a degraded run");
        assert!(written.is_empty());
    }
}
