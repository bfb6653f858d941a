// src/pipeline/fetch.rs

//! Playlist retrieval.

use reqwest::Client;

use crate::error::{AppError, Result};

/// Fetch the playlist text from a remote URL.
///
/// Returns the body verbatim on a success status. A non-success status
/// becomes [`AppError::Fetch`]; transport failures (DNS, TCP reset, the
/// client's bounded timeout) surface as [`AppError::Http`]. Callers treat
/// both as the same fetch-failure kind. No retries.
pub async fn fetch_playlist(client: &Client, url: &str) -> Result<String> {
    log::info!("Fetching playlist from {url}");

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::fetch(status));
    }

    let text = response.text().await?;
    log::debug!("Fetched {} bytes of playlist text", text.len());
    Ok(text)
}
