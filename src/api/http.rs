//! Reqwest-backed [`ListingsProvider`].
//!
//! Maps the raw HTTP outcome onto the `FetchError` taxonomy:
//! transport failures and undecodable bodies become `Transport`, non-2xx
//! statuses become `Http` with the server's message, and a 2xx with an
//! empty body becomes `NoContent`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::provider::{FetchError, ListingsProvider};
use super::types::Listing;

pub struct HttpListingsProvider {
    base_url: String,
    listings_path: String,
    client: reqwest::Client,
}

impl HttpListingsProvider {
    pub fn new(base_url: String, listings_path: String, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url,
            listings_path,
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.listings_path
        )
    }
}

#[async_trait]
impl ListingsProvider for HttpListingsProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_all(&self) -> Result<Vec<Listing>, FetchError> {
        let url = self.endpoint();
        info!("Fetching listings from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("Listings response status: {status}");

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("").to_string();
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() { reason } else { body };
            warn!("Listings API error: {} - {}", status.as_u16(), message);
            return Err(FetchError::Http {
                status: status.as_u16(),
                message,
            });
        }

        // Body is read as text first so an absent payload and a malformed
        // one map to different errors.
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if body.trim().is_empty() {
            warn!("Listings response had no body");
            return Err(FetchError::NoContent);
        }

        let listings: Vec<Listing> =
            serde_json::from_str(&body).map_err(|e| FetchError::Transport(e.to_string()))?;

        info!("Fetched {} listings", listings.len());
        Ok(listings)
    }
}
