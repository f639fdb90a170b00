//! Row photo loading.
//!
//! A terminal can't show the actual photo, so each row gets a photo cell
//! driven by this cache: pending while the GET is in flight, the payload
//! size once it lands, a placeholder glyph if the load fails. Loads are
//! fire-and-forget and independent per URL; the event loop spawns them and
//! feeds the outcome back as actions.

use std::collections::HashMap;

/// Load state of one image URL.
#[derive(Debug, Clone, PartialEq)]
pub enum Thumbnail {
    Pending,
    Ready { bytes: usize },
    Failed,
}

/// Per-URL load states, deduplicated by URL so re-binding a row (or two
/// rows sharing a photo) never issues a second request.
#[derive(Default)]
pub struct ThumbnailCache {
    slots: HashMap<String, Thumbnail>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, url: &str) -> Option<&Thumbnail> {
        self.slots.get(url)
    }

    /// Marks the URL pending. Returns true if a fetch should be spawned,
    /// false if the URL is already known (in flight, loaded, or failed).
    /// An empty URL fails immediately — there is nothing to load.
    pub fn request(&mut self, url: &str) -> bool {
        if url.is_empty() {
            self.slots.insert(String::new(), Thumbnail::Failed);
            return false;
        }
        if self.slots.contains_key(url) {
            return false;
        }
        self.slots.insert(url.to_string(), Thumbnail::Pending);
        true
    }

    pub fn resolve(&mut self, url: &str, outcome: Result<usize, ()>) {
        let slot = match outcome {
            Ok(bytes) => Thumbnail::Ready { bytes },
            Err(()) => Thumbnail::Failed,
        };
        self.slots.insert(url.to_string(), slot);
    }
}

/// One GET for one image. Any failure collapses to `Err` — the caller only
/// needs to know whether to show the placeholder.
pub async fn fetch_image(client: &reqwest::Client, url: &str) -> Result<usize, ()> {
    let response = client.get(url).send().await.map_err(|_| ())?;
    if !response.status().is_success() {
        return Err(());
    }
    let body = response.bytes().await.map_err(|_| ())?;
    Ok(body.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_dedups_by_url() {
        let mut cache = ThumbnailCache::new();
        assert!(cache.request("https://img.example/1.jpg"));
        assert!(!cache.request("https://img.example/1.jpg"));
        assert_eq!(
            cache.status("https://img.example/1.jpg"),
            Some(&Thumbnail::Pending)
        );
    }

    #[test]
    fn test_empty_url_fails_without_fetch() {
        let mut cache = ThumbnailCache::new();
        assert!(!cache.request(""));
        assert_eq!(cache.status(""), Some(&Thumbnail::Failed));
    }

    #[test]
    fn test_fetch_image_failure_collapses_to_err() {
        let client = reqwest::Client::new();
        // Discard port: nothing listens, the connect fails fast
        let result = tokio_test::block_on(fetch_image(&client, "http://127.0.0.1:9/none.jpg"));
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_overwrites_pending() {
        let mut cache = ThumbnailCache::new();
        cache.request("https://img.example/1.jpg");
        cache.resolve("https://img.example/1.jpg", Ok(2048));
        assert_eq!(
            cache.status("https://img.example/1.jpg"),
            Some(&Thumbnail::Ready { bytes: 2048 })
        );

        cache.request("https://img.example/2.jpg");
        cache.resolve("https://img.example/2.jpg", Err(()));
        assert_eq!(
            cache.status("https://img.example/2.jpg"),
            Some(&Thumbnail::Failed)
        );
    }
}
