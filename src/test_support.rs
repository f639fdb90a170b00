//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::provider::{FetchError, ListingsProvider};
use crate::api::types::Listing;
use crate::core::state::App;

/// A provider that returns a fixed set of listings.
pub struct StaticProvider {
    pub listings: Vec<Listing>,
}

#[async_trait]
impl ListingsProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_all(&self) -> Result<Vec<Listing>, FetchError> {
        Ok(self.listings.clone())
    }
}

/// A provider that always fails with a transport error.
pub struct FailingProvider;

#[async_trait]
impl ListingsProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_all(&self) -> Result<Vec<Listing>, FetchError> {
        Err(FetchError::Transport("no route to host".to_string()))
    }
}

/// The bind-example record used throughout the unit tests.
pub fn sample_listing() -> Listing {
    Listing {
        name: "Sunny Flat".to_string(),
        address: "1 Main St".to_string(),
        price_per_night: "50".to_string(),
        size: 40.0,
        rooms: 2,
        image_url: "https://img.example/1.jpg".to_string(),
    }
}

/// Creates a test App backed by an empty StaticProvider.
pub fn test_app() -> App {
    App::new(Arc::new(StaticProvider {
        listings: Vec::new(),
    }))
}
