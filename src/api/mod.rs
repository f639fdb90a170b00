//! # Listings API
//!
//! Everything that talks to the apartments backend lives here:
//!
//! - [`types`]: the `Listing` wire model
//! - [`provider`]: the `ListingsProvider` trait and `FetchError` taxonomy
//! - [`http`]: the reqwest-backed provider
//! - [`thumbs`]: fire-and-forget photo loads for list rows
//!
//! The rest of the app only sees `Arc<dyn ListingsProvider>`, so tests swap
//! in canned providers without any network.

pub mod http;
pub mod provider;
pub mod thumbs;
pub mod types;

pub use http::HttpListingsProvider;
pub use provider::{FetchError, ListingsProvider};
pub use types::Listing;
