//! # Application State
//!
//! All business state for the listings screen in one place. Presentation
//! state (scroll offsets, dialog cursors) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn ListingsProvider>   // where listings come from
//! ├── adapter: RowAdapter<Listing>          // append-only record collection
//! ├── phase: LoadPhase                      // where the initial fetch stands
//! ├── route: Route                          // which screen is on top
//! ├── notice: Option<Notice>                // transient toast-style message
//! ├── fetch_in_flight: bool                 // single-fetch guard
//! ├── filter: FilterCriteria                // last values from the filter dialog
//! ├── thumbnails: ThumbnailCache            // per-URL photo load state
//! └── profile: ProfileInfo                  // shown on the profile screen
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::provider::ListingsProvider;
use crate::api::thumbs::ThumbnailCache;
use crate::api::types::Listing;
use crate::core::adapter::{RowAdapter, bind_listing};
use crate::core::config::ResolvedConfig;

/// Where the listings screen stands with respect to its one startup fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Fetch triggered on activation, nothing arrived yet.
    Initializing,
    /// At least one record landed in the list.
    IdleWithData,
    /// Fetch finished with nothing to show.
    IdleEmpty,
    /// Fetch failed; the message went out as a notice.
    ErrorShown,
}

/// Short-lived user-visible message (toast equivalent). The event loop
/// clears it once the deadline passes.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub expires_at: Instant,
}

impl Notice {
    pub fn new(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Detail-screen payload: the full record, plus its photo URL parsed ahead
/// of time for the photo panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPayload {
    pub listing: Listing,
    pub photo: Option<reqwest::Url>,
}

/// Which screen sits on top. The filter dialog is an overlay, not a route —
/// it lives in TUI state and the list stays visible underneath.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Listings,
    Detail(DetailPayload),
    Complaint,
    Profile,
}

impl Route {
    /// Builds the detail route for one record. Fails if the payload can't
    /// be assembled (a present but unparseable photo URL); the caller logs
    /// and swallows that — navigation failure never crashes the screen.
    pub fn detail(listing: &Listing) -> Result<Route, NavigationError> {
        let photo = if listing.image_url.is_empty() {
            None
        } else {
            let url = reqwest::Url::parse(&listing.image_url)
                .map_err(|e| NavigationError::BadPayload(e.to_string()))?;
            Some(url)
        };
        Ok(Route::Detail(DetailPayload {
            listing: listing.clone(),
            photo,
        }))
    }
}

#[derive(Debug)]
pub enum NavigationError {
    /// The record could not be attached to the destination screen.
    BadPayload(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::BadPayload(msg) => write!(f, "bad navigation payload: {msg}"),
        }
    }
}

impl std::error::Error for NavigationError {}

/// Criteria collected by the filter dialog. Stored as entered; applying
/// them to results is outside this screen's contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub min_rooms: Option<u32>,
}

/// Read-only identity shown on the profile screen, from the config file.
#[derive(Debug, Clone, Default)]
pub struct ProfileInfo {
    pub username: Option<String>,
    pub email: Option<String>,
}

pub struct App {
    pub provider: Arc<dyn ListingsProvider>,
    pub adapter: RowAdapter<Listing>,
    pub phase: LoadPhase,
    pub route: Route,
    pub notice: Option<Notice>,
    /// True while a fetch task is running. A second fetch request while
    /// this is set is dropped — one outbound request at a time.
    pub fetch_in_flight: bool,
    pub filter: FilterCriteria,
    pub thumbnails: ThumbnailCache,
    pub profile: ProfileInfo,
    /// How long a notice stays up.
    pub notice_ttl: Duration,
}

impl App {
    pub fn new(provider: Arc<dyn ListingsProvider>) -> Self {
        Self {
            provider,
            adapter: RowAdapter::new(bind_listing),
            phase: LoadPhase::Initializing,
            route: Route::Listings,
            notice: None,
            fetch_in_flight: false,
            filter: FilterCriteria::default(),
            thumbnails: ThumbnailCache::new(),
            profile: ProfileInfo::default(),
            notice_ttl: Duration::from_secs(4),
        }
    }

    pub fn from_config(provider: Arc<dyn ListingsProvider>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(provider);
        app.notice_ttl = Duration::from_secs(config.notice_secs);
        app.profile = ProfileInfo {
            username: config.username.clone(),
            email: config.email.clone(),
        };
        app
    }

    pub fn show_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::new(text, self.notice_ttl));
    }

    /// Drops an expired notice. Returns true if one was cleared, so the
    /// event loop knows to redraw.
    pub fn clear_expired_notice(&mut self) -> bool {
        if self.notice.as_ref().is_some_and(Notice::is_expired) {
            self.notice = None;
            return true;
        }
        false
    }
}
