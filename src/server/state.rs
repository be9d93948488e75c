use anyhow::{Context, Result};

use crate::constants::{EARTHQUAKE_FEED_URL, TECTONIC_PLATES_URL};

/// Upstream feed endpoints. Kept apart from the rest of the state so tests
/// can point the server at stub feeds instead of the live ones.
#[derive(Debug, Clone)]
pub struct FeedUrls {
    pub earthquakes: String,
    pub plates: String,
}

impl Default for FeedUrls {
    fn default() -> Self {
        Self {
            earthquakes: EARTHQUAKE_FEED_URL.to_string(),
            plates: TECTONIC_PLATES_URL.to_string(),
        }
    }
}

// Application state for sharing the HTTP client and feed endpoints
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub feeds: FeedUrls,
}

impl AppState {
    pub fn new() -> Result<Self> {
        Self::with_feeds(FeedUrls::default())
    }

    pub fn with_feeds(feeds: FeedUrls) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building HTTP client")?;
        Ok(Self { http, feeds })
    }
}
