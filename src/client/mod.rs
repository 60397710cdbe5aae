//! # Shortener Client Module
//!
//! Typed HTTP client for the shortening backend. It covers exactly two
//! endpoints:
//!
//! - `POST /api/urls` - [`UrlClient::shorten`], create a short URL for a full URL
//! - `GET /api/urls/shorturl?url=` - [`UrlClient::expand`], resolve a short URL
//!
//! Both calls are single round trips: no retry, no caching, no deduplication.
//! Repeating a call repeats the request.
//!
//! ## Error Classification
//!
//! Expansion failures are split into two kinds only, by response status:
//! `404` becomes [`ExpandError::NotFound`](crate::error::ExpandError::NotFound),
//! everything else (other statuses, transport errors, malformed bodies) becomes
//! [`ExpandError::Other`](crate::error::ExpandError::Other).
//!
//! Shortening failures keep their cause in
//! [`ShortenError`](crate::error::ShortenError) for logging; the view collapses
//! them to the generic message.

mod expand;
mod shorten;

use reqwest::Client;

use crate::config;

pub const URLS_PATH: &str = "/api/urls";
pub const LOOKUP_PATH: &str = "/api/urls/shorturl";

#[derive(Debug, Clone)]
pub struct UrlClient {
    http: Client,
    base_url: String,
}

impl UrlClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        UrlClient { http, base_url }
    }

    /// Builds a client for the backend configured in the environment.
    pub fn from_env() -> Self {
        Self::new(config::api_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{base}{path}", base = self.base_url, path = path)
    }
}
