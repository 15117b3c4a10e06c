// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "record a check") lives in domain actions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BasePageFetcher)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Page Fetcher Trait (Infrastructure - HTTP GET + metadata extraction)
// =============================================================================

/// Outcome of a successful fetch-and-extract against a single page.
///
/// Text fields are already trimmed and truncated; a missing tag is an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCheckResult {
    pub status_code: u16,
    pub h1: String,
    pub title: String,
    pub description: String,
}

/// Why a page could not be checked. No check is recorded for any of these.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout
    #[error("timed out fetching {url}")]
    Timeout { url: String },

    /// Connection, TLS, redirect or body read failure
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
}

impl FetchError {
    /// Classify a reqwest error for `url`.
    pub fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                source,
            }
        }
    }
}

#[async_trait]
pub trait BasePageFetcher: Send + Sync {
    /// Issue a single GET against `url` and extract h1/title/description.
    async fn fetch_and_extract(&self, url: &str) -> Result<PageCheckResult, FetchError>;
}
