//! HTTP page fetcher - a single GET plus SEO metadata extraction
//!
//! This implementation:
//! - Uses reqwest for the HTTP request (bounded timeout, limited redirects)
//! - Uses the scraper crate for HTML parsing
//! - Treats any non-2xx status as a failed check
//!
//! Extraction never fails: a missing tag or malformed markup yields an empty field.

use anyhow::{Context, Result};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, warn};

use super::{BasePageFetcher, FetchError, PageCheckResult};
use crate::common::utils::truncate_chars;

/// Maximum stored length of each extracted field (matches the VARCHAR(255) columns)
pub const MAX_FIELD_LENGTH: usize = 255;

/// Maximum redirects followed before the fetch is treated as failed
const MAX_REDIRECTS: usize = 5;

const USER_AGENT: &str = concat!("PageAnalyzer/", env!("CARGO_PKG_VERSION"));

/// SEO fields pulled out of an HTML document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub h1: String,
    pub title: String,
    pub description: String,
}

/// Page fetcher backed by reqwest + scraper
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch raw HTML from a URL, rejecting non-2xx responses
    async fn fetch_html(&self, url: &str) -> Result<(u16, String), FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        Ok((status.as_u16(), body))
    }
}

#[async_trait]
impl BasePageFetcher for HttpPageFetcher {
    async fn fetch_and_extract(&self, url: &str) -> Result<PageCheckResult, FetchError> {
        let (status_code, html) = match self.fetch_html(url).await {
            Ok(page) => page,
            Err(e) => {
                warn!(url = %url, error = %e, "Page fetch failed");
                return Err(e);
            }
        };

        let metadata = extract_page_metadata(&html);
        debug!(
            url = %url,
            status_code,
            h1_len = metadata.h1.len(),
            title_len = metadata.title.len(),
            description_len = metadata.description.len(),
            "Page fetched"
        );

        Ok(PageCheckResult {
            status_code,
            h1: metadata.h1,
            title: metadata.title,
            description: metadata.description,
        })
    }
}

/// Extract h1, title and meta description from an HTML document.
pub fn extract_page_metadata(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    PageMetadata {
        h1: first_element_text(&document, "h1"),
        title: first_element_text(&document, "title"),
        description: meta_description(&document),
    }
}

/// Trimmed, truncated text of the first element matching `selector`
fn first_element_text(document: &Html, selector: &str) -> String {
    let Ok(selector) = Selector::parse(selector) else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(|el| truncate_chars(el.text().collect::<String>().trim(), MAX_FIELD_LENGTH))
        .unwrap_or_default()
}

/// `content` of the first `<meta name="description">`, matching the name case-insensitively
fn meta_description(document: &Html) -> String {
    let Ok(selector) = Selector::parse("meta[name]") else {
        return String::new();
    };

    document
        .select(&selector)
        .find(|el| {
            el.value()
                .attr("name")
                .is_some_and(|name| name.trim().eq_ignore_ascii_case("description"))
        })
        .and_then(|el| el.value().attr("content"))
        .map(|content| truncate_chars(content.trim(), MAX_FIELD_LENGTH))
        .unwrap_or_default()
}
