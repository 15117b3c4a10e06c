// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{BasePageFetcher, FetchError, PageCheckResult, ServerDeps};

// =============================================================================
// Mock Page Fetcher
// =============================================================================

/// A scripted reply for the next fetch
#[derive(Debug, Clone)]
enum MockReply {
    Page(PageCheckResult),
    Status(u16),
    Timeout,
}

/// Page fetcher that replays queued replies and records every URL it was asked for.
///
/// With nothing queued it answers 200 with fixed mock metadata.
#[derive(Default)]
pub struct MockPageFetcher {
    replies: Mutex<VecDeque<MockReply>>,
    calls: Mutex<Vec<String>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful 200 response with the given fields
    pub fn with_page(self, h1: &str, title: &str, description: &str) -> Self {
        self.with_result(PageCheckResult {
            status_code: 200,
            h1: h1.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        })
    }

    /// Queue an arbitrary successful result
    pub fn with_result(self, result: PageCheckResult) -> Self {
        self.push(MockReply::Page(result));
        self
    }

    /// Queue a non-2xx failure
    pub fn with_status_error(self, status: u16) -> Self {
        self.push(MockReply::Status(status));
        self
    }

    /// Queue a timeout failure
    pub fn with_timeout(self) -> Self {
        self.push(MockReply::Timeout);
        self
    }

    /// URLs passed to `fetch_and_extract`, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, reply: MockReply) {
        self.replies.lock().unwrap().push_back(reply);
    }
}

#[async_trait]
impl BasePageFetcher for MockPageFetcher {
    async fn fetch_and_extract(&self, url: &str) -> Result<PageCheckResult, FetchError> {
        // Record the call
        self.calls.lock().unwrap().push(url.to_string());

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Page(result)) => Ok(result),
            Some(MockReply::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
            Some(MockReply::Timeout) => Err(FetchError::Timeout {
                url: url.to_string(),
            }),
            None => Ok(PageCheckResult {
                status_code: 200,
                h1: "Mock Heading".to_string(),
                title: "Mock Page".to_string(),
                description: "Mock description".to_string(),
            }),
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub page_fetcher: Arc<MockPageFetcher>,
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            page_fetcher: Arc::new(MockPageFetcher::new()),
        }
    }

    /// Set a mock page fetcher
    pub fn mock_fetcher(mut self, fetcher: MockPageFetcher) -> Self {
        self.page_fetcher = Arc::new(fetcher);
        self
    }

    /// Convert into ServerDeps for testing
    pub fn into_deps(self, db_pool: PgPool) -> ServerDeps {
        ServerDeps::new(db_pool, self.page_fetcher)
    }
}
