//! Server dependencies for actions and routes (using traits for testability)
//!
//! This module provides the central dependency container handed to every
//! domain action. External services sit behind trait objects so tests can
//! swap them for mocks.

use sqlx::PgPool;
use std::sync::Arc;

use crate::kernel::BasePageFetcher;

/// Server dependencies accessible to actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    /// Outbound fetch-and-extract used by URL checks
    pub page_fetcher: Arc<dyn BasePageFetcher>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(db_pool: PgPool, page_fetcher: Arc<dyn BasePageFetcher>) -> Self {
        Self {
            db_pool,
            page_fetcher,
        }
    }
}
