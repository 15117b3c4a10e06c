use chrono::Utc;
use tracing::{info, warn};

use crate::common::UrlId;
use crate::domains::urls::errors::{AddUrlError, StoreError, UrlValidationError};
use crate::domains::urls::models::Url;
use crate::domains::urls::normalize::{normalize, validate};
use crate::kernel::ServerDeps;

/// Result of registering a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddUrlOutcome {
    /// A new row was inserted
    Added(UrlId),
    /// The normalized name was already registered under this ID
    AlreadyExists(UrlId),
}

impl AddUrlOutcome {
    pub fn url_id(&self) -> UrlId {
        match self {
            AddUrlOutcome::Added(id) | AddUrlOutcome::AlreadyExists(id) => *id,
        }
    }
}

/// Validate, normalize and register a URL, deduplicating on the normalized name.
pub async fn add_url(raw: &str, deps: &ServerDeps) -> Result<AddUrlOutcome, AddUrlError> {
    validate(raw)?;
    let name = normalize(raw).ok_or(UrlValidationError::InvalidFormat)?;
    let pool = &deps.db_pool;

    if let Some(existing) = Url::find_by_name(&name, pool).await? {
        info!(url_id = %existing.id, name = %name, "URL already registered");
        return Ok(AddUrlOutcome::AlreadyExists(existing.id));
    }

    match Url::create(&name, Utc::now(), pool).await {
        Ok(id) => {
            info!(url_id = %id, name = %name, "URL registered");
            Ok(AddUrlOutcome::Added(id))
        }
        Err(StoreError::UniqueViolation { .. }) => {
            // Lost the race against a concurrent insert of the same name
            let existing = Url::find_by_name(&name, pool).await?.ok_or_else(|| {
                StoreError::UniqueViolation {
                    name: name.clone(),
                }
            })?;
            warn!(url_id = %existing.id, name = %name, "Concurrent registration detected");
            Ok(AddUrlOutcome::AlreadyExists(existing.id))
        }
        Err(e) => Err(e.into()),
    }
}
