use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::UrlId;
use crate::domains::urls::errors::StoreError;

/// Name of the unique constraint on `urls.name`
const URLS_NAME_KEY: &str = "urls_name_key";

/// Url - a registered site, keyed by its normalized `scheme://host` name
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Url {
    pub id: UrlId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// One row of the site listing: the URL plus its most recent check, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UrlListing {
    pub id: UrlId,
    pub name: String,
    pub last_check_at: Option<DateTime<Utc>>,
    pub last_status_code: Option<i32>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Url {
    /// Find URL by ID
    pub async fn find_by_id(id: UrlId, pool: &PgPool) -> Result<Option<Self>, StoreError> {
        let url = sqlx::query_as::<_, Url>("SELECT id, name, created_at FROM urls WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(url)
    }

    /// Find URL by its already-normalized name
    pub async fn find_by_name(name: &str, pool: &PgPool) -> Result<Option<Self>, StoreError> {
        let url =
            sqlx::query_as::<_, Url>("SELECT id, name, created_at FROM urls WHERE name = $1")
                .bind(name)
                .fetch_optional(pool)
                .await?;
        Ok(url)
    }

    /// Insert a new URL and return its ID
    ///
    /// The unique constraint on `name` is the source of truth for deduplication:
    /// a concurrent insert of the same name surfaces as `StoreError::UniqueViolation`.
    pub async fn create(
        name: &str,
        created_at: DateTime<Utc>,
        pool: &PgPool,
    ) -> Result<UrlId, StoreError> {
        let result = sqlx::query_scalar::<_, UrlId>(
            "INSERT INTO urls (name, created_at) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(created_at)
        .fetch_one(pool)
        .await;

        match result {
            Ok(id) => Ok(id),
            Err(sqlx::Error::Database(db_err))
                if db_err.is_unique_violation()
                    && db_err.constraint().map_or(true, |c| c == URLS_NAME_KEY) =>
            {
                Err(StoreError::UniqueViolation {
                    name: name.to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// All URLs, newest first, each paired with its latest check
    ///
    /// "Latest" is the check with the greatest `created_at`; equal timestamps
    /// are resolved by the greatest check ID so the result is deterministic.
    pub async fn list_with_latest_check(pool: &PgPool) -> Result<Vec<UrlListing>, StoreError> {
        let rows = sqlx::query_as::<_, UrlListing>(
            r#"
            SELECT
                u.id,
                u.name,
                latest.created_at AS last_check_at,
                latest.status_code AS last_status_code
            FROM urls u
            LEFT JOIN LATERAL (
                SELECT uc.created_at, uc.status_code
                FROM url_checks uc
                WHERE uc.url_id = u.id
                ORDER BY uc.created_at DESC, uc.id DESC
                LIMIT 1
            ) latest ON TRUE
            ORDER BY u.id DESC
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}
