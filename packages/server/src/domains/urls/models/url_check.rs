use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{UrlCheckId, UrlId};
use crate::domains::urls::errors::StoreError;

/// UrlCheck - one successful fetch of a registered URL and what was extracted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UrlCheck {
    pub id: UrlCheckId,
    pub url_id: UrlId,
    pub status_code: Option<i32>,
    pub h1: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Fields of a check to be recorded
#[derive(Debug, Clone)]
pub struct NewUrlCheck {
    pub url_id: UrlId,
    pub status_code: Option<i32>,
    pub h1: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl UrlCheck {
    /// All checks for a URL, newest first
    pub async fn find_for_url(url_id: UrlId, pool: &PgPool) -> Result<Vec<Self>, StoreError> {
        let checks = sqlx::query_as::<_, UrlCheck>(
            r#"
            SELECT id, url_id, status_code, h1, title, description, created_at
            FROM url_checks
            WHERE url_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(url_id)
        .fetch_all(pool)
        .await?;
        Ok(checks)
    }

    /// Record a check
    ///
    /// Fails with `StoreError::ForeignKeyViolation` if the URL does not exist.
    pub async fn create(check: NewUrlCheck, pool: &PgPool) -> Result<Self, StoreError> {
        let result = sqlx::query_as::<_, UrlCheck>(
            r#"
            INSERT INTO url_checks (url_id, status_code, created_at, h1, title, description)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, url_id, status_code, h1, title, description, created_at
            "#,
        )
        .bind(check.url_id)
        .bind(check.status_code)
        .bind(check.created_at)
        .bind(&check.h1)
        .bind(&check.title)
        .bind(&check.description)
        .fetch_one(pool)
        .await;

        match result {
            Ok(row) => Ok(row),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Err(StoreError::ForeignKeyViolation(check.url_id))
            }
            Err(e) => Err(e.into()),
        }
    }
}
