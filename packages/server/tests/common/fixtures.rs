//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use chrono::{DateTime, Utc};
use page_analyzer::common::UrlId;
use page_analyzer::domains::urls::{NewUrlCheck, Url, UrlCheck};
use sqlx::PgPool;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static SITE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A normalized site name no other test will produce
pub fn unique_site(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let n = SITE_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("https://{prefix}-{nanos}-{n}.example.com")
}

/// Insert a URL row directly
pub async fn create_test_url(pool: &PgPool, name: &str) -> Result<UrlId> {
    Ok(Url::create(name, Utc::now(), pool).await?)
}

/// Insert a check row with an explicit timestamp
pub async fn create_test_check(
    pool: &PgPool,
    url_id: UrlId,
    status_code: i32,
    created_at: DateTime<Utc>,
) -> Result<UrlCheck> {
    Ok(UrlCheck::create(
        NewUrlCheck {
            url_id,
            status_code: Some(status_code),
            h1: "Heading".to_string(),
            title: "Title".to_string(),
            description: "Description".to_string(),
            created_at,
        },
        pool,
    )
    .await?)
}

/// Number of check rows for a URL
pub async fn count_checks(pool: &PgPool, url_id: UrlId) -> Result<i64> {
    Ok(
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_checks WHERE url_id = $1")
            .bind(url_id)
            .fetch_one(pool)
            .await?,
    )
}

/// Number of URL rows with this exact name
pub async fn count_urls_named(pool: &PgPool, name: &str) -> Result<i64> {
    Ok(
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls WHERE name = $1")
            .bind(name)
            .fetch_one(pool)
            .await?,
    )
}
