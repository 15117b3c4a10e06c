use chrono::Utc;
use tracing::{info, warn};

use crate::common::UrlId;
use crate::domains::urls::errors::CheckError;
use crate::domains::urls::models::{NewUrlCheck, Url, UrlCheck};
use crate::kernel::ServerDeps;

/// Fetch a registered URL and record what was found.
///
/// Nothing is written when the URL is unknown or the fetch fails. The fetch
/// runs with no database connection held.
pub async fn run_check(url_id: UrlId, deps: &ServerDeps) -> Result<UrlCheck, CheckError> {
    let url = Url::find_by_id(url_id, &deps.db_pool)
        .await?
        .ok_or(CheckError::NotFound(url_id))?;

    let page = match deps.page_fetcher.fetch_and_extract(&url.name).await {
        Ok(page) => page,
        Err(e) => {
            warn!(url_id = %url.id, name = %url.name, error = %e, "URL check failed");
            return Err(e.into());
        }
    };

    let check = UrlCheck::create(
        NewUrlCheck {
            url_id: url.id,
            status_code: Some(i32::from(page.status_code)),
            h1: page.h1,
            title: page.title,
            description: page.description,
            created_at: Utc::now(),
        },
        &deps.db_pool,
    )
    .await?;

    info!(
        url_id = %url.id,
        check_id = %check.id,
        status_code = page.status_code,
        "URL check recorded"
    );

    Ok(check)
}
