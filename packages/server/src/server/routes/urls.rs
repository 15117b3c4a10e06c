use axum::{
    extract::{Extension, Form, Path},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::common::UrlId;
use crate::domains::urls::{
    add_url, run_check, AddUrlError, AddUrlOutcome, CheckError, Url, UrlCheck,
    UrlValidationError,
};
use crate::server::app::AppState;
use crate::server::error::AppError;
use crate::server::flash::{redirect_with_flash, Flash, IncomingFlash};
use crate::server::views::{render_form_page, render_url_detail, render_url_list};

#[derive(Debug, Deserialize)]
pub struct AddUrlForm {
    #[serde(default)]
    pub url: String,
}

/// HTTP status for a rejected submission
pub fn validation_status(error: &UrlValidationError) -> StatusCode {
    match error {
        UrlValidationError::InvalidFormat => StatusCode::UNPROCESSABLE_ENTITY,
        UrlValidationError::EmptyInput | UrlValidationError::TooLong => StatusCode::BAD_REQUEST,
    }
}

fn parse_url_id(raw: &str) -> Result<UrlId, AppError> {
    UrlId::parse(raw).map_err(|_| AppError::NotFound)
}

fn detail_path(id: UrlId) -> String {
    format!("/urls/{id}")
}

/// GET / - the "add URL" form
pub async fn index_handler(incoming: IncomingFlash) -> Response {
    let page = render_form_page(None, "", incoming.flash());
    incoming.consume(Html(page).into_response())
}

/// POST /urls - register a URL and redirect to its page
pub async fn create_url_handler(
    Extension(state): Extension<AppState>,
    Form(form): Form<AddUrlForm>,
) -> Result<Response, AppError> {
    match add_url(&form.url, &state.deps).await {
        Ok(AddUrlOutcome::Added(id)) => Ok(redirect_with_flash(
            &detail_path(id),
            Flash::success("Page successfully added"),
        )),
        Ok(AddUrlOutcome::AlreadyExists(id)) => Ok(redirect_with_flash(
            &detail_path(id),
            Flash::info("Page already exists"),
        )),
        Err(AddUrlError::Invalid(e)) => Ok((
            validation_status(&e),
            Html(render_form_page(Some(&e), &form.url, None)),
        )
            .into_response()),
        Err(AddUrlError::Store(e)) => Err(e.into()),
    }
}

/// GET /urls - every site with its latest check
pub async fn list_urls_handler(
    Extension(state): Extension<AppState>,
    incoming: IncomingFlash,
) -> Result<Response, AppError> {
    let rows = Url::list_with_latest_check(&state.db_pool).await?;
    let page = render_url_list(&rows, incoming.flash());
    Ok(incoming.consume(Html(page).into_response()))
}

/// GET /urls/:id - one site and its check history
pub async fn show_url_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    incoming: IncomingFlash,
) -> Result<Response, AppError> {
    let id = parse_url_id(&id)?;
    let url = Url::find_by_id(id, &state.db_pool)
        .await?
        .ok_or(AppError::NotFound)?;
    let checks = UrlCheck::find_for_url(url.id, &state.db_pool).await?;

    let page = render_url_detail(&url, &checks, incoming.flash());
    Ok(incoming.consume(Html(page).into_response()))
}

/// POST /urls/:id/checks - fetch the site now and record the result
pub async fn create_check_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_url_id(&id)?;

    match run_check(id, &state.deps).await {
        Ok(_) => Ok(redirect_with_flash(
            &detail_path(id),
            Flash::success("Page successfully checked"),
        )),
        Err(CheckError::Fetch(_)) => Ok(redirect_with_flash(
            &detail_path(id),
            Flash::error("An error occurred during the check"),
        )),
        Err(CheckError::NotFound(_)) => Ok(redirect_with_flash(
            "/urls",
            Flash::error("Page not found"),
        )),
        Err(CheckError::Store(e)) => Err(e.into()),
    }
}
