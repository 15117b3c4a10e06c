use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::domains::urls::StoreError;
use crate::server::views::render_form_page;

/// Request-level failures that end in an error page
#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Store(e) => {
                tracing::error!(error = %e, "Store operation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(e) => {
                tracing::error!(error = ?e, "Unhandled error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Html(render_form_page(None, "", None))).into_response()
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound
}
