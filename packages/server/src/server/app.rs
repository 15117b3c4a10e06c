//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::error::not_found;
use crate::server::routes::{
    create_check_handler, create_url_handler, health_handler, index_handler, list_urls_handler,
    show_url_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub deps: Arc<ServerDeps>,
}

impl AppState {
    pub fn new(deps: ServerDeps) -> Self {
        Self {
            db_pool: deps.db_pool.clone(),
            deps: Arc::new(deps),
        }
    }
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps) -> Router {
    let state = AppState::new(deps);

    Router::new()
        .route("/", get(index_handler))
        .route("/urls", get(list_urls_handler).post(create_url_handler))
        .route("/urls/:id", get(show_url_handler))
        .route("/urls/:id/checks", post(create_check_handler))
        .route("/health", get(health_handler))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(state)),
        )
}
