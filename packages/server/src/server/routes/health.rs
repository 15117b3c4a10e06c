use std::time::Duration;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;
use sqlx::PgPool;

use crate::server::app::AppState;

/// Upper bound on the database ping
const DB_PING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Overall {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "lowercase")]
pub enum DatabaseStatus {
    Ok,
    Error(String),
}

#[derive(Debug, Serialize)]
pub struct PoolStats {
    size: u32,
    idle_connections: usize,
    max_connections: u32,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    status: Overall,
    database: DatabaseStatus,
    connection_pool: PoolStats,
}

impl HealthReport {
    fn new(database: DatabaseStatus, connection_pool: PoolStats) -> Self {
        let status = match database {
            DatabaseStatus::Ok => Overall::Healthy,
            DatabaseStatus::Error(_) => Overall::Unhealthy,
        };
        Self {
            status,
            database,
            connection_pool,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self.status {
            Overall::Healthy => StatusCode::OK,
            Overall::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

async fn ping(pool: &PgPool) -> DatabaseStatus {
    match tokio::time::timeout(DB_PING_TIMEOUT, sqlx::query("SELECT 1").execute(pool)).await {
        Ok(Ok(_)) => DatabaseStatus::Ok,
        Ok(Err(e)) => DatabaseStatus::Error(format!("Query failed: {e}")),
        Err(_) => DatabaseStatus::Error(format!(
            "Query timeout (>{}s)",
            DB_PING_TIMEOUT.as_secs()
        )),
    }
}

/// GET /health - database reachability plus pool utilization; 503 when the ping fails
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthReport>) {
    let pool = &state.db_pool;
    let stats = PoolStats {
        size: pool.size(),
        idle_connections: pool.num_idle(),
        max_connections: pool.options().get_max_connections(),
    };

    let report = HealthReport::new(ping(pool).await, stats);
    (report.status_code(), Json(report))
}
