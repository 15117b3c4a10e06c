//! CLI for inspecting and applying schema migrations
//!
//! Outputs one JSON object per invocation so it can be scripted.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use page_analyzer::config::Config;
use serde::Serialize;
use sqlx::migrate::Migrator;
use sqlx::PgPool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Parser)]
#[command(name = "migrate_cli")]
#[command(about = "Schema migration CLI for the page analyzer database")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List embedded migrations and whether each has been applied
    List,

    /// Apply all pending migrations
    Run,
}

// ============================================================================
// JSON Response Types
// ============================================================================

#[derive(Serialize)]
struct Response {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    migrations: Option<Vec<MigrationInfo>>,
}

#[derive(Serialize)]
struct MigrationInfo {
    version: i64,
    description: String,
    applied: bool,
}

fn output(resp: Response) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string(&resp).context("Failed to serialize response")?
    );
    Ok(())
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => cmd_list().await,
        Commands::Run => cmd_run().await,
    }
}

async fn get_pool() -> Result<PgPool> {
    let config = Config::from_env()?;
    PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

async fn applied_versions(pool: &PgPool) -> Result<Vec<i64>> {
    let table_exists: bool =
        sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations') IS NOT NULL")
            .fetch_one(pool)
            .await
            .context("Failed to look up migrations table")?;

    if !table_exists {
        return Ok(Vec::new());
    }

    sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success ORDER BY version")
        .fetch_all(pool)
        .await
        .context("Failed to read applied migrations")
}

// ============================================================================
// Commands
// ============================================================================

async fn cmd_list() -> Result<()> {
    let pool = get_pool().await?;
    let applied = applied_versions(&pool).await?;

    let migrations = MIGRATOR
        .iter()
        .map(|m| MigrationInfo {
            version: m.version,
            description: m.description.to_string(),
            applied: applied.contains(&m.version),
        })
        .collect();

    output(Response {
        success: true,
        message: None,
        migrations: Some(migrations),
    })
}

async fn cmd_run() -> Result<()> {
    let pool = get_pool().await?;
    let before = applied_versions(&pool).await?.len();

    if let Err(e) = MIGRATOR.run(&pool).await {
        return output(Response {
            success: false,
            message: Some(format!("Migration failed: {}", e)),
            migrations: None,
        });
    }

    let after = applied_versions(&pool).await?.len();
    output(Response {
        success: true,
        message: Some(format!("Applied {} migration(s)", after.saturating_sub(before))),
        migrations: None,
    })
}
