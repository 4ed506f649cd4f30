mod api;
mod error;
mod main_lib;

use std::sync::Arc;

use anyhow::Context;
use stratmap_core::db;
use tracing_subscriber::EnvFilter;

use crate::main_lib::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "stratmap.db".to_string());
    let pool = Arc::new(db::create_pool(&database_url).context("Failed to create database pool")?);
    db::run_migrations(&pool).context("Failed to run database migrations")?;

    let state = Arc::new(AppState::new(pool));
    let app = main_lib::build_router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = format!("0.0.0.0:{}", port);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
