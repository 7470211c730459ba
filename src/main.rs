//! MercRent API - Main Application Entry Point
//!
//! A small REST API for a car-rental service. It stores car inventory and customer bookings in a
//! document store and exposes endpoints to create cars, list them with exact-match filters, and
//! create bookings.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: JSONB documents in PostgreSQL via sqlx, one collection per record type
//! - **Validation**: per-field rules applied to raw JSON before anything is stored
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create the (lazy) database connection pool, if `DATABASE_URL` is set
//! 3. Start applying database migrations in the background (retried on first store use)
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;
mod validation;

use tracing_subscriber::EnvFilter;

use crate::{state::AppState, store::postgres::PostgresStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let state = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = db::create_pool(database_url, config.database_max_connections)?;
            tracing::info!(host = ?config.database_host(), "Database pool created");

            let store = PostgresStore::new(pool);

            // Prepare the schema in the background so an unreachable database does not hold up
            // the listener. The store retries on first use if this attempt fails.
            let warmup = store.clone();
            tokio::spawn(async move {
                if let Err(e) = warmup.ensure_schema().await {
                    tracing::warn!(error = %e, "Database migrations failed, retrying on first use");
                }
            });

            AppState::with_store(store)
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, store operations will fail");
            AppState::default()
        }
    };

    let app = routes::router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
