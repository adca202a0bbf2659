// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Couple-Sync API Server
//!
//! Computes joint check-in streaks and dashboard summaries for couples and
//! serves the date planner catalog.

use couple_sync::{config::Config, services::DatePlannerService, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Couple-Sync API");

    let date_planner = match &config.date_ideas_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading date ideas");
            DatePlannerService::load_from_file(path)?
        }
        None => DatePlannerService::builtin(),
    };
    tracing::info!(count = date_planner.len(), "Date planner ready");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        date_planner,
    });

    // Build router
    let app = couple_sync::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("couple_sync=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .try_init()?;
    Ok(())
}
