mod catalog;
mod config;
mod errors;
mod extract;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::matching::ranker::{JobMatcher, KeywordMatcher};
use crate::matching::scorer::ScoringConfig;
use crate::matching::tokenizer::Tokenizer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Referral API v{}", env!("CARGO_PKG_VERSION"));

    // Load the job catalog snapshot (seed data unless JOBS_FILE is set)
    let catalog = JobCatalog::load(config.jobs_file.as_deref())?;
    info!(
        "Job catalog v{} ready ({} jobs)",
        catalog.version,
        catalog.len()
    );

    // Initialize matcher (KeywordMatcher by default — swap for TF-IDF / embeddings later)
    let matcher = KeywordMatcher::new(ScoringConfig::v1(), Tokenizer::default());
    info!("Matcher initialized (algorithm: {})", matcher.algorithm());

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        matcher: Arc::new(matcher),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
