mod config;
mod db;
mod errors;
mod models;
mod routes;
mod scoring;
mod state;
mod store;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::{Config, StorageBackend};
use crate::db::create_pool;
use crate::routes::build_router;
use crate::scoring::analyzer::RuleBasedAnalyzer;
use crate::state::AppState;
use crate::store::blob::{BlobStore, MemoryBlobStore, PgBlobStore, RedisBlobStore};
use crate::store::ResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing backend URL)
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

    info!("Starting Scrollify API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize résumé storage
    let blobs = build_blob_store(&config).await?;
    info!("Resume store backend: {}", blobs.backend());
    let store = Arc::new(ResumeStore::new(blobs, config.max_resumes_per_user));

    // Initialize analyzer (rule-based; optional simulated latency)
    let analyzer = Arc::new(RuleBasedAnalyzer::new(config.analysis_delay));
    info!(
        "Analyzer initialized (delay: {}ms)",
        config.analysis_delay.as_millis()
    );

    // Build app state
    let state = AppState {
        store,
        analyzer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the web client's origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Connects the blob backend selected by `STORAGE_BACKEND`.
async fn build_blob_store(config: &Config) -> Result<Arc<dyn BlobStore>> {
    let blobs: Arc<dyn BlobStore> = match config.storage_backend {
        StorageBackend::Memory => Arc::new(MemoryBlobStore::new()),
        StorageBackend::Redis => {
            let url = config.redis_url.as_deref().context("REDIS_URL is not set")?;
            Arc::new(RedisBlobStore::connect(url).await?)
        }
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is not set")?;
            let pool = create_pool(url).await?;
            Arc::new(PgBlobStore::new(pool).await?)
        }
    };
    Ok(blobs)
}
