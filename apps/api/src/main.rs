mod config;
mod errors;
mod extraction;
mod generation;
mod llm_client;
mod models;
mod ocr;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::ResumeExtractor;
use crate::generation::fit_scoring::KeywordFitScorer;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::RecordStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentFlow API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize JSON record storage
    let store = RecordStore::new(&config.data_dir);
    store.init()?;
    info!("Record store initialized at {}", config.data_dir);

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize the extraction pipeline
    let extractor = ResumeExtractor::new(llm.clone())
        .with_max_workers(config.max_workers)
        .with_min_chars_per_page(config.min_chars_per_page)
        .with_ocr_strategy(config.ocr_strategy);
    info!(
        "Extractor configured: {} workers, {:?} OCR",
        config.max_workers, config.ocr_strategy
    );

    // Initialize fit scorer (KeywordFitScorer by default)
    let fit_scorer = Arc::new(KeywordFitScorer);

    // Build app state
    let state = AppState {
        llm,
        extractor,
        store,
        fit_scorer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
