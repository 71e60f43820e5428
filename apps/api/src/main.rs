mod analysis;
mod config;
mod errors;
mod llm_client;
mod quotes;
mod routes;
mod sessions;
mod speech;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::intel::GeminiIntel;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::sessions::SessionStore;
use crate::state::AppState;

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

    info!("Starting Illuminator API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the Gemini-backed intelligence provider
    let llm = LlmClient::new(config.gemini_api_key.clone());
    let intel: Arc<dyn analysis::intel::CareerIntel> = Arc::new(GeminiIntel::new(llm));
    info!(
        "LLM client initialized (analysis: {}, trends: {}, speech: {})",
        llm_client::ANALYSIS_MODEL,
        llm_client::TRENDS_MODEL,
        llm_client::TTS_MODEL
    );

    // Build app state
    let state = AppState {
        intel,
        sessions: SessionStore::new(),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
