//! yomi-server - Furigana annotation service
//!
//! Annotates Japanese text with hiragana readings over HTTP. Tiered
//! resolution: bundled lexicon tokenizer (real-time), in-process result
//! cache (best-effort), optional external verification for low-confidence
//! segments.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use yomi_core::{Annotator, ConfidencePolicy, MemoryCache, TokenizerAdapter};
use yomi_server::config::{Cli, ServerConfig};
use yomi_server::services::{HttpVerifier, LexiconTokenizer};
use yomi_server::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Yomi annotation service (yomi-server) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();
    let config = ServerConfig::resolve(&cli);

    // Tokenizer tier: bundled lexicon backend, which reports costs
    let adapter = TokenizerAdapter::new(Arc::new(LexiconTokenizer::new()), ConfidencePolicy::CostBased);
    let mut annotator = Annotator::new(adapter);

    // Cache tier (best-effort)
    if config.cache_enabled {
        annotator = annotator.with_cache(Arc::new(MemoryCache::new(config.cache_capacity)));
        info!("Result cache enabled (capacity {})", config.cache_capacity);
    } else {
        info!("Result cache disabled");
    }

    // Verification tier (optional)
    if let Some(url) = &config.verifier_url {
        let verifier = HttpVerifier::new(url.clone(), config.verifier_timeout_ms)
            .map_err(|e| anyhow::anyhow!("failed to build verifier client: {e}"))?;
        annotator = annotator.with_verifier(Arc::new(verifier));
        info!("Verification tier enabled: {}", url);
    } else {
        info!("Verification tier not configured");
    }

    let state = AppState::new(Arc::new(annotator));
    let app = build_router(state);

    let addr = format!("127.0.0.1:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("yomi-server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
