//! HTTP server for the recommendation engine.
//!
//! Loads the catalog once at startup, then serves `POST /recommend`
//! and `GET /health` until interrupted.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use catalog::ToolCatalog;
use server::{EngineConfig, RecommendationEngine, SuggestionOrder};

/// toolrec-server - serve tool recommendations over HTTP
#[derive(Parser)]
#[command(name = "toolrec-server")]
struct Args {
    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Maximum suggestions per response (1-6)
    #[arg(long, default_value = "6")]
    max_suggestions: usize,

    /// Order matches by catalog weight instead of catalog order
    #[arg(long)]
    weighted: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // A bad catalog is fatal at startup
    let catalog = Arc::new(
        ToolCatalog::load(args.catalog.as_deref()).context("Failed to load tool catalog")?,
    );
    info!("Catalog loaded: {} tools", catalog.len());

    let order = if args.weighted {
        SuggestionOrder::Weighted
    } else {
        SuggestionOrder::Catalog
    };
    let config = EngineConfig::new(args.max_suggestions, order);
    let engine = Arc::new(RecommendationEngine::with_config(catalog, config));

    let listener = TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    info!("Listening on {} ({:?})", args.bind, config);

    axum::serve(listener, server::router(engine))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
