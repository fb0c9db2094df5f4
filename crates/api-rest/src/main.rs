//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development when only the REST surface is wanted. The workspace's main
//! `medguard-run` binary also loads `.env` files before starting the same router.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use api_shared::CheckService;
use medguard_core::{
    config::knowledge_base_path_from_env_value,
    constants::{DEFAULT_REST_ADDR, KNOWLEDGE_BASE_ENV, REST_ADDR_ENV},
    CoreConfig, InteractionEngine,
};

/// Main entry point for the MedGuard REST API server
///
/// # Environment Variables
/// - `MEDGUARD_REST_ADDR`: Server address (default: "0.0.0.0:8000")
/// - `MEDGUARD_KNOWLEDGE_BASE`: Optional knowledge base YAML file
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the knowledge base cannot be loaded,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var(REST_ADDR_ENV).unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let cfg = CoreConfig::new(knowledge_base_path_from_env_value(
        std::env::var(KNOWLEDGE_BASE_ENV).ok(),
    ))?;
    let kb = cfg.load_knowledge_base()?;
    let service = CheckService::with_defaults(InteractionEngine::new(Arc::new(kb)))?;

    tracing::info!("-- Starting MedGuard REST API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(AppState { service })).await?;

    Ok(())
}
