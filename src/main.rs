use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use api_shared::CheckService;
use medguard_core::{
    config::knowledge_base_path_from_env_value,
    constants::{DEFAULT_REST_ADDR, KNOWLEDGE_BASE_ENV, REST_ADDR_ENV},
    CoreConfig, InteractionEngine,
};

/// Main entry point for the MedGuard application
///
/// Loads the knowledge base once, then serves the REST API (with Swagger UI) until the process
/// is stopped. Every request shares the same read-only knowledge base.
///
/// # Environment Variables
/// - `MEDGUARD_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `MEDGUARD_KNOWLEDGE_BASE`: Optional knowledge base YAML file (default: built-in dataset)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, knowledge base loading or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medguard_run=info".parse()?)
                .add_directive("knowledge=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var(REST_ADDR_ENV).unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let cfg = CoreConfig::new(knowledge_base_path_from_env_value(
        std::env::var(KNOWLEDGE_BASE_ENV).ok(),
    ))?;
    let kb = cfg.load_knowledge_base()?;
    let summary = kb.summary();
    tracing::info!(
        interactions = summary.interactions,
        dosage_rules = summary.dosage_rules,
        alternatives = summary.alternatives,
        "knowledge base ready"
    );

    let service = CheckService::with_defaults(InteractionEngine::new(Arc::new(kb)))?;

    tracing::info!("++ Starting MedGuard REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, router(AppState { service })).await?;

    Ok(())
}
