use anyhow::anyhow;
use dotenvy::dotenv;

mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, startup::Startup};

/// Recipe core host
///
/// Wires the catalog, favorites and search use cases to their adapters and
/// loads the catalog once. UI layers embed the same `DependencyContainer`.
/// - config/: environment configuration (bundle location, favorites store)
/// - setup/: dependency injection and startup
fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, so RUST_LOG may come from .env too
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise tracing: {e}"))?;

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Load catalog and report
    let summary = Startup::run(&config, &container);
    if summary.recipes == 0 {
        tracing::warn!(
            dir = %config.catalog.recipes_dir.display(),
            resource = %config.catalog.resource_name,
            "Catalog is empty; check RECIPES_DIR and RECIPES_RESOURCE"
        );
    }

    Ok(())
}
