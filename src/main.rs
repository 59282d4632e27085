//! Lectern - flat-file library catalog and loan manager

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lectern::{
    config::AppConfig,
    repository::Repository,
    services::Services,
    shell::Shell,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing; logs go to stderr so the menu owns stdout
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("lectern={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Lectern v{}", env!("CARGO_PKG_VERSION"));

    // Open both stores; a missing or unreadable store is fatal here
    let repository = Repository::open(&config.storage)?;
    let mut services = Services::open(repository)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    shell.run(&mut services)?;

    // Persist everything; save errors propagate with no recovery
    services.shutdown()?;
    tracing::info!("Catalog and loan registry saved, exiting");

    Ok(())
}
