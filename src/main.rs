//! Customer Registry Service
//!
//! ```text
//!   Client ──▶ listener ──▶ middleware ──▶ router ──▶ handler ──▶ CustomerStore
//!                           (request id,                         (RwLock<BTreeMap>)
//!                            trace, limits,
//!                            metrics)
//! ```

use std::path::PathBuf;

use clap::Parser;

use customer_registry::config::validation::validate_config;
use customer_registry::config::{load_config, ConfigError, RegistryConfig};
use customer_registry::lifecycle::startup;
use customer_registry::observability::logging;

#[derive(Parser)]
#[command(name = "customer-registry")]
#[command(about = "In-memory customer registry over HTTP", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:8000).
    #[arg(short, long)]
    bind: Option<String>,
}

fn load(cli: &Cli) -> Result<RegistryConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RegistryConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load(&cli)?;

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        seed = config.store.seed,
        request_timeout_secs = config.timeouts.request_secs,
        "customer-registry starting"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
