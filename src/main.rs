use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use payroll_coverage::api::{AppState, create_router};
use payroll_coverage::config::ServerConfig;
use payroll_coverage::error::PayrollError;
use payroll_coverage::source::Snapshot;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to YAML config file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,
    /// Override the listen address from the config file
    #[arg(long)]
    bind: Option<String>,
    /// Override the snapshot directory from the config file
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let mut config = ServerConfig::load(&args.config)?;
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    config.validate()?;

    let snapshot = Snapshot::load(&config.data_dir)?;
    let router = create_router(AppState::new(snapshot));

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| PayrollError::ConfigError {
            message: format!("cannot bind {}: {}", config.bind_address, e),
        })?;
    info!(address = %config.bind_address, "Payroll coverage API listening");

    axum::serve(listener, router).await?;
    Ok(())
}
