//! Service entry point: configuration, logging, wiring.

use std::process::ExitCode;

use thiserror::Error;

use puppy_care::config::{AppConfig, ConfigError};
use puppy_care::container::AppContainer;
use puppy_care::domain::foundation::DomainError;
use puppy_care::telemetry;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to initialise logging: {0}")]
    Telemetry(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("Failed to build application: {0}")]
    Container(#[from] DomainError),
}

async fn start() -> Result<AppContainer, StartupError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    telemetry::init_tracing(&config.logging)?;

    let container = AppContainer::build(&config).await?;
    tracing::info!(
        backend = %config.storage.backend,
        log_format = ?config.logging.format,
        "Puppy care service ready"
    );
    Ok(container)
}

#[tokio::main]
async fn main() -> ExitCode {
    match start().await {
        Ok(_container) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("puppy-care: {}", e);
            ExitCode::FAILURE
        }
    }
}
