//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `PUPPY_CARE` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use puppy_care::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Storage backend: {}", config.storage.backend);
//! ```

mod database;
mod error;
mod logging;
mod storage;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields an in-memory
/// service logging at `info`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Repository backend selection
    pub storage: StorageConfig,

    /// PostgreSQL connection, required for the `postgres` backend
    pub database: DatabaseConfig,

    /// Log level and output format
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PUPPY_CARE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PUPPY_CARE__STORAGE__BACKEND=postgres` -> `storage.backend = postgres`
    /// - `PUPPY_CARE__DATABASE__URL=...` -> `database.url = ...`
    /// - `PUPPY_CARE__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PUPPY_CARE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// The database section is only checked when the postgres backend is
    /// selected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.storage.uses_postgres() {
            self.database.validate()?;
        }
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "PUPPY_CARE__STORAGE__BACKEND",
        "PUPPY_CARE__DATABASE__URL",
        "PUPPY_CARE__DATABASE__MAX_CONNECTIONS",
        "PUPPY_CARE__DATABASE__RUN_MIGRATIONS",
        "PUPPY_CARE__LOGGING__LEVEL",
        "PUPPY_CARE__LOGGING__FORMAT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_postgres_settings() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PUPPY_CARE__STORAGE__BACKEND", "postgres");
        env::set_var("PUPPY_CARE__DATABASE__URL", "postgresql://pups@localhost/pups");
        env::set_var("PUPPY_CARE__DATABASE__MAX_CONNECTIONS", "4");
        env::set_var("PUPPY_CARE__DATABASE__RUN_MIGRATIONS", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.storage.uses_postgres());
        assert_eq!(config.database.url, "postgresql://pups@localhost/pups");
        assert_eq!(config.database.max_connections, 4);
        assert!(config.database.run_migrations);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn postgres_without_url_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PUPPY_CARE__STORAGE__BACKEND", "postgres");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn loads_json_logging() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PUPPY_CARE__LOGGING__FORMAT", "json");
        env::set_var("PUPPY_CARE__LOGGING__LEVEL", "debug");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn unknown_backend_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PUPPY_CARE__STORAGE__BACKEND", "cassandra");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
