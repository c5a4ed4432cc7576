//! Application configuration.
//!
//! Values come from defaults overridden by `BOOKSHELF_*` environment
//! variables. A `.env` file (or `.env.<RUN_MODE>`) is read first if present.

use serde::Deserialize;
use std::env;

use crate::storage::connection::DEFAULT_DATABASE_URL;

/// Which [`crate::storage::BookStorage`] implementation to run with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub storage: StorageBackend,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl AppConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load the `.env` file for the current run mode, if any
pub fn load_dotenv() {
    let env_filename = env::var("RUN_MODE")
        .map(|mode| format!(".env.{}", mode))
        .unwrap_or_else(|_| ".env".into());

    dotenvy::from_filename(env_filename).ok();
}

pub fn load_config() -> Result<AppConfig, config::ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
    build_config(&run_mode, config::Environment::with_prefix("BOOKSHELF").try_parsing(true))
}

fn build_config(run_mode: &str, environment: config::Environment) -> Result<AppConfig, config::ConfigError> {
    let default_host = if run_mode == "production" { "0.0.0.0" } else { "127.0.0.1" };

    config::Config::builder()
        .set_default("host", default_host)?
        .set_default("port", 9000)?
        .set_default("database_url", DEFAULT_DATABASE_URL)?
        .set_default("storage", "sqlite")?
        .set_default("log_level", "info")?
        .add_source(environment)
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("BOOKSHELF")
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn test_default_config() {
        let config = build_config("development", environment(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_url, "sqlite:bookshelf.db");
        assert_eq!(config.storage, StorageBackend::Sqlite);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_production_binds_all_interfaces() {
        let config = build_config("production", environment(&[])).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_environment_overrides() {
        let config = build_config(
            "development",
            environment(&[
                ("BOOKSHELF_PORT", "5000"),
                ("BOOKSHELF_STORAGE", "memory"),
                ("BOOKSHELF_DATABASE_URL", "sqlite:other.db"),
            ]),
        )
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.database_url, "sqlite:other.db");
    }

    #[test]
    fn test_unknown_storage_is_rejected() {
        let result = build_config("development", environment(&[("BOOKSHELF_STORAGE", "mongo")]));
        assert!(result.is_err());
    }
}
