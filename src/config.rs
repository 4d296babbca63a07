// src/config.rs
use std::env;
use thiserror::Error;

/// Which repository pair backs the stores. Both satisfy the same contracts;
/// the memory backend exists for tests and for running without a database
/// file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Sqlite,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    store_backend: StoreBackend,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite:cafe.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

impl AppConfig {
    /// Build configuration from environment variables, with sensible
    /// defaults for everything optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let store_backend = match env::var("STORE_BACKEND") {
            Ok(value) => match value.to_lowercase().as_str() {
                "memory" => StoreBackend::Memory,
                "sqlite" => StoreBackend::Sqlite,
                other => {
                    return Err(ConfigError::Invalid(format!(
                        "STORE_BACKEND must be `memory` or `sqlite`, got `{other}`"
                    )));
                }
            },
            Err(_) => StoreBackend::Sqlite,
        };

        Ok(Self {
            database_url,
            listen_addr,
            store_backend,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn store_backend(&self) -> StoreBackend {
        self.store_backend
    }
}
