//! Configuration Module
//!
//! Handles loading and validating service configuration from environment
//! variables. Connection settings are names only: this sample never dials
//! external services, but the validation mirrors what a real deployment
//! would require.

use std::env;

use crate::error::{LookupError, Result};

// == Provider Mode ==
/// Selects how collaborators are wired at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderMode {
    /// Contract-verification mode: collaborators are in-memory stand-ins
    /// seeded with the fixture item; connection settings are not required.
    Contract,
    /// Normal mode: all connection settings must be present.
    Live,
}

// == Config ==
/// Service configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Document store connection string
    pub store_connection: String,
    /// Document store database name
    pub store_database: String,
    /// Document store container name
    pub store_container: String,
    /// Cache connection string
    pub cache_connection: String,
    /// HTTP server port
    pub server_port: u16,
    /// Collaborator wiring mode
    pub mode: ProviderMode,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `STORE_CONNECTION` - Document store connection string
    /// - `STORE_DATABASE` - Document store database name
    /// - `STORE_CONTAINER` - Document store container name
    /// - `CACHE_CONNECTION` - Cache connection string
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `ENVIRONMENT` - "contract" selects contract-verification mode
    pub fn from_env() -> Self {
        let mode = match env::var("ENVIRONMENT") {
            Ok(v) if v.eq_ignore_ascii_case("contract") => ProviderMode::Contract,
            _ => ProviderMode::Live,
        };

        Self {
            store_connection: env::var("STORE_CONNECTION").unwrap_or_default(),
            store_database: env::var("STORE_DATABASE").unwrap_or_default(),
            store_container: env::var("STORE_CONTAINER").unwrap_or_default(),
            cache_connection: env::var("CACHE_CONNECTION").unwrap_or_default(),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            mode,
        }
    }

    /// Validates the configuration, failing fast on missing values.
    ///
    /// In live mode every connection setting is required; contract mode wires
    /// in-memory stand-ins and needs none of them.
    pub fn validate(&self) -> Result<()> {
        if self.mode == ProviderMode::Contract {
            return Ok(());
        }

        let required = [
            ("STORE_CONNECTION", &self.store_connection),
            ("STORE_DATABASE", &self.store_database),
            ("STORE_CONTAINER", &self.store_container),
            ("CACHE_CONNECTION", &self.cache_connection),
        ];

        for (name, value) in required {
            if value.is_empty() {
                return Err(LookupError::Configuration(format!(
                    "{} is not set",
                    name
                )));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_connection: String::new(),
            store_database: String::new(),
            store_container: String::new(),
            cache_connection: String::new(),
            server_port: 3000,
            mode: ProviderMode::Live,
        }
    }
}
