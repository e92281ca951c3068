//! API configuration

use core_kernel::CoreError;
use infra_db::DatabaseConfig;
use serde::Deserialize;
use tracing::warn;

/// Development-only signing secret used when `API_JWT_SECRET` is unset
pub const DEFAULT_JWT_SECRET: &str = "change-me-in-production";

/// API configuration
///
/// Loaded from `API_`-prefixed environment variables; every field has a
/// default so a bare environment still yields a usable development setup.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JWT secret for authentication
    pub jwt_secret: String,
    /// JWT expiration in seconds
    pub jwt_expiration_secs: u64,
    /// Database URL
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            jwt_expiration_secs: 3600,
            database_url: "postgres://localhost/products".to_string(),
            db_max_connections: 10,
            db_min_connections: 2,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    ///
    /// `API_PORT=9090` overrides `port`, `API_DATABASE_URL` overrides
    /// `database_url`, and so on.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("jwt_secret", defaults.jwt_secret)?
            .set_default("jwt_expiration_secs", defaults.jwt_expiration_secs as i64)?
            .set_default("database_url", defaults.database_url)?
            .set_default("db_max_connections", i64::from(defaults.db_max_connections))?
            .set_default("db_min_connections", i64::from(defaults.db_min_connections))?
            .set_default("log_level", defaults.log_level)?
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Checks the values that would otherwise fail late at runtime
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` describing the first bad value.
    /// The built-in development secret is accepted but logged as a warning.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(CoreError::configuration("jwt_secret must not be empty"));
        }
        if self.uses_default_secret() {
            warn!("jwt_secret is the built-in development default; set API_JWT_SECRET");
        }
        if self.db_max_connections == 0 {
            return Err(CoreError::configuration("db_max_connections must be at least 1"));
        }
        if self.db_min_connections > self.db_max_connections {
            return Err(CoreError::configuration(format!(
                "db_min_connections ({}) exceeds db_max_connections ({})",
                self.db_min_connections, self.db_max_connections
            )));
        }
        Ok(())
    }

    /// Returns true while tokens are signed with [`DEFAULT_JWT_SECRET`]
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the connection pool settings
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.clone())
            .max_connections(self.db_max_connections)
            .min_connections(self.db_min_connections)
    }
}
