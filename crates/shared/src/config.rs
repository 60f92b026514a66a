//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Money;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// JWT configuration.
    pub jwt: JwtConfig,
    /// Ledger presentation settings.
    #[serde(default)]
    pub ledger: LedgerConfig,
    /// Multi-gym fan-out settings.
    #[serde(default)]
    pub collector: CollectorConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// JWT configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Access token expiration in seconds.
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry_secs: u64,
}

fn default_access_token_expiry() -> u64 {
    900 // 15 minutes
}

/// Ledger presentation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Salary shown for trainers without a configured salary.
    ///
    /// Display fallback only; never persisted.
    #[serde(default = "default_salary")]
    pub default_salary: Decimal,
    /// ISO 4217 code of the deployment currency.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_salary() -> Decimal {
    Decimal::from(25_000)
}

fn default_currency() -> String {
    "IDR".to_string()
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_salary: default_salary(),
            currency: default_currency(),
        }
    }
}

impl LedgerConfig {
    /// Returns the fallback salary as money.
    #[must_use]
    pub fn default_salary(&self) -> Money {
        Money::new(self.default_salary)
    }
}

/// Settings for fetching many gyms at once.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectorConfig {
    /// Maximum number of gyms fetched concurrently.
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,
    /// Per-gym fetch timeout in milliseconds.
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
}

fn default_max_concurrent_fetches() -> usize {
    8
}

fn default_fetch_timeout_ms() -> u64 {
    5_000
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: default_max_concurrent_fetches(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("GYMLEDGER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
