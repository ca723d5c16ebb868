use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

/// Application configuration
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Database host
    pub pg_host: String,

    /// Database port
    pub pg_port: u16,

    /// Database name
    pub pg_database: String,

    /// Database user
    pub pg_user: String,

    /// Database password
    pub pg_password: String,

    /// Upper bound on pooled connections
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,

    /// Seconds to wait for a pooled connection before failing the query
    #[serde(default = "default_db_acquire_timeout_secs")]
    pub db_acquire_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        Self::from_vars(std::env::vars())
    }

    /// Build the configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        match envy::from_iter::<_, Config>(vars) {
            Ok(config) => {
                info!("✅ Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                error!("❌ Failed to load configuration: {}", e);
                Err(ConfigError::EnvError(e))
            }
        }
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Connection options for the items database
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.pg_host)
            .port(self.pg_port)
            .database(&self.pg_database)
            .username(&self.pg_user)
            .password(&self.pg_password)
    }

    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("pg_host", &self.pg_host)
            .field("pg_port", &self.pg_port)
            .field("pg_database", &self.pg_database)
            .field("pg_user", &self.pg_user)
            .field("pg_password", &"***")
            .field("db_max_connections", &self.db_max_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvError(#[from] envy::Error),
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_db_max_connections() -> u32 {
    20
}

fn default_db_acquire_timeout_secs() -> u64 {
    30
}
