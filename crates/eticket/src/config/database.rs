//! Database configuration for the PostgreSQL connection.

use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

use crate::error::{AppError, AppResult};

/// Database configuration loaded from environment variables.
///
/// Environment variables are prefixed with `POSTGRES_`:
/// - `POSTGRES_HOST`: Database host (default: "localhost")
/// - `POSTGRES_PORT`: Database port (default: "5432")
/// - `POSTGRES_USER`: Database user (required)
/// - `POSTGRES_PASSWORD`: Database password (prompted for when empty)
/// - `POSTGRES_DATABASE`: Database name (default: "eticket")
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database host
    #[serde(default = "default_host")]
    pub host: String,

    /// Database port
    #[serde(default = "default_port")]
    pub port: String,

    /// Database user
    #[serde(default)]
    pub user: String,

    /// Database password
    #[serde(default)]
    pub password: String,

    /// Database name
    #[serde(default = "default_database")]
    pub database: String,

    /// Maximum connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> String {
    "5432".to_string()
}

fn default_database() -> String {
    "eticket".to_string()
}

fn default_max_connections() -> u32 {
    2
}

fn default_acquire_timeout() -> u64 {
    10
}

impl DatabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `POSTGRES_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("POSTGRES_").from_env::<DatabaseConfig>()
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        user: Option<String>,
        database: Option<String>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port.to_string();
        }
        if let Some(user) = user {
            self.user = user;
        }
        if let Some(database) = database {
            self.database = database;
        }
        self
    }

    /// Check the settings that cannot be defaulted.
    pub fn validate(&self) -> AppResult<()> {
        if self.user.trim().is_empty() {
            return Err(AppError::Config("Username is required.".to_string()));
        }
        self.port
            .parse::<u16>()
            .map_err(|_| AppError::Config(format!("Invalid port: {}", self.port)))?;
        Ok(())
    }

    /// Whether a password still has to be supplied.
    pub fn needs_password(&self) -> bool {
        self.password.is_empty()
    }

    /// Get PostgreSQL connection options.
    pub fn connect_options(&self) -> PgConnectOptions {
        let port: u16 = self.port.parse().unwrap_or(5432);

        PgConnectOptions::new()
            .host(&self.host)
            .port(port)
            .username(self.user.trim())
            .password(&self.password)
            .database(&self.database)
    }

    /// Line shown once the connection is established.
    pub fn connected_message(&self) -> String {
        format!("Connected to {} as: {}", self.database, self.user.trim())
    }

    /// Connection URL with the password masked, for logs and messages.
    pub fn display_url(&self) -> String {
        let password = if self.password.is_empty() { "" } else { ":***" };
        format!(
            "postgres://{}{}@{}:{}/{}",
            self.user.trim(),
            password,
            self.host,
            self.port,
            self.database
        )
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: String::new(),
            password: String::new(),
            database: default_database(),
            max_connections: default_max_connections(),
            acquire_timeout: default_acquire_timeout(),
        }
    }
}
