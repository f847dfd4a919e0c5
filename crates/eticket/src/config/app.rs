//! Application configuration for the E-Ticket console.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Environment variables are prefixed with `ETICKET_`:
/// - `ETICKET_LOG`: Log filter used when `RUST_LOG` is unset
///   (default: "warn,eticket=info")
/// - `ETICKET_JSON`: Emit JSON instead of tables for one-shot commands
///   (default: false)
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Tracing filter directive
    #[serde(default = "default_log")]
    pub log: String,

    /// JSON output for one-shot commands
    #[serde(default)]
    pub json: bool,
}

fn default_log() -> String {
    "warn,eticket=info".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `ETICKET_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("ETICKET_").from_env::<AppConfig>()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: default_log(),
            json: false,
        }
    }
}
