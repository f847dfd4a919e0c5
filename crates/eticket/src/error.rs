//! Error types for the E-Ticket console.

use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Not found error
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Validation error (bad user input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Console I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// The message to show a user for this error.
    ///
    /// Database errors carry the server's own message (e.g. a constraint
    /// violation) without the driver's prefix; everything else uses the
    /// `Display` form.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(sqlx::Error::Database(db_err)) => db_err.message().to_string(),
            AppError::Database(e) => e.to_string(),
            AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::Config(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

impl From<envy::Error> for AppError {
    fn from(err: envy::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
