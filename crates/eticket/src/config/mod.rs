//! Configuration module for the E-Ticket console.
//!
//! Settings come from environment variables (optionally seeded from a
//! `.env` file) using the `envy` crate, and command-line flags may
//! override the connection settings afterwards.

mod app;
mod database;

pub use app::AppConfig;
pub use database::DatabaseConfig;
