//! E-Ticket System Library
//!
//! Schema administration and Events queries for a small event-ticketing
//! database, driven from a text console:
//!
//! - **Schema**: drop, create and populate the ten reservation tables
//! - **Events**: list, add, retitle, delete and search events
//! - **Reports**: ticket sales per event, seat availability per showtime
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from environment variables
//! - [`db`]: Schema definition, dummy data, pool and queries
//! - [`services`]: Operations over the pool and the [`services::TicketStore`] seam
//! - [`console`]: Menu loop and table rendering
//! - [`error`]: Custom error types
//!
//! ## Example
//!
//! ```ignore
//! use eticket::{config::DatabaseConfig, console::Console, db::create_pool, services::Services};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let db_config = DatabaseConfig::from_env()?;
//!     let services = Services::new(create_pool(&db_config).await?);
//!     let stdin = std::io::stdin();
//!     Console::new(&services, stdin.lock(), std::io::stdout()).run().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod result_ext;
pub mod services;

pub use error::{AppError, AppResult};
pub use result_ext::ResultExt;
