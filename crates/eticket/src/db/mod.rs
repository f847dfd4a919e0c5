//! Database module for the E-Ticket console.
//!
//! This module provides the connection pool, the schema definition,
//! the dummy data set, row models and the hand-written queries.

pub mod models;
pub mod pool;
pub mod queries;
pub mod schema;
pub mod seed;

pub use pool::{create_pool, health_check, DbPool};
