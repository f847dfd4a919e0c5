//! Row models for the E-Ticket console.

pub mod event;
pub mod report;
pub mod schema;

pub use event::*;
pub use report::*;
pub use schema::*;
