//! Database queries, organized by table group.

pub mod event;
pub mod report;
pub mod schema;
