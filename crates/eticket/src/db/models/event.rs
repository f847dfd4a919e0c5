//! Events table models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One line of the event listing: id, title and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct EventSummary {
    /// Primary key
    pub event_id: i32,

    /// Event title
    pub title: String,

    /// Category (e.g. "Concert", "Movie")
    #[sqlx(default)]
    pub category: Option<String>,
}

/// A new row for the Events table.
///
/// Empty text fields are stored as NULL, so an empty title is rejected by
/// the `NOT NULL` constraint rather than saved as a blank string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    /// Primary key chosen by the user
    pub event_id: i32,

    /// Must exist in Organizers
    pub organizer_id: i32,

    pub title: Option<String>,

    pub category: Option<String>,

    pub description: Option<String>,
}

impl NewEvent {
    /// Build a new event from raw (already trimmed) text fields.
    pub fn new(
        event_id: i32,
        organizer_id: i32,
        title: &str,
        category: &str,
        description: &str,
    ) -> Self {
        Self {
            event_id,
            organizer_id,
            title: non_empty(title),
            category: non_empty(category),
            description: non_empty(description),
        }
    }
}

/// `None` for blank input, the trimmed text otherwise.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Rows touched by an insert, update or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowsAffected {
    pub rows: u64,
}
