//! Event service: CRUD and title search over the Events table.

use crate::db::models::{non_empty, EventSummary, NewEvent};
use crate::db::queries::event as queries;
use crate::db::DbPool;
use crate::error::AppResult;

/// Service for Events operations.
#[derive(Clone)]
pub struct EventService {
    pool: DbPool,
}

impl EventService {
    /// Create a new event service.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<EventSummary>> {
        queries::list_events(&self.pool).await
    }

    /// Insert an event. Returns the number of rows inserted.
    pub async fn add(&self, event: &NewEvent) -> AppResult<u64> {
        let rows = queries::insert_event(&self.pool, event).await?;
        tracing::info!(event_id = event.event_id, rows, "Event inserted");
        Ok(rows)
    }

    /// Retitle an event. Returns 0 when no event has that id.
    pub async fn update_title(&self, event_id: i32, title: &str) -> AppResult<u64> {
        let title = non_empty(title);
        let rows = queries::update_event_title(&self.pool, event_id, title.as_deref()).await?;
        tracing::info!(event_id, rows, "Event title updated");
        Ok(rows)
    }

    /// Delete an event. Returns 0 when no event has that id.
    pub async fn delete(&self, event_id: i32) -> AppResult<u64> {
        let rows = queries::delete_event(&self.pool, event_id).await?;
        tracing::info!(event_id, rows, "Event deleted");
        Ok(rows)
    }

    /// Case-insensitive substring search on the title.
    pub async fn search_by_title(&self, keyword: &str) -> AppResult<Vec<EventSummary>> {
        let pattern = search_pattern(keyword);
        tracing::debug!(pattern = %pattern, "Searching events");
        queries::search_events_by_title(&self.pool, &pattern).await
    }
}

/// `LIKE` pattern matching titles that contain `keyword`, ignoring case.
///
/// The keyword is trimmed and lower-cased; `%` and `_` inside it keep
/// their wildcard meaning.
pub fn search_pattern(keyword: &str) -> String {
    format!("%{}%", keyword.trim().to_lowercase())
}
