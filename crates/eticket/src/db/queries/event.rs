//! Events table queries.

use crate::db::models::{EventSummary, NewEvent};
use crate::db::DbPool;
use crate::error::AppResult;

/// List every event ordered by id.
pub async fn list_events(pool: &DbPool) -> AppResult<Vec<EventSummary>> {
    let events = sqlx::query_as::<_, EventSummary>(
        r#"
        SELECT EventID AS event_id, Title AS title, Category AS category
        FROM Events
        ORDER BY EventID
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(events)
}

/// Insert a new event. Returns the number of rows inserted.
pub async fn insert_event(pool: &DbPool, event: &NewEvent) -> AppResult<u64> {
    let result = sqlx::query(
        r#"
        INSERT INTO Events (EventID, OrganizerID, Title, Category, Description)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(event.event_id)
    .bind(event.organizer_id)
    .bind(event.title.as_deref())
    .bind(event.category.as_deref())
    .bind(event.description.as_deref())
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Set the title of an event. Returns the number of rows updated.
pub async fn update_event_title(pool: &DbPool, event_id: i32, title: Option<&str>) -> AppResult<u64> {
    let result = sqlx::query(
        r#"
        UPDATE Events
        SET Title = $1
        WHERE EventID = $2
        "#,
    )
    .bind(title)
    .bind(event_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete an event by id. Returns the number of rows deleted.
///
/// Fails with a foreign-key violation while showtimes still point at it.
pub async fn delete_event(pool: &DbPool, event_id: i32) -> AppResult<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM Events
        WHERE EventID = $1
        "#,
    )
    .bind(event_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Events whose lower-cased title matches a `LIKE` pattern.
pub async fn search_events_by_title(pool: &DbPool, pattern: &str) -> AppResult<Vec<EventSummary>> {
    let events = sqlx::query_as::<_, EventSummary>(
        r#"
        SELECT EventID AS event_id, Title AS title, Category AS category
        FROM Events
        WHERE LOWER(Title) LIKE $1
        ORDER BY EventID
        "#,
    )
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(events)
}
