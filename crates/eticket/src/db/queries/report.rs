//! Read-only reports across the ticketing tables.

use crate::db::models::{EventSales, SeatAvailability};
use crate::db::DbPool;
use crate::error::AppResult;

/// Tickets sold and revenue per event, including events with no sales.
pub async fn event_sales(pool: &DbPool) -> AppResult<Vec<EventSales>> {
    let rows = sqlx::query_as::<_, EventSales>(
        r#"
        SELECT e.EventID AS event_id,
               e.Title AS title,
               COUNT(t.TicketID) AS tickets_sold,
               COALESCE(SUM(t.TicketPrice), 0)::FLOAT8 AS revenue
        FROM Events e
        LEFT JOIN Showtimes s ON s.EventID = e.EventID
        LEFT JOIN Tickets t ON t.ShowtimeID = s.ShowtimeID
        GROUP BY e.EventID, e.Title
        ORDER BY e.EventID
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Seat-map status counts per showtime.
pub async fn seat_availability(pool: &DbPool) -> AppResult<Vec<SeatAvailability>> {
    let rows = sqlx::query_as::<_, SeatAvailability>(
        r#"
        SELECT s.ShowtimeID AS showtime_id,
               e.Title AS title,
               s.StartDateTime AS starts_at,
               COUNT(*) FILTER (WHERE m.Status = 'AVAILABLE') AS available,
               COUNT(*) FILTER (WHERE m.Status = 'HELD') AS held,
               COUNT(*) FILTER (WHERE m.Status = 'SOLD') AS sold
        FROM Showtimes s
        JOIN Events e ON e.EventID = s.EventID
        LEFT JOIN SeatMaps m ON m.ShowtimeID = s.ShowtimeID
        GROUP BY s.ShowtimeID, e.Title, s.StartDateTime
        ORDER BY s.ShowtimeID
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
