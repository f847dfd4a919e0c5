//! Report row models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Tickets sold and revenue for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EventSales {
    pub event_id: i32,

    pub title: String,

    /// Number of tickets across all showtimes of the event
    pub tickets_sold: i64,

    /// Sum of ticket prices, 0 when nothing was sold
    pub revenue: f64,
}

/// Seat-map status counts for one showtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SeatAvailability {
    pub showtime_id: i32,

    /// Title of the event being shown
    pub title: String,

    pub starts_at: NaiveDateTime,

    pub available: i64,

    pub held: i64,

    pub sold: i64,
}

impl SeatAvailability {
    /// Seats with any seat-map entry for this showtime.
    pub fn total(&self) -> i64 {
        self.available + self.held + self.sold
    }
}
