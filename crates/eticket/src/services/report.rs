//! Report service.

use crate::db::models::{EventSales, SeatAvailability};
use crate::db::queries::report as queries;
use crate::db::DbPool;
use crate::error::AppResult;

#[derive(Clone)]
pub struct ReportService {
    pool: DbPool,
}

impl ReportService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn event_sales(&self) -> AppResult<Vec<EventSales>> {
        queries::event_sales(&self.pool).await
    }

    pub async fn seat_availability(&self) -> AppResult<Vec<SeatAvailability>> {
        queries::seat_availability(&self.pool).await
    }
}
