//! Service layer for the E-Ticket console.
//!
//! Services wrap the database queries. The console only sees the
//! [`TicketStore`] trait, which [`Services`] implements over a live pool.

pub mod event;
pub mod report;
pub mod schema;

pub use event::EventService;
pub use report::ReportService;
pub use schema::SchemaService;

use async_trait::async_trait;

use crate::db::models::{DropOutcome, EventSales, EventSummary, NewEvent, SeatAvailability};
use crate::db::DbPool;
use crate::error::AppResult;

/// Every operation the front ends can trigger.
#[async_trait]
pub trait TicketStore: Send + Sync {
    async fn drop_tables(&self) -> Vec<DropOutcome>;

    async fn create_tables(&self) -> AppResult<()>;

    async fn populate_tables(&self) -> AppResult<()>;

    async fn list_events(&self) -> AppResult<Vec<EventSummary>>;

    async fn add_event(&self, event: &NewEvent) -> AppResult<u64>;

    async fn update_event_title(&self, event_id: i32, title: &str) -> AppResult<u64>;

    async fn delete_event(&self, event_id: i32) -> AppResult<u64>;

    async fn search_events(&self, keyword: &str) -> AppResult<Vec<EventSummary>>;

    async fn event_sales(&self) -> AppResult<Vec<EventSales>>;

    async fn seat_availability(&self) -> AppResult<Vec<SeatAvailability>>;
}

/// All services over one connection pool.
#[derive(Clone)]
pub struct Services {
    pub schema: SchemaService,
    pub events: EventService,
    pub reports: ReportService,
}

impl Services {
    pub fn new(pool: DbPool) -> Self {
        Self {
            schema: SchemaService::new(pool.clone()),
            events: EventService::new(pool.clone()),
            reports: ReportService::new(pool),
        }
    }
}

#[async_trait]
impl TicketStore for Services {
    async fn drop_tables(&self) -> Vec<DropOutcome> {
        self.schema.drop_tables().await
    }

    async fn create_tables(&self) -> AppResult<()> {
        self.schema.create_tables().await
    }

    async fn populate_tables(&self) -> AppResult<()> {
        self.schema.populate_tables().await
    }

    async fn list_events(&self) -> AppResult<Vec<EventSummary>> {
        self.events.list().await
    }

    async fn add_event(&self, event: &NewEvent) -> AppResult<u64> {
        self.events.add(event).await
    }

    async fn update_event_title(&self, event_id: i32, title: &str) -> AppResult<u64> {
        self.events.update_title(event_id, title).await
    }

    async fn delete_event(&self, event_id: i32) -> AppResult<u64> {
        self.events.delete(event_id).await
    }

    async fn search_events(&self, keyword: &str) -> AppResult<Vec<EventSummary>> {
        self.events.search_by_title(keyword).await
    }

    async fn event_sales(&self) -> AppResult<Vec<EventSales>> {
        self.reports.event_sales().await
    }

    async fn seat_availability(&self) -> AppResult<Vec<SeatAvailability>> {
        self.reports.seat_availability().await
    }
}
