use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::Console;
use crate::db::models::{DropOutcome, EventSales, EventSummary, NewEvent, SeatAvailability};
use crate::db::schema::{drop_order, drop_statement};
use crate::error::{AppError, AppResult};
use crate::services::event::search_pattern;
use crate::services::TicketStore;

/// In-memory stand-in for the database.
///
/// Only the Events table is modelled; event 1 is treated as referenced by a
/// showtime so deleting it fails like a foreign-key violation.
#[derive(Default)]
struct MemoryStore {
    created: Mutex<bool>,
    events: Mutex<Vec<EventSummary>>,
}

impl MemoryStore {
    fn seeded() -> Self {
        let store = Self::default();
        *store.created.lock().unwrap() = true;
        *store.events.lock().unwrap() = vec![
            summary(1, "Drake Live Concert", Some("Concert")),
            summary(2, "Avengers: Endgame", Some("Movie")),
        ];
        store
    }

    fn missing_tables() -> AppError {
        AppError::Validation("relation \"events\" does not exist".to_string())
    }

    fn titles(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.title.clone())
            .collect()
    }
}

fn summary(id: i32, title: &str, category: Option<&str>) -> EventSummary {
    EventSummary {
        event_id: id,
        title: title.to_string(),
        category: category.map(str::to_string),
    }
}

#[async_trait]
impl TicketStore for MemoryStore {
    async fn drop_tables(&self) -> Vec<DropOutcome> {
        let mut created = self.created.lock().unwrap();
        let outcomes = drop_order()
            .map(|table| {
                let sql = drop_statement(table);
                if *created {
                    DropOutcome::Dropped { sql }
                } else {
                    DropOutcome::Skipped {
                        sql,
                        reason: format!("table \"{}\" does not exist", table.name.to_lowercase()),
                    }
                }
            })
            .collect();
        *created = false;
        self.events.lock().unwrap().clear();
        outcomes
    }

    async fn create_tables(&self) -> AppResult<()> {
        let mut created = self.created.lock().unwrap();
        if *created {
            return Err(AppError::Validation(
                "relation \"users\" already exists".to_string(),
            ));
        }
        *created = true;
        Ok(())
    }

    async fn populate_tables(&self) -> AppResult<()> {
        if !*self.created.lock().unwrap() {
            return Err(Self::missing_tables());
        }
        let mut events = self.events.lock().unwrap();
        if !events.is_empty() {
            return Err(AppError::Validation(
                "duplicate key value violates unique constraint \"pk_users\"".to_string(),
            ));
        }
        events.push(summary(1, "Drake Live Concert", Some("Concert")));
        events.push(summary(2, "Avengers: Endgame", Some("Movie")));
        Ok(())
    }

    async fn list_events(&self) -> AppResult<Vec<EventSummary>> {
        if !*self.created.lock().unwrap() {
            return Err(Self::missing_tables());
        }
        Ok(self.events.lock().unwrap().clone())
    }

    async fn add_event(&self, event: &NewEvent) -> AppResult<u64> {
        let mut events = self.events.lock().unwrap();
        let Some(title) = event.title.clone() else {
            return Err(AppError::Validation(
                "null value in column \"title\" violates not-null constraint".to_string(),
            ));
        };
        if events.iter().any(|e| e.event_id == event.event_id) {
            return Err(AppError::Validation(
                "duplicate key value violates unique constraint \"pk_events\"".to_string(),
            ));
        }
        events.push(EventSummary {
            event_id: event.event_id,
            title,
            category: event.category.clone(),
        });
        events.sort_by_key(|e| e.event_id);
        Ok(1)
    }

    async fn update_event_title(&self, event_id: i32, title: &str) -> AppResult<u64> {
        let mut events = self.events.lock().unwrap();
        match events.iter_mut().find(|e| e.event_id == event_id) {
            Some(_) if title.trim().is_empty() => Err(AppError::Validation(
                "null value in column \"title\" violates not-null constraint".to_string(),
            )),
            Some(event) => {
                event.title = title.trim().to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_event(&self, event_id: i32) -> AppResult<u64> {
        if event_id == 1 {
            return Err(AppError::Validation(
                "update or delete on table \"events\" violates foreign key constraint \"fk_showtimes_event\" on table \"showtimes\"".to_string(),
            ));
        }
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.event_id != event_id);
        Ok((before - events.len()) as u64)
    }

    async fn search_events(&self, keyword: &str) -> AppResult<Vec<EventSummary>> {
        let pattern = search_pattern(keyword);
        let needle = pattern.trim_matches('%');
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.title.to_lowercase().contains(needle))
            .cloned()
            .collect())
    }

    async fn event_sales(&self) -> AppResult<Vec<EventSales>> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .map(|e| EventSales {
                event_id: e.event_id,
                title: e.title.clone(),
                tickets_sold: if e.event_id == 1 { 1 } else { 0 },
                revenue: if e.event_id == 1 { 150.0 } else { 0.0 },
            })
            .collect())
    }

    async fn seat_availability(&self) -> AppResult<Vec<SeatAvailability>> {
        let starts_at = NaiveDate::from_ymd_opt(2025, 3, 20)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap();
        Ok(vec![SeatAvailability {
            showtime_id: 1,
            title: "Drake Live Concert".to_string(),
            starts_at,
            available: 1,
            held: 0,
            sold: 0,
        }])
    }
}

async fn run_menu(store: &MemoryStore, input: &str) -> String {
    let mut out = Vec::new();
    Console::new(store, input.as_bytes(), &mut out)
        .run()
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_exit_immediately() {
    let store = MemoryStore::default();
    let out = run_menu(&store, "0\n").await;

    assert!(out.starts_with("===== E-Ticket System =====\n"));
    assert!(out.contains("Choose option: Exiting. Bye!\n"));
}

#[tokio::test]
async fn test_end_of_input_exits() {
    let store = MemoryStore::default();
    let out = run_menu(&store, "").await;
    assert!(out.ends_with("Exiting. Bye!\n"));
}

#[tokio::test]
async fn test_invalid_choice() {
    let store = MemoryStore::default();
    let out = run_menu(&store, "9\n0\n").await;

    assert!(out.contains("Invalid choice. Try again.\n\n===== E-Ticket System ====="));
    assert_eq!(out.matches("===== E-Ticket System =====").count(), 2);
}

#[tokio::test]
async fn test_drop_create_populate_flow() {
    let store = MemoryStore::default();
    let out = run_menu(&store, "1\n2\n3\n1\n0\n").await;

    assert!(out.contains("Skip: DROP TABLE Tickets CASCADE (table \"tickets\" does not exist)"));
    assert!(out.contains("All tables created successfully."));
    assert!(out.contains("Dummy data inserted successfully."));
    assert!(out.contains("OK: DROP TABLE Tickets CASCADE"));
    assert!(out.contains("OK: DROP TABLE Users CASCADE"));
    assert_eq!(out.matches("Done dropping tables.").count(), 2);
}

#[tokio::test]
async fn test_drop_runs_children_first() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "1\n0\n").await;

    let tickets = out.find("OK: DROP TABLE Tickets CASCADE").unwrap();
    let events = out.find("OK: DROP TABLE Events CASCADE").unwrap();
    let users = out.find("OK: DROP TABLE Users CASCADE").unwrap();
    assert!(tickets < events);
    assert!(events < users);
}

#[tokio::test]
async fn test_create_twice_reports_error() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "2\n0\n").await;
    assert!(out.contains("Error creating tables: relation \"users\" already exists"));
}

#[tokio::test]
async fn test_populate_without_tables_reports_error() {
    let store = MemoryStore::default();
    let out = run_menu(&store, "3\n0\n").await;
    assert!(out.contains("Error populating tables: relation \"events\" does not exist"));
}

#[tokio::test]
async fn test_list_events() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "4\n1\n0\n0\n").await;

    assert!(out.contains("=== Query Menu (Events) ==="));
    assert!(out.contains("│ 1       │ Drake Live Concert │ Concert  │"));
    assert!(out.contains("(2 rows)"));
}

#[tokio::test]
async fn test_list_events_empty() {
    let store = MemoryStore::default();
    *store.created.lock().unwrap() = true;
    let out = run_menu(&store, "4\n1\n0\n0\n").await;
    assert!(out.contains("(No rows found in Events table)"));
}

#[tokio::test]
async fn test_list_events_without_tables() {
    let store = MemoryStore::default();
    let out = run_menu(&store, "4\n1\n0\n0\n").await;
    assert!(out.contains("Error listing events: relation \"events\" does not exist"));
}

#[tokio::test]
async fn test_add_event() {
    let store = MemoryStore::seeded();
    let out = run_menu(
        &store,
        "4\n2\n3\n1\nRaptors Home Opener\nSports\n\n0\n0\n",
    )
    .await;

    assert!(out.contains("=== Add New Event ==="));
    assert!(out.contains("Inserted 1 row(s) into EVENTS."));
    assert_eq!(
        store.titles(),
        vec!["Drake Live Concert", "Avengers: Endgame", "Raptors Home Opener"]
    );
}

#[tokio::test]
async fn test_add_event_invalid_number_stops_prompting() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "4\n2\nabc\n0\n0\n").await;

    assert!(out.contains("Invalid number input. Event not added."));
    assert!(!out.contains("OrganizerID"));
    assert_eq!(store.titles().len(), 2);
}

#[tokio::test]
async fn test_add_event_duplicate_id() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "4\n2\n1\n1\nDuplicate\nConcert\n\n0\n0\n").await;
    assert!(out.contains(
        "Error inserting event: duplicate key value violates unique constraint \"pk_events\""
    ));
}

#[tokio::test]
async fn test_add_event_blank_title_rejected() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "4\n2\n5\n1\n   \nConcert\n\n0\n0\n").await;
    assert!(out.contains("Error inserting event: null value in column \"title\""));
}

#[tokio::test]
async fn test_update_event_title() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "4\n3\n2\nEndgame (IMAX)\n0\n0\n").await;

    assert!(out.contains("Updated 1 row(s)."));
    assert_eq!(store.titles()[1], "Endgame (IMAX)");
}

#[tokio::test]
async fn test_update_missing_event() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "4\n3\n42\nNothing\n0\n0\n").await;
    assert!(out.contains("No event found with EventID = 42"));
}

#[tokio::test]
async fn test_update_invalid_number() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "4\n3\ntwo\n0\n0\n").await;

    assert!(out.contains("Invalid number input. Nothing updated."));
    assert!(!out.contains("New Title: "));
}

#[tokio::test]
async fn test_delete_event() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "4\n4\n2\n0\n0\n").await;

    assert!(out.contains("Deleted 1 row(s)."));
    assert_eq!(store.titles(), vec!["Drake Live Concert"]);
}

#[tokio::test]
async fn test_delete_referenced_event_reports_fk_error() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "4\n4\n1\n0\n0\n").await;

    assert!(out.contains("Error deleting event (maybe FK constraints): "));
    assert_eq!(store.titles().len(), 2);
}

#[tokio::test]
async fn test_delete_missing_event() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "4\n4\n77\n0\n0\n").await;
    assert!(out.contains("No event found with EventID = 77"));
}

#[tokio::test]
async fn test_delete_invalid_number() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "4\n4\n\n0\n0\n").await;
    assert!(out.contains("Invalid number input. Nothing deleted."));
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "4\n5\n  DRAKE \n0\n0\n").await;

    assert!(out.contains("Drake Live Concert"));
    assert!(!out.contains("Avengers"));
    assert!(out.contains("(1 row)"));
}

#[tokio::test]
async fn test_search_no_match() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "4\n5\nopera\n0\n0\n").await;
    assert!(out.contains("(No events match that keyword)"));
}

#[tokio::test]
async fn test_reports() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "4\n6\n7\n0\n0\n").await;

    assert!(out.contains("=== Ticket Sales per Event ==="));
    assert!(out.contains("│ 1       │ Drake Live Concert │ 1            │ 150.00  │"));
    assert!(out.contains("=== Seat Availability per Showtime ==="));
    assert!(out.contains("│ 2       │ Avengers: Endgame  │ 0            │ 0.00    │"));
    assert!(out.contains("=== Seat Availability per Showtime ==="));
    assert!(out.contains("2025-03-20 19:30"));
    assert!(out.contains("│ Total │"));
}

#[tokio::test]
async fn test_submenu_invalid_choice_and_back() {
    let store = MemoryStore::seeded();
    let out = run_menu(&store, "4\nx\n0\n0\n").await;

    assert!(out.contains("Invalid choice. Try again.\n\n=== Query Menu (Events) ==="));
    assert!(out.ends_with("Exiting. Bye!\n"));
}

#[test]
fn test_operations_report_success_flag() {
    let store = MemoryStore::seeded();
    let mut out = Vec::new();
    let mut console = Console::new(&store, "".as_bytes(), &mut out);

    tokio_test::block_on(async {
        assert!(console.list_events().await.unwrap());
        assert!(!console.delete_event(1).await.unwrap());
        assert!(!console.update_event_title(99, "x").await.unwrap());
        assert!(console.search_events("avengers").await.unwrap());
    });
}
