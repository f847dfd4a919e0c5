//! Text console front end.
//!
//! [`Console`] drives the main menu and the Events sub-menu over any
//! line-based input and writer, and exposes each operation on its own so
//! the one-shot subcommands print exactly what the menu would.

pub mod prompt;
pub mod render;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};

use crate::db::models::{DropOutcome, NewEvent};
use crate::services::TicketStore;
use prompt::{ask, parse_id};
use render::{event_rows, render_table, sales_rows, seat_rows, EVENT_HEADERS};

const SALES_HEADERS: [&str; 4] = ["EventID", "Title", "Tickets Sold", "Revenue"];
const SEAT_HEADERS: [&str; 7] = [
    "ShowtimeID", "Event", "Starts", "Available", "Held", "Sold", "Total",
];

/// Menu-driven console over a [`TicketStore`].
///
/// Operation methods return `Ok(true)` when the operation succeeded and
/// `Ok(false)` when it failed and the failure was reported to the user.
/// `Err` is reserved for console I/O failures.
pub struct Console<'a, R, W> {
    store: &'a dyn TicketStore,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(store: &'a dyn TicketStore, input: R, out: W) -> Self {
        Self { store, input, out }
    }

    /// Run the main menu until the user exits or input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_main_menu()?;
            let Some(choice) = ask(&mut self.input, &mut self.out, "Choose option: ")? else {
                writeln!(self.out)?;
                writeln!(self.out, "Exiting. Bye!")?;
                return Ok(());
            };

            match choice.as_str() {
                "1" => {
                    self.drop_tables().await?;
                }
                "2" => {
                    self.create_tables().await?;
                }
                "3" => {
                    self.populate_tables().await?;
                }
                "4" => self.events_menu().await?,
                "0" => {
                    writeln!(self.out, "Exiting. Bye!")?;
                    return Ok(());
                }
                _ => writeln!(self.out, "Invalid choice. Try again.")?,
            }
            writeln!(self.out)?;
        }
    }

    fn print_main_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "===== E-Ticket System =====")?;
        writeln!(self.out, "1. Drop Tables")?;
        writeln!(self.out, "2. Create Tables")?;
        writeln!(self.out, "3. Populate Tables (insert dummy data)")?;
        writeln!(self.out, "4. Query Tables (Events sub-menu)")?;
        writeln!(self.out, "0. Exit")
    }

    /// Events sub-menu; returns to the main menu on `0` or end of input.
    async fn events_menu(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "=== Query Menu (Events) ===")?;
            writeln!(self.out, "1. List Events")?;
            writeln!(self.out, "2. Add Event")?;
            writeln!(self.out, "3. Update Event Title")?;
            writeln!(self.out, "4. Delete Event")?;
            writeln!(self.out, "5. Search Events by Title")?;
            writeln!(self.out, "6. Ticket Sales per Event")?;
            writeln!(self.out, "7. Seat Availability per Showtime")?;
            writeln!(self.out, "0. Back to Main Menu")?;

            let Some(choice) = ask(&mut self.input, &mut self.out, "Choose option: ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => {
                    self.list_events().await?;
                }
                "2" => {
                    self.prompt_add_event().await?;
                }
                "3" => {
                    self.prompt_update_event_title().await?;
                }
                "4" => {
                    self.prompt_delete_event().await?;
                }
                "5" => {
                    self.prompt_search_events().await?;
                }
                "6" => {
                    self.event_sales().await?;
                }
                "7" => {
                    self.seat_availability().await?;
                }
                "0" => return Ok(()),
                _ => writeln!(self.out, "Invalid choice. Try again.")?,
            }
            writeln!(self.out)?;
        }
    }

    pub async fn drop_tables(&mut self) -> io::Result<bool> {
        writeln!(self.out, "=== Dropping tables (if they exist) ===")?;

        for outcome in self.store.drop_tables().await {
            match outcome {
                DropOutcome::Dropped { sql } => writeln!(self.out, "OK: {}", sql)?,
                DropOutcome::Skipped { sql, reason } => {
                    writeln!(self.out, "Skip: {} ({})", sql, reason)?
                }
            }
        }

        writeln!(self.out, "Done dropping tables.")?;
        Ok(true)
    }

    pub async fn create_tables(&mut self) -> io::Result<bool> {
        writeln!(self.out, "=== Creating tables ===")?;

        match self.store.create_tables().await {
            Ok(()) => {
                writeln!(self.out, "All tables created successfully.")?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.out, "Error creating tables: {}", e.user_message())?;
                Ok(false)
            }
        }
    }

    pub async fn populate_tables(&mut self) -> io::Result<bool> {
        writeln!(self.out, "=== Inserting dummy data into tables ===")?;

        match self.store.populate_tables().await {
            Ok(()) => {
                writeln!(self.out, "Dummy data inserted successfully.")?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.out, "Error populating tables: {}", e.user_message())?;
                Ok(false)
            }
        }
    }

    pub async fn list_events(&mut self) -> io::Result<bool> {
        match self.store.list_events().await {
            Ok(events) if events.is_empty() => {
                writeln!(self.out, "(No rows found in Events table)")?;
                Ok(true)
            }
            Ok(events) => {
                render_table(&mut self.out, &EVENT_HEADERS, &event_rows(&events))?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.out, "Error listing events: {}", e.user_message())?;
                Ok(false)
            }
        }
    }

    pub async fn add_event(&mut self, event: &NewEvent) -> io::Result<bool> {
        match self.store.add_event(event).await {
            Ok(rows) => {
                writeln!(self.out, "Inserted {} row(s) into EVENTS.", rows)?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.out, "Error inserting event: {}", e.user_message())?;
                Ok(false)
            }
        }
    }

    async fn prompt_add_event(&mut self) -> io::Result<bool> {
        const INVALID: &str = "Invalid number input. Event not added.";

        writeln!(self.out, "=== Add New Event ===")?;
        let Some(event_id) = self.ask_id("New EventID (integer, must be unique): ", INVALID)? else {
            return Ok(false);
        };
        let Some(organizer_id) = self.ask_id("OrganizerID (must exist in ORGANIZERS): ", INVALID)?
        else {
            return Ok(false);
        };
        let Some(title) = ask(&mut self.input, &mut self.out, "Title: ")? else {
            return Ok(false);
        };
        let Some(category) = ask(
            &mut self.input,
            &mut self.out,
            "Category (e.g., Concert, Movie): ",
        )?
        else {
            return Ok(false);
        };
        let Some(description) = ask(&mut self.input, &mut self.out, "Description (can be empty): ")?
        else {
            return Ok(false);
        };

        let event = NewEvent::new(event_id, organizer_id, &title, &category, &description);
        self.add_event(&event).await
    }

    pub async fn update_event_title(&mut self, event_id: i32, title: &str) -> io::Result<bool> {
        match self.store.update_event_title(event_id, title).await {
            Ok(0) => {
                writeln!(self.out, "No event found with EventID = {}", event_id)?;
                Ok(false)
            }
            Ok(rows) => {
                writeln!(self.out, "Updated {} row(s).", rows)?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.out, "Error updating event: {}", e.user_message())?;
                Ok(false)
            }
        }
    }

    async fn prompt_update_event_title(&mut self) -> io::Result<bool> {
        writeln!(self.out, "=== Update Event Title ===")?;
        let Some(event_id) = self.ask_id("EventID to update: ", "Invalid number input. Nothing updated.")?
        else {
            return Ok(false);
        };
        let Some(title) = ask(&mut self.input, &mut self.out, "New Title: ")? else {
            return Ok(false);
        };
        self.update_event_title(event_id, &title).await
    }

    pub async fn delete_event(&mut self, event_id: i32) -> io::Result<bool> {
        match self.store.delete_event(event_id).await {
            Ok(0) => {
                writeln!(self.out, "No event found with EventID = {}", event_id)?;
                Ok(false)
            }
            Ok(rows) => {
                writeln!(self.out, "Deleted {} row(s).", rows)?;
                Ok(true)
            }
            Err(e) => {
                writeln!(
                    self.out,
                    "Error deleting event (maybe FK constraints): {}",
                    e.user_message()
                )?;
                Ok(false)
            }
        }
    }

    async fn prompt_delete_event(&mut self) -> io::Result<bool> {
        writeln!(self.out, "=== Delete Event ===")?;
        let Some(event_id) = self.ask_id("EventID to delete: ", "Invalid number input. Nothing deleted.")?
        else {
            return Ok(false);
        };
        self.delete_event(event_id).await
    }

    pub async fn search_events(&mut self, keyword: &str) -> io::Result<bool> {
        match self.store.search_events(keyword).await {
            Ok(events) if events.is_empty() => {
                writeln!(self.out, "(No events match that keyword)")?;
                Ok(true)
            }
            Ok(events) => {
                render_table(&mut self.out, &EVENT_HEADERS, &event_rows(&events))?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.out, "Error searching events: {}", e.user_message())?;
                Ok(false)
            }
        }
    }

    async fn prompt_search_events(&mut self) -> io::Result<bool> {
        writeln!(self.out, "=== Search Events by Title ===")?;
        let Some(keyword) = ask(&mut self.input, &mut self.out, "Enter keyword: ")? else {
            return Ok(false);
        };
        self.search_events(&keyword).await
    }

    pub async fn event_sales(&mut self) -> io::Result<bool> {
        writeln!(self.out, "=== Ticket Sales per Event ===")?;
        match self.store.event_sales().await {
            Ok(sales) if sales.is_empty() => {
                writeln!(self.out, "(No events found)")?;
                Ok(true)
            }
            Ok(sales) => {
                render_table(&mut self.out, &SALES_HEADERS, &sales_rows(&sales))?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.out, "Error building sales report: {}", e.user_message())?;
                Ok(false)
            }
        }
    }

    pub async fn seat_availability(&mut self) -> io::Result<bool> {
        writeln!(self.out, "=== Seat Availability per Showtime ===")?;
        match self.store.seat_availability().await {
            Ok(showtimes) if showtimes.is_empty() => {
                writeln!(self.out, "(No showtimes found)")?;
                Ok(true)
            }
            Ok(showtimes) => {
                render_table(&mut self.out, &SEAT_HEADERS, &seat_rows(&showtimes))?;
                Ok(true)
            }
            Err(e) => {
                writeln!(
                    self.out,
                    "Error building seat availability report: {}",
                    e.user_message()
                )?;
                Ok(false)
            }
        }
    }

    /// Prompt for a numeric id, printing `invalid` when it does not parse.
    ///
    /// `None` means the caller should abandon the operation.
    fn ask_id(&mut self, prompt: &str, invalid: &str) -> io::Result<Option<i32>> {
        let Some(text) = ask(&mut self.input, &mut self.out, prompt)? else {
            return Ok(None);
        };
        match parse_id(&text) {
            Some(id) => Ok(Some(id)),
            None => {
                writeln!(self.out, "{}", invalid)?;
                Ok(None)
            }
        }
    }
}
