//! Fixed dummy data for the reservation schema.
//!
//! Rows are listed per table and inserted parents first so every foreign
//! key resolves. The whole set goes in through one transaction.

use chrono::NaiveDateTime;
use sqlx::PgConnection;

use crate::error::{AppError, AppResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy)]
pub struct UserRow {
    pub user_id: i32,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct OrganizerRow {
    pub organizer_id: i32,
    pub name: &'static str,
    pub contact_email: &'static str,
    pub contact_phone: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct VenueRow {
    pub venue_id: i32,
    pub name: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub capacity: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct EventRow {
    pub event_id: i32,
    pub organizer_id: i32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ShowtimeRow {
    pub showtime_id: i32,
    pub event_id: i32,
    pub venue_id: i32,
    /// `YYYY-MM-DD HH:MM:SS`
    pub start: &'static str,
    pub base_price: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct SeatRow {
    pub seat_id: i32,
    pub venue_id: i32,
    pub section: &'static str,
    pub row_label: &'static str,
    pub seat_number: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SeatMapRow {
    pub seat_map_id: i32,
    pub showtime_id: i32,
    pub seat_id: i32,
    pub status: &'static str,
}

/// Order rows take their timestamp from the database clock.
#[derive(Debug, Clone, Copy)]
pub struct OrderRow {
    pub order_id: i32,
    pub user_id: i32,
    pub total: f64,
    pub status: &'static str,
}

/// Payment rows take `PaidAt` from the database clock.
#[derive(Debug, Clone, Copy)]
pub struct PaymentRow {
    pub payment_id: i32,
    pub order_id: i32,
    pub amount: f64,
    pub method: &'static str,
    pub auth_code: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TicketRow {
    pub ticket_id: i32,
    pub order_id: i32,
    pub showtime_id: i32,
    pub seat_id: i32,
    pub price: f64,
    pub qr_code: &'static str,
    pub is_validated: &'static str,
}

pub const USERS: [UserRow; 3] = [
    UserRow {
        user_id: 1,
        first_name: "Ahmad",
        last_name: "Kanaan",
        email: "ahmad@example.com",
        phone: "4161111111",
    },
    UserRow {
        user_id: 2,
        first_name: "John",
        last_name: "Doe",
        email: "john@example.com",
        phone: "4162222222",
    },
    UserRow {
        user_id: 3,
        first_name: "Sarah",
        last_name: "Ali",
        email: "sarah@example.com",
        phone: "6473333333",
    },
];

pub const ORGANIZERS: [OrganizerRow; 2] = [
    OrganizerRow {
        organizer_id: 1,
        name: "Live Nation",
        contact_email: "contact@livenation.com",
        contact_phone: "4165550000",
    },
    OrganizerRow {
        organizer_id: 2,
        name: "Cineplex",
        contact_email: "info@cineplex.com",
        contact_phone: "4165551234",
    },
];

pub const VENUES: [VenueRow; 2] = [
    VenueRow {
        venue_id: 1,
        name: "Scotiabank Arena",
        address: "40 Bay St",
        city: "Toronto",
        capacity: 20000,
    },
    VenueRow {
        venue_id: 2,
        name: "Cineplex YD Square",
        address: "10 Dundas St E",
        city: "Toronto",
        capacity: 500,
    },
];

pub const EVENTS: [EventRow; 2] = [
    EventRow {
        event_id: 1,
        organizer_id: 1,
        title: "Drake Live Concert",
        category: "Concert",
        description: "Drake performing live in Toronto.",
    },
    EventRow {
        event_id: 2,
        organizer_id: 2,
        title: "Avengers: Endgame",
        category: "Movie",
        description: "Special screening of Avengers Endgame.",
    },
];

pub const SHOWTIMES: [ShowtimeRow; 2] = [
    ShowtimeRow {
        showtime_id: 1,
        event_id: 1,
        venue_id: 1,
        start: "2025-12-10 20:00:00",
        base_price: 150.00,
    },
    ShowtimeRow {
        showtime_id: 2,
        event_id: 2,
        venue_id: 2,
        start: "2025-12-12 18:00:00",
        base_price: 20.00,
    },
];

pub const SEATS: [SeatRow; 5] = [
    SeatRow { seat_id: 1, venue_id: 1, section: "Floor", row_label: "A", seat_number: "1" },
    SeatRow { seat_id: 2, venue_id: 1, section: "Floor", row_label: "A", seat_number: "2" },
    SeatRow { seat_id: 3, venue_id: 1, section: "Floor", row_label: "A", seat_number: "3" },
    SeatRow { seat_id: 4, venue_id: 2, section: "Front", row_label: "B", seat_number: "5" },
    SeatRow { seat_id: 5, venue_id: 2, section: "Front", row_label: "B", seat_number: "6" },
];

pub const SEAT_MAPS: [SeatMapRow; 5] = [
    SeatMapRow { seat_map_id: 1, showtime_id: 1, seat_id: 1, status: "AVAILABLE" },
    SeatMapRow { seat_map_id: 2, showtime_id: 1, seat_id: 2, status: "AVAILABLE" },
    SeatMapRow { seat_map_id: 3, showtime_id: 1, seat_id: 3, status: "HELD" },
    SeatMapRow { seat_map_id: 4, showtime_id: 2, seat_id: 4, status: "AVAILABLE" },
    SeatMapRow { seat_map_id: 5, showtime_id: 2, seat_id: 5, status: "SOLD" },
];

pub const ORDERS: [OrderRow; 2] = [
    OrderRow { order_id: 1, user_id: 1, total: 150.00, status: "PAID" },
    OrderRow { order_id: 2, user_id: 2, total: 20.00, status: "PAID" },
];

pub const PAYMENTS: [PaymentRow; 2] = [
    PaymentRow {
        payment_id: 1,
        order_id: 1,
        amount: 150.00,
        method: "CARD",
        auth_code: "AUTH12345",
    },
    PaymentRow {
        payment_id: 2,
        order_id: 2,
        amount: 20.00,
        method: "CARD",
        auth_code: "AUTH67890",
    },
];

pub const TICKETS: [TicketRow; 2] = [
    TicketRow {
        ticket_id: 1,
        order_id: 1,
        showtime_id: 1,
        seat_id: 1,
        price: 150.00,
        qr_code: "QR-ABC-111",
        is_validated: "N",
    },
    TicketRow {
        ticket_id: 2,
        order_id: 2,
        showtime_id: 2,
        seat_id: 5,
        price: 20.00,
        qr_code: "QR-XYZ-222",
        is_validated: "Y",
    },
];

fn parse_timestamp(value: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|e| AppError::Validation(format!("Invalid timestamp '{}': {}", value, e)))
}

/// Insert every dummy row, parents first.
///
/// The caller owns the transaction; nothing here commits.
pub async fn insert_all(conn: &mut PgConnection) -> AppResult<()> {
    for user in &USERS {
        sqlx::query(
            r#"
            INSERT INTO Users (UserID, FirstName, LastName, Email, Phone)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.user_id)
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(user.email)
        .bind(user.phone)
        .execute(&mut *conn)
        .await?;
    }

    for organizer in &ORGANIZERS {
        sqlx::query(
            r#"
            INSERT INTO Organizers (OrganizerID, Name, ContactEmail, ContactPhone)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(organizer.organizer_id)
        .bind(organizer.name)
        .bind(organizer.contact_email)
        .bind(organizer.contact_phone)
        .execute(&mut *conn)
        .await?;
    }

    for venue in &VENUES {
        sqlx::query(
            r#"
            INSERT INTO Venues (VenueID, Name, Address, City, Capacity)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(venue.venue_id)
        .bind(venue.name)
        .bind(venue.address)
        .bind(venue.city)
        .bind(venue.capacity)
        .execute(&mut *conn)
        .await?;
    }

    for event in &EVENTS {
        sqlx::query(
            r#"
            INSERT INTO Events (EventID, OrganizerID, Title, Category, Description)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(event.event_id)
        .bind(event.organizer_id)
        .bind(event.title)
        .bind(event.category)
        .bind(event.description)
        .execute(&mut *conn)
        .await?;
    }

    for showtime in &SHOWTIMES {
        sqlx::query(
            r#"
            INSERT INTO Showtimes (ShowtimeID, EventID, VenueID, StartDateTime, BasePrice)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(showtime.showtime_id)
        .bind(showtime.event_id)
        .bind(showtime.venue_id)
        .bind(parse_timestamp(showtime.start)?)
        .bind(showtime.base_price)
        .execute(&mut *conn)
        .await?;
    }

    for seat in &SEATS {
        sqlx::query(
            r#"
            INSERT INTO Seats (SeatID, VenueID, Section, RowLabel, SeatNumber)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(seat.seat_id)
        .bind(seat.venue_id)
        .bind(seat.section)
        .bind(seat.row_label)
        .bind(seat.seat_number)
        .execute(&mut *conn)
        .await?;
    }

    for seat_map in &SEAT_MAPS {
        sqlx::query(
            r#"
            INSERT INTO SeatMaps (SeatMapID, ShowtimeID, SeatID, Status)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(seat_map.seat_map_id)
        .bind(seat_map.showtime_id)
        .bind(seat_map.seat_id)
        .bind(seat_map.status)
        .execute(&mut *conn)
        .await?;
    }

    for order in &ORDERS {
        sqlx::query(
            r#"
            INSERT INTO Orders (OrderID, UserID, OrderDateTime, OrderTotal, Status)
            VALUES ($1, $2, CURRENT_TIMESTAMP, $3, $4)
            "#,
        )
        .bind(order.order_id)
        .bind(order.user_id)
        .bind(order.total)
        .bind(order.status)
        .execute(&mut *conn)
        .await?;
    }

    for payment in &PAYMENTS {
        sqlx::query(
            r#"
            INSERT INTO Payments (PaymentID, OrderID, Amount, Method, PaidAt, AuthCode)
            VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP, $5)
            "#,
        )
        .bind(payment.payment_id)
        .bind(payment.order_id)
        .bind(payment.amount)
        .bind(payment.method)
        .bind(payment.auth_code)
        .execute(&mut *conn)
        .await?;
    }

    for ticket in &TICKETS {
        sqlx::query(
            r#"
            INSERT INTO Tickets (TicketID, OrderID, ShowtimeID, SeatID, TicketPrice, QRCode, IsValidated)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(ticket.ticket_id)
        .bind(ticket.order_id)
        .bind(ticket.showtime_id)
        .bind(ticket.seat_id)
        .bind(ticket.price)
        .bind(ticket.qr_code)
        .bind(ticket.is_validated)
        .execute(&mut *conn)
        .await?;
    }

    tracing::debug!(
        users = USERS.len(),
        events = EVENTS.len(),
        tickets = TICKETS.len(),
        "Dummy rows inserted"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::{SEAT_STATUSES, VALIDATION_FLAGS};
    use std::collections::HashSet;
    use std::hash::Hash;

    fn all_unique<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
        let mut seen = HashSet::new();
        items.into_iter().all(|item| seen.insert(item))
    }

    fn venue_of_seat(seat_id: i32) -> i32 {
        SEATS.iter().find(|s| s.seat_id == seat_id).unwrap().venue_id
    }

    fn venue_of_showtime(showtime_id: i32) -> i32 {
        SHOWTIMES
            .iter()
            .find(|s| s.showtime_id == showtime_id)
            .unwrap()
            .venue_id
    }

    #[test]
    fn test_primary_keys_unique() {
        assert!(all_unique(USERS.iter().map(|r| r.user_id)));
        assert!(all_unique(ORGANIZERS.iter().map(|r| r.organizer_id)));
        assert!(all_unique(VENUES.iter().map(|r| r.venue_id)));
        assert!(all_unique(EVENTS.iter().map(|r| r.event_id)));
        assert!(all_unique(SHOWTIMES.iter().map(|r| r.showtime_id)));
        assert!(all_unique(SEATS.iter().map(|r| r.seat_id)));
        assert!(all_unique(SEAT_MAPS.iter().map(|r| r.seat_map_id)));
        assert!(all_unique(ORDERS.iter().map(|r| r.order_id)));
        assert!(all_unique(PAYMENTS.iter().map(|r| r.payment_id)));
        assert!(all_unique(TICKETS.iter().map(|r| r.ticket_id)));
    }

    #[test]
    fn test_foreign_keys_resolve() {
        let organizers: HashSet<i32> = ORGANIZERS.iter().map(|r| r.organizer_id).collect();
        let venues: HashSet<i32> = VENUES.iter().map(|r| r.venue_id).collect();
        let events: HashSet<i32> = EVENTS.iter().map(|r| r.event_id).collect();
        let showtimes: HashSet<i32> = SHOWTIMES.iter().map(|r| r.showtime_id).collect();
        let seats: HashSet<i32> = SEATS.iter().map(|r| r.seat_id).collect();
        let users: HashSet<i32> = USERS.iter().map(|r| r.user_id).collect();
        let orders: HashSet<i32> = ORDERS.iter().map(|r| r.order_id).collect();

        assert!(EVENTS.iter().all(|e| organizers.contains(&e.organizer_id)));
        assert!(SHOWTIMES
            .iter()
            .all(|s| events.contains(&s.event_id) && venues.contains(&s.venue_id)));
        assert!(SEATS.iter().all(|s| venues.contains(&s.venue_id)));
        assert!(SEAT_MAPS
            .iter()
            .all(|m| showtimes.contains(&m.showtime_id) && seats.contains(&m.seat_id)));
        assert!(ORDERS.iter().all(|o| users.contains(&o.user_id)));
        assert!(PAYMENTS.iter().all(|p| orders.contains(&p.order_id)));
        assert!(TICKETS.iter().all(|t| orders.contains(&t.order_id)
            && showtimes.contains(&t.showtime_id)
            && seats.contains(&t.seat_id)));
    }

    #[test]
    fn test_unique_constraints_hold() {
        assert!(all_unique(USERS.iter().map(|r| r.email)));
        assert!(all_unique(
            SHOWTIMES.iter().map(|r| (r.event_id, r.venue_id, r.start))
        ));
        assert!(all_unique(
            SEATS
                .iter()
                .map(|r| (r.venue_id, r.section, r.row_label, r.seat_number))
        ));
        assert!(all_unique(SEAT_MAPS.iter().map(|r| (r.showtime_id, r.seat_id))));
        assert!(all_unique(TICKETS.iter().map(|r| r.qr_code)));
        assert!(all_unique(TICKETS.iter().map(|r| (r.showtime_id, r.seat_id))));
    }

    #[test]
    fn test_check_constraints_hold() {
        assert!(SEAT_MAPS.iter().all(|m| SEAT_STATUSES.contains(&m.status)));
        assert!(TICKETS
            .iter()
            .all(|t| VALIDATION_FLAGS.contains(&t.is_validated)));
    }

    #[test]
    fn test_seats_belong_to_showtime_venue() {
        for map in &SEAT_MAPS {
            assert_eq!(venue_of_seat(map.seat_id), venue_of_showtime(map.showtime_id));
        }
        for ticket in &TICKETS {
            assert_eq!(
                venue_of_seat(ticket.seat_id),
                venue_of_showtime(ticket.showtime_id)
            );
        }
    }

    #[test]
    fn test_payments_cover_orders() {
        for order in &ORDERS {
            let paid: f64 = PAYMENTS
                .iter()
                .filter(|p| p.order_id == order.order_id)
                .map(|p| p.amount)
                .sum();
            assert!((paid - order.total).abs() < 0.005, "order {}", order.order_id);
        }
    }

    #[test]
    fn test_showtime_timestamps_parse() {
        for showtime in &SHOWTIMES {
            assert!(parse_timestamp(showtime.start).is_ok());
        }
        assert!(matches!(
            parse_timestamp("10/12/2025 8pm"),
            Err(AppError::Validation(_))
        ));
    }
}
