//! Reservation system schema.
//!
//! Ten tables in third normal form. [`TABLES`] lists them parents first,
//! which is the order they must be created in; dropping walks the list
//! backwards.

/// One table of the schema and the DDL that creates it.
#[derive(Debug, Clone, Copy)]
pub struct TableDef {
    /// Table name as written in SQL
    pub name: &'static str,

    /// Tables this one holds foreign keys into
    pub references: &'static [&'static str],

    /// `CREATE TABLE` statement
    pub ddl: &'static str,
}

/// All tables in creation order.
pub const TABLES: [TableDef; 10] = [
    TableDef {
        name: "Users",
        references: &[],
        ddl: r#"
        CREATE TABLE Users (
            UserID      INTEGER         PRIMARY KEY,
            FirstName   VARCHAR(100)    NOT NULL,
            LastName    VARCHAR(100)    NOT NULL,
            Email       VARCHAR(255)    NOT NULL UNIQUE,
            Phone       VARCHAR(30),
            CreatedAt   TIMESTAMP       DEFAULT CURRENT_TIMESTAMP NOT NULL
        )
        "#,
    },
    TableDef {
        name: "Organizers",
        references: &[],
        ddl: r#"
        CREATE TABLE Organizers (
            OrganizerID   INTEGER       PRIMARY KEY,
            Name          VARCHAR(200)  NOT NULL,
            ContactEmail  VARCHAR(255),
            ContactPhone  VARCHAR(30)
        )
        "#,
    },
    TableDef {
        name: "Venues",
        references: &[],
        ddl: r#"
        CREATE TABLE Venues (
            VenueID   INTEGER       PRIMARY KEY,
            Name      VARCHAR(200)  NOT NULL,
            Address   VARCHAR(300),
            City      VARCHAR(120),
            Capacity  INTEGER
        )
        "#,
    },
    TableDef {
        name: "Events",
        references: &["Organizers"],
        ddl: r#"
        CREATE TABLE Events (
            EventID      INTEGER        PRIMARY KEY,
            OrganizerID  INTEGER        NOT NULL,
            Title        VARCHAR(200)   NOT NULL,
            Category     VARCHAR(100),
            Description  VARCHAR(1000),
            CONSTRAINT fk_events_organizer
                FOREIGN KEY (OrganizerID) REFERENCES Organizers (OrganizerID)
        )
        "#,
    },
    TableDef {
        name: "Showtimes",
        references: &["Events", "Venues"],
        ddl: r#"
        CREATE TABLE Showtimes (
            ShowtimeID     INTEGER        PRIMARY KEY,
            EventID        INTEGER        NOT NULL,
            VenueID        INTEGER        NOT NULL,
            StartDateTime  TIMESTAMP      NOT NULL,
            BasePrice      NUMERIC(10,2)  NOT NULL,
            CONSTRAINT fk_showtimes_event
                FOREIGN KEY (EventID) REFERENCES Events (EventID),
            CONSTRAINT fk_showtimes_venue
                FOREIGN KEY (VenueID) REFERENCES Venues (VenueID),
            CONSTRAINT uq_showtimes_event_venue_start
                UNIQUE (EventID, VenueID, StartDateTime)
        )
        "#,
    },
    TableDef {
        name: "Seats",
        references: &["Venues"],
        ddl: r#"
        CREATE TABLE Seats (
            SeatID      INTEGER      PRIMARY KEY,
            VenueID     INTEGER      NOT NULL,
            Section     VARCHAR(50)  NOT NULL,
            RowLabel    VARCHAR(20)  NOT NULL,
            SeatNumber  VARCHAR(20)  NOT NULL,
            CONSTRAINT fk_seats_venue
                FOREIGN KEY (VenueID) REFERENCES Venues (VenueID),
            CONSTRAINT uq_venue_section_row_seat
                UNIQUE (VenueID, Section, RowLabel, SeatNumber)
        )
        "#,
    },
    TableDef {
        name: "Orders",
        references: &["Users"],
        ddl: r#"
        CREATE TABLE Orders (
            OrderID        INTEGER        PRIMARY KEY,
            UserID         INTEGER        NOT NULL,
            OrderDateTime  TIMESTAMP      DEFAULT CURRENT_TIMESTAMP NOT NULL,
            OrderTotal     NUMERIC(10,2)  NOT NULL,
            Status         VARCHAR(20)    NOT NULL,
            CONSTRAINT fk_orders_user
                FOREIGN KEY (UserID) REFERENCES Users (UserID)
        )
        "#,
    },
    TableDef {
        name: "Payments",
        references: &["Orders"],
        ddl: r#"
        CREATE TABLE Payments (
            PaymentID  INTEGER        PRIMARY KEY,
            OrderID    INTEGER        NOT NULL,
            Amount     NUMERIC(10,2)  NOT NULL,
            Method     VARCHAR(40)    NOT NULL,
            PaidAt     TIMESTAMP,
            AuthCode   VARCHAR(64),
            CONSTRAINT fk_payments_order
                FOREIGN KEY (OrderID) REFERENCES Orders (OrderID)
        )
        "#,
    },
    TableDef {
        name: "SeatMaps",
        references: &["Showtimes", "Seats"],
        ddl: r#"
        CREATE TABLE SeatMaps (
            SeatMapID   INTEGER      PRIMARY KEY,
            ShowtimeID  INTEGER      NOT NULL,
            SeatID      INTEGER      NOT NULL,
            Status      VARCHAR(16)  NOT NULL,
            CONSTRAINT fk_seatmaps_showtime
                FOREIGN KEY (ShowtimeID) REFERENCES Showtimes (ShowtimeID),
            CONSTRAINT fk_seatmaps_seat
                FOREIGN KEY (SeatID) REFERENCES Seats (SeatID),
            CONSTRAINT uq_seatmaps_showtime_seat
                UNIQUE (ShowtimeID, SeatID),
            CONSTRAINT chk_seatmaps_status
                CHECK (Status IN ('AVAILABLE', 'HELD', 'SOLD'))
        )
        "#,
    },
    TableDef {
        name: "Tickets",
        references: &["Orders", "Showtimes", "Seats"],
        ddl: r#"
        CREATE TABLE Tickets (
            TicketID     INTEGER        PRIMARY KEY,
            OrderID      INTEGER        NOT NULL,
            ShowtimeID   INTEGER        NOT NULL,
            SeatID       INTEGER        NOT NULL,
            TicketPrice  NUMERIC(10,2)  NOT NULL,
            QRCode       VARCHAR(128)   NOT NULL,
            IsValidated  CHAR(1)        DEFAULT 'N' NOT NULL,
            ValidatedAt  TIMESTAMP,
            CONSTRAINT fk_tickets_order
                FOREIGN KEY (OrderID) REFERENCES Orders (OrderID),
            CONSTRAINT fk_tickets_showtime
                FOREIGN KEY (ShowtimeID) REFERENCES Showtimes (ShowtimeID),
            CONSTRAINT fk_tickets_seat
                FOREIGN KEY (SeatID) REFERENCES Seats (SeatID),
            CONSTRAINT uq_tickets_qrcode
                UNIQUE (QRCode),
            CONSTRAINT uq_tickets_showtime_seat
                UNIQUE (ShowtimeID, SeatID),
            CONSTRAINT chk_tickets_isvalidated
                CHECK (IsValidated IN ('Y', 'N'))
        )
        "#,
    },
];

/// Seat-map states accepted by `chk_seatmaps_status`.
pub const SEAT_STATUSES: [&str; 3] = ["AVAILABLE", "HELD", "SOLD"];

/// Ticket validation flags accepted by `chk_tickets_isvalidated`.
pub const VALIDATION_FLAGS: [&str; 2] = ["Y", "N"];

/// Tables in creation order (parents first).
pub fn tables() -> &'static [TableDef] {
    &TABLES
}

/// Tables in drop order (children first).
pub fn drop_order() -> impl Iterator<Item = &'static TableDef> {
    TABLES.iter().rev()
}

/// `DROP TABLE` statement for a table, cascading to dependent constraints.
pub fn drop_statement(table: &TableDef) -> String {
    format!("DROP TABLE {} CASCADE", table.name)
}
