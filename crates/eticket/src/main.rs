//! E-Ticket System console
//!
//! Connects to PostgreSQL and either runs the interactive menu or a single
//! operation given as a subcommand.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eticket::{
    config::{AppConfig, DatabaseConfig},
    console::Console,
    db::{
        create_pool, health_check,
        models::{NewEvent, RowsAffected},
    },
    services::{Services, TicketStore},
    AppError, AppResult,
};

#[derive(Parser)]
#[command(name = "eticket")]
#[command(version, about = "E-Ticket System console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// PostgreSQL host (overrides POSTGRES_HOST)
    #[arg(long)]
    host: Option<String>,

    /// PostgreSQL port (overrides POSTGRES_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Database user (overrides POSTGRES_USER)
    #[arg(short, long)]
    user: Option<String>,

    /// Database name (overrides POSTGRES_DATABASE)
    #[arg(short, long)]
    database: Option<String>,

    /// Print one-shot results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop every table, children first
    Drop,

    /// Create every table in one transaction
    Create,

    /// Insert the dummy rows in one transaction
    Populate,

    /// Query the Events table
    #[command(subcommand)]
    Events(EventCommand),

    /// Read-only reports
    #[command(subcommand)]
    Report(ReportCommand),
}

#[derive(Subcommand)]
enum EventCommand {
    /// List all events
    List,

    /// Add an event
    /// Example:
    ///     eticket events add --id 3 --organizer 1 --title "Raptors Home Opener" --category Sports
    #[command(verbatim_doc_comment)]
    Add {
        /// New EventID (must be unique)
        #[arg(long)]
        id: i32,

        /// OrganizerID (must exist in Organizers)
        #[arg(long)]
        organizer: i32,

        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        category: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Change an event's title
    UpdateTitle { id: i32, title: String },

    /// Delete an event
    Delete { id: i32 },

    /// Case-insensitive substring search on titles
    Search { keyword: String },
}

#[derive(Subcommand)]
enum ReportCommand {
    /// Tickets sold and revenue per event
    Sales,

    /// Seat-map counts by status per showtime
    Seats,
}

/// Initialize tracing/logging on stderr.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let (mut app_config, app_config_error) = match AppConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    init_tracing(&app_config.log);
    if let Some(e) = app_config_error {
        tracing::warn!(error = %e, "Failed to load app config, using defaults");
    }
    app_config.json |= cli.json;

    let db_config = match DatabaseConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let e = AppError::from(e);
            tracing::error!(error = %e, "Failed to load database config");
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    let mut db_config = db_config.with_overrides(cli.host, cli.port, cli.user, cli.database);

    if let Err(e) = db_config.validate() {
        eprintln!("{}", e.user_message());
        return Ok(ExitCode::FAILURE);
    }

    if db_config.needs_password() && io::stdin().is_terminal() {
        db_config.password =
            rpassword::prompt_password_stdout("Password: ").context("Failed to read password")?;
    }

    tracing::info!(url = %db_config.display_url(), "Connecting");

    let pool = match create_pool(&db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Connection failed");
            eprintln!("Failed to connect to database: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    if !health_check(&pool).await {
        eprintln!("Failed to connect to database: health check failed");
        return Ok(ExitCode::FAILURE);
    }

    let services = Services::new(pool);
    let connected = db_config.connected_message();
    tracing::info!(database = %db_config.database, "Connected");

    let ok = match cli.command {
        None => {
            println!("{}", connected);
            println!();
            let stdin = io::stdin();
            Console::new(&services, stdin.lock(), io::stdout())
                .run()
                .await?;
            true
        }
        Some(command) => {
            // stdout carries only the result
            eprintln!("{}", connected);
            if app_config.json {
                run_json(&services, command).await?
            } else {
                run_text(&services, command).await?
            }
        }
    };

    tracing::debug!(ok, "Finished");
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Run one operation with the same output the menu would print.
async fn run_text(store: &dyn TicketStore, command: Commands) -> io::Result<bool> {
    let stdout = io::stdout();
    let mut console = Console::new(store, io::empty(), stdout.lock());

    match command {
        Commands::Drop => console.drop_tables().await,
        Commands::Create => console.create_tables().await,
        Commands::Populate => console.populate_tables().await,
        Commands::Events(EventCommand::List) => console.list_events().await,
        Commands::Events(EventCommand::Add {
            id,
            organizer,
            title,
            category,
            description,
        }) => {
            let event = NewEvent::new(id, organizer, &title, &category, &description);
            console.add_event(&event).await
        }
        Commands::Events(EventCommand::UpdateTitle { id, title }) => {
            console.update_event_title(id, &title).await
        }
        Commands::Events(EventCommand::Delete { id }) => console.delete_event(id).await,
        Commands::Events(EventCommand::Search { keyword }) => console.search_events(&keyword).await,
        Commands::Report(ReportCommand::Sales) => console.event_sales().await,
        Commands::Report(ReportCommand::Seats) => console.seat_availability().await,
    }
}

/// Run one operation and print its result as JSON.
///
/// Failures are printed as `{"error": "..."}` on stdout.
async fn run_json(store: &dyn TicketStore, command: Commands) -> anyhow::Result<bool> {
    let json = match command {
        Commands::Drop => Ok(serde_json::to_value(store.drop_tables().await)?),
        Commands::Create => to_json(store.create_tables().await.map(|()| "created")),
        Commands::Populate => to_json(store.populate_tables().await.map(|()| "populated")),
        Commands::Events(EventCommand::List) => to_json(store.list_events().await),
        Commands::Events(EventCommand::Add {
            id,
            organizer,
            title,
            category,
            description,
        }) => {
            let event = NewEvent::new(id, organizer, &title, &category, &description);
            to_json(store.add_event(&event).await.map(|rows| RowsAffected { rows }))
        }
        Commands::Events(EventCommand::UpdateTitle { id, title }) => {
            to_json(store.update_event_title(id, &title).await.map(|rows| RowsAffected { rows }))
        }
        Commands::Events(EventCommand::Delete { id }) => {
            to_json(store.delete_event(id).await.map(|rows| RowsAffected { rows }))
        }
        Commands::Events(EventCommand::Search { keyword }) => {
            to_json(store.search_events(&keyword).await)
        }
        Commands::Report(ReportCommand::Sales) => to_json(store.event_sales().await),
        Commands::Report(ReportCommand::Seats) => to_json(store.seat_availability().await),
    };

    let (value, ok) = match json {
        Ok(value) => (value, true),
        Err(message) => (serde_json::json!({ "error": message }), false),
    };

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &value)?;
    writeln!(stdout)?;
    Ok(ok)
}

fn to_json<T: Serialize>(result: AppResult<T>) -> Result<serde_json::Value, String> {
    let value = result.map_err(|e| e.user_message())?;
    serde_json::to_value(value).map_err(|e| e.to_string())
}
