use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flight_admin::entities::bill::BillQueryCustomer;
use flight_admin::entities::booking::status_text as booking_status_text;
use flight_admin::entities::flight::status_text as flight_status_text;
use flight_admin::rbac::allowed_roles;
use flight_admin::{AppResult, AppState, Config};

#[derive(Parser)]
#[command(name = "flight-admin")]
#[command(version)]
#[command(about = "Command line client for the flight booking admin API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the user decoded from the stored token
    Whoami,

    /// Log in and store the token
    Login { email: String, password: String },

    /// Log out and clear the token
    Logout,

    /// List active flights
    Flights,

    /// List airports, optionally filtered
    Airports {
        /// Free-text search; several words are joined with spaces
        search: Vec<String>,
    },

    /// List bookings, optionally for one flight
    Bookings { flight_id: Option<String> },

    /// List the current customer's bills
    Bills,

    /// Check whether the current user may perform an operation
    Can { operation: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flight_admin=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e.user_message("Something went wrong"));
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> AppResult<bool> {
    let config = Config::from_env()?;
    tracing::debug!(api = %config.api_base_url, auth = %config.auth_base(), "Loaded configuration");

    let state = AppState::new(config)?;
    state.auth.initialize().await;

    match command {
        Command::Whoami => match state.auth.current_user().await {
            Some(user) if state.auth.is_logged_in() => {
                println!("{} <{}> {} ({})", user.username, user.email, user.name, user.role);
            }
            _ => println!("not logged in"),
        },
        Command::Login { email, password } => {
            let outcome = state.auth.login_user(&email, &password).await;
            if !outcome.success {
                eprintln!("{}", outcome.message.unwrap_or_else(|| "Login failed".to_string()));
                return Ok(false);
            }
            if let Some(user) = state.auth.current_user().await {
                println!("logged in as {} ({})", user.username, user.role);
            }
        }
        Command::Logout => {
            state.auth.logout_user().await;
            println!("logged out");
        }
        Command::Flights => {
            state.flights.fetch_flights(None).await?;
            for flight in state.flights.active_flights().await {
                println!(
                    "{}  {} -> {}  {}  {}",
                    flight.id,
                    flight.origin_airport_code,
                    flight.destination_airport_code,
                    flight.departure_time.format("%Y-%m-%d %H:%M"),
                    flight_status_text(flight.status)
                );
            }
        }
        Command::Airports { search } => {
            let search = search.join(" ");
            state.airports.fetch_airports(Some(search.as_str())).await;
            if !report_error(state.airports.snapshot().await.error) {
                return Ok(false);
            }
            for option in state.airports.airport_options().await {
                println!("{}", option.label);
            }
        }
        Command::Bookings { flight_id } => {
            state.bookings.fetch_bookings(flight_id.as_deref()).await;
            let snapshot = state.bookings.snapshot().await;
            if !report_error(snapshot.error) {
                return Ok(false);
            }
            for booking in &snapshot.data.bookings {
                println!(
                    "{}  flight {}  {} pax  {:.2}  {}",
                    booking.id,
                    booking.flight_id,
                    booking.passenger_count,
                    booking.total_price,
                    booking_status_text(booking.status)
                );
            }
        }
        Command::Bills => {
            state.bills.fetch_customer_bills(&BillQueryCustomer::default()).await;
            let snapshot = state.bills.snapshot().await;
            if !report_error(snapshot.error) {
                return Ok(false);
            }
            for bill in &snapshot.data.customer_bills {
                println!(
                    "{}  {}  {:.2}  {}",
                    bill.id,
                    bill.description,
                    bill.amount,
                    bill.status.label()
                );
            }
        }
        Command::Can { operation } => {
            let allowed = state.session.can_access(&operation);
            let roles = match allowed_roles(&operation) {
                Some(roles) => roles.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(", "),
                None => "any logged-in user".to_string(),
            };
            println!("{}: {} (allowed: {})", operation, if allowed { "yes" } else { "no" }, roles);
            return Ok(allowed);
        }
    }
    Ok(true)
}

/// Print a store error; `false` when there was one.
fn report_error(error: Option<String>) -> bool {
    match error {
        Some(message) => {
            eprintln!("error: {}", message);
            false
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["flight-admin", "airports", "Soekarno", "Hatta"]).unwrap();
        assert!(matches!(cli.command, Command::Airports { ref search } if search.len() == 2));

        let cli = Cli::try_parse_from(["flight-admin", "bookings"]).unwrap();
        assert!(matches!(cli.command, Command::Bookings { flight_id: None }));

        let cli = Cli::try_parse_from(["flight-admin", "can", "flights/create"]).unwrap();
        assert!(matches!(cli.command, Command::Can { ref operation } if operation == "flights/create"));

        assert!(Cli::try_parse_from(["flight-admin", "login", "only-email"]).is_err());
    }
}
