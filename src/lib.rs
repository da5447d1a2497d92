pub mod client;
pub mod config;
pub mod entities;
pub mod error;
pub mod rbac;
pub mod services;
pub mod session;
pub mod stores;
pub mod utils;

use std::sync::Arc;

use client::ApiClient;
use services::{
    AirlineService, AirplaneService, AirportService, AuthService, BillService,
    BookingPassengerService, BookingService, ClassFlightService, FlightService, PassengerService,
    SeatService,
};
use session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};
use stores::{
    AirlineStore, AirplaneStore, AirportStore, AuthStore, BillStore, BookingPassengerStore,
    BookingStore, ClassFlightStore, FlightStore, PassengerStore, SeatStore,
};

pub use config::Config;
pub use error::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
    pub session: Session,
    pub auth: AuthStore,
    pub airlines: AirlineStore,
    pub airplanes: AirplaneStore,
    pub airports: AirportStore,
    pub flights: FlightStore,
    pub class_flights: ClassFlightStore,
    pub seats: SeatStore,
    pub passengers: PassengerStore,
    pub bookings: BookingStore,
    pub booking_passengers: BookingPassengerStore,
    pub bills: BillStore,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let tokens: Arc<dyn TokenStore> = match &config.token_file {
            Some(path) => Arc::new(FileTokenStore::new(path.clone())),
            None => Arc::new(MemoryTokenStore::new()),
        };
        Self::with_session(config.clone(), Session::new(tokens, config.session_policy))
    }

    pub fn with_session(config: Config, session: Session) -> AppResult<Self> {
        let api = ApiClient::new(&config, session.clone())?;
        let bookings = BookingStore::new(BookingService::new(api.clone()));

        Ok(Self {
            auth: AuthStore::new(AuthService::new(api.clone()), session.clone()),
            airlines: AirlineStore::new(AirlineService::new(api.clone())),
            airplanes: AirplaneStore::new(AirplaneService::new(api.clone())),
            airports: AirportStore::new(AirportService::new(api.clone())),
            flights: FlightStore::new(FlightService::new(api.clone())),
            class_flights: ClassFlightStore::new(ClassFlightService::new(api.clone())),
            seats: SeatStore::new(SeatService::new(api.clone())),
            passengers: PassengerStore::new(PassengerService::new(api.clone())),
            booking_passengers: BookingPassengerStore::new(BookingPassengerService::new(api.clone())),
            bills: BillStore::new(BillService::new(api.clone())).with_booking_store(bookings.clone()),
            bookings,
            config,
            api,
            session,
        })
    }
}
