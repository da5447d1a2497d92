//! One façade per entity, each mapping operations onto REST endpoints.

pub mod airline;
pub mod airplane;
pub mod airport;
pub mod auth;
pub mod bill;
pub mod booking;
pub mod booking_passenger;
pub mod class_flight;
pub mod flight;
pub mod passenger;
pub mod seat;

pub use airline::AirlineService;
pub use airplane::AirplaneService;
pub use airport::AirportService;
pub use auth::AuthService;
pub use bill::BillService;
pub use booking::BookingService;
pub use booking_passenger::BookingPassengerService;
pub use class_flight::ClassFlightService;
pub use flight::FlightService;
pub use passenger::PassengerService;
pub use seat::SeatService;
