pub mod airline;
pub mod airplane;
pub mod airport;
pub mod bill;
pub mod booking;
pub mod booking_passenger;
pub mod class_flight;
pub mod flight;
pub mod passenger;
pub mod response;
pub mod seat;
pub mod user;

pub use response::ApiResponse;
