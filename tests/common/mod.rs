#![allow(dead_code)]

use flight_admin::{AppState, Config};
use serde_json::{Value, json};
use wiremock::MockServer;

pub fn state_for(server: &MockServer) -> AppState {
    let config = Config::default().with_api_base_url(format!("{}/api", server.uri()));
    AppState::new(config).unwrap()
}

pub fn envelope(data: Value) -> Value {
    json!({
        "status": 200,
        "message": "OK",
        "data": data,
        "timestamp": "2025-03-01T08:00:00"
    })
}

pub fn flight(id: &str, gate: &str, is_deleted: bool) -> Value {
    json!({
        "id": id,
        "airlineId": "GA",
        "airplaneId": "PK-GIA",
        "originAirportCode": "CGK",
        "destinationAirportCode": "DPS",
        "departureTime": "2025-03-10T07:00:00",
        "arrivalTime": "2025-03-10T09:50:00",
        "terminal": "3",
        "gate": gate,
        "baggageAllowance": 20,
        "facilities": null,
        "status": 1,
        "createdAt": "2025-03-01T08:00:00",
        "updatedAt": "2025-03-01T08:00:00",
        "isDeleted": is_deleted
    })
}

pub fn airport(code: &str, name: &str) -> Value {
    json!({
        "iataCode": code,
        "name": name,
        "city": "Jakarta",
        "country": "Indonesia",
        "latitude": -6.1256,
        "longitude": 106.6558,
        "timezone": "Asia/Jakarta",
        "createdAt": "2025-03-01T08:00:00",
        "updatedAt": "2025-03-01T08:00:00"
    })
}

pub fn booking(id: &str, flight_id: &str, status: i32, passenger_count: i32) -> Value {
    json!({
        "id": id,
        "flightId": flight_id,
        "classFlightId": 1,
        "contactEmail": "rani@example.id",
        "contactPhone": "081234567890",
        "passengerCount": passenger_count,
        "status": status,
        "totalPrice": 3000000.0,
        "createdAt": "2025-03-01T08:00:00",
        "updatedAt": "2025-03-01T08:00:00",
        "isDeleted": false
    })
}

pub fn bill(id: &str, reference: &str, status: &str) -> Value {
    json!({
        "id": id,
        "customerId": "0b8f2a56-1c0d-4a8c-bb1f-0d3f6d2f3e21",
        "serviceName": "flight",
        "serviceReferenceId": reference,
        "description": format!("Booking {}", reference),
        "amount": 3000000.0,
        "status": status,
        "createdAt": "2025-03-01T08:00:00",
        "updatedAt": null,
        "paymentTimestamp": null
    })
}

pub fn airline(id: &str, name: &str) -> Value {
    json!({"id": id, "name": name})
}

pub fn airplane(id: &str, model: &str, is_deleted: bool) -> Value {
    json!({
        "id": id,
        "airlineId": "GA",
        "model": model,
        "seatCapacity": 180,
        "manufactureYear": 2019,
        "createdAt": "2025-03-01T08:00:00",
        "updatedAt": "2025-03-01T08:00:00",
        "isDeleted": is_deleted
    })
}

pub fn class_flight(id: i64, flight_id: &str, class_type: &str, price: f64) -> Value {
    json!({
        "id": id,
        "flightId": flight_id,
        "classType": class_type,
        "seatCapacity": 30,
        "availableSeats": 30,
        "price": price
    })
}

pub fn seat(id: i64, class_flight_id: i64, code: &str, passenger_id: Option<&str>) -> Value {
    json!({
        "id": id,
        "classFlightId": class_flight_id,
        "passengerId": passenger_id,
        "seatCode": code,
        "isBooked": passenger_id.is_some(),
        "createdAt": "2025-03-01T08:00:00",
        "updatedAt": "2025-03-01T08:00:00"
    })
}

pub fn passenger(id: &str, full_name: &str) -> Value {
    json!({
        "id": id,
        "fullName": full_name,
        "birthDate": "1994-05-17",
        "gender": 2,
        "idPassport": "A1234567",
        "createdAt": "2025-03-01T08:00:00",
        "updatedAt": "2025-03-01T08:00:00"
    })
}

pub fn booking_passenger(booking_id: &str, passenger_id: &str) -> Value {
    json!({
        "bookingId": booking_id,
        "passengerId": passenger_id,
        "createdAt": "2025-03-01T08:00:00"
    })
}
