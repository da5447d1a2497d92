mod common;

use flight_admin::entities::seat::UpdateSeatRequest;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{envelope, seat, state_for};

const PASSENGER: &str = "3c4e8b1a-9d2f-4f6a-8c1e-5b7d9a0e2f13";

async fn seeded(server: &MockServer) -> flight_admin::AppState {
    Mock::given(method("GET"))
        .and(path("/api/seat"))
        .and(query_param("classFlightId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            seat(11, 1, "1A", None),
            seat(12, 1, "1B", None)
        ]))))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/seat"))
        .and(query_param("flightId", "F1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            seat(11, 1, "1A", None),
            seat(12, 1, "1B", None),
            seat(21, 2, "5C", None)
        ]))))
        .mount(server)
        .await;

    let state = state_for(server);
    state.seats.fetch_by_class_flight(1).await.unwrap();
    state.seats.fetch_by_flight("F1").await.unwrap();
    state
}

#[tokio::test]
async fn test_assigning_passenger_updates_every_index() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/seat/update"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(seat(12, 1, "1B", Some(PASSENGER)))))
        .expect(1)
        .mount(&server)
        .await;
    let state = seeded(&server).await;

    let passenger_id: Uuid = PASSENGER.parse().unwrap();
    let request = UpdateSeatRequest {
        id: 12,
        passenger_id: Some(passenger_id),
    };
    state.seats.update(&request).await.unwrap();

    let snapshot = state.seats.snapshot().await.data;
    assert_eq!(snapshot.items[&12].passenger_id, Some(passenger_id));
    assert!(snapshot.by_class_flight[&1][1].is_booked);
    assert!(snapshot.by_flight["F1"][1].is_booked);
    assert!(!snapshot.by_flight["F1"][0].is_booked);
}

#[tokio::test]
async fn test_remove_drops_seat_from_all_indexes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/seat/delete/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(seat(11, 1, "1A", None))))
        .expect(1)
        .mount(&server)
        .await;
    let state = seeded(&server).await;

    state.seats.remove(11).await.unwrap();

    let snapshot = state.seats.snapshot().await.data;
    assert_eq!(state.seats.seat(11).await, None);
    assert_eq!(snapshot.by_class_flight[&1].len(), 1);
    assert_eq!(snapshot.by_flight["F1"].len(), 2);
    assert!(snapshot.by_flight["F1"].iter().all(|s| s.id != 11));
}
