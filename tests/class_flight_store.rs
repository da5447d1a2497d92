mod common;

use flight_admin::entities::class_flight::UpdateClassFlightRequest;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{class_flight, envelope, state_for};

async fn mount_f1_classes(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/classFlight"))
        .and(query_param("flightId", "F1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            class_flight(1, "F1", "Economy", 1500000.0),
            class_flight(2, "F1", "Business", 4500000.0)
        ]))))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_by_id_upserts_into_flight_list() {
    let server = MockServer::start().await;
    mount_f1_classes(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/classFlight/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(class_flight(3, "F1", "First", 9000000.0))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/classFlight/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(class_flight(1, "F1", "Economy", 1250000.0))))
        .mount(&server)
        .await;

    let state = state_for(&server);
    state.class_flights.fetch_by_flight("F1").await.unwrap();
    state.class_flights.fetch_by_id(3).await.unwrap();
    state.class_flights.fetch_by_id(1).await.unwrap();

    let classes = state.class_flights.classes_for("F1").await;
    assert_eq!(classes.len(), 3);
    assert_eq!(classes[0].price, 1250000.0);
    assert_eq!(classes[2].class_type, "First");
    assert_eq!(state.class_flights.snapshot().await.data.items.len(), 3);
}

#[tokio::test]
async fn test_update_touches_both_indexes() {
    let server = MockServer::start().await;
    mount_f1_classes(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/classFlight/update"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(class_flight(2, "F1", "Business", 3900000.0))))
        .mount(&server)
        .await;

    let state = state_for(&server);
    state.class_flights.fetch_by_flight("F1").await.unwrap();
    let request = UpdateClassFlightRequest {
        id: 2,
        seat_capacity: 30,
        price: 3900000.0,
    };
    state.class_flights.update(&request).await.unwrap();

    let snapshot = state.class_flights.snapshot().await.data;
    assert_eq!(snapshot.items[&2].price, 3900000.0);
    assert_eq!(snapshot.by_flight["F1"][1].price, 3900000.0);
}

#[tokio::test]
async fn test_remove_drops_class_everywhere() {
    let server = MockServer::start().await;
    mount_f1_classes(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/classFlight/delete/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(class_flight(1, "F1", "Economy", 1500000.0))))
        .expect(1)
        .mount(&server)
        .await;

    let state = state_for(&server);
    state.class_flights.fetch_by_flight("F1").await.unwrap();
    state.class_flights.remove(1).await.unwrap();

    let snapshot = state.class_flights.snapshot().await.data;
    assert!(!snapshot.items.contains_key(&1));
    assert_eq!(snapshot.by_flight["F1"].len(), 1);
    assert_eq!(snapshot.by_flight["F1"][0].id, 2);
}
