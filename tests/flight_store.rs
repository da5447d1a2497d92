mod common;

use chrono::{TimeZone, Utc};
use flight_admin::entities::flight::{FlightListParams, UpdateFlightRequest};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{envelope, flight, state_for};

#[tokio::test]
async fn test_fetch_replaces_list_with_server_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/flight/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            flight("F1", "A1", false),
            flight("F2", "B4", false)
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let state = state_for(&server);
    let flights = state.flights.fetch_flights(None).await.unwrap();

    let snapshot = state.flights.snapshot().await;
    assert_eq!(flights.len(), 2);
    assert_eq!(snapshot.data.flights, flights);
    assert!(!snapshot.loading);
    assert_eq!(snapshot.error, None);
}

#[tokio::test]
async fn test_default_filters_only_send_include_deleted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/flight/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .mount(&server)
        .await;

    let state = state_for(&server);
    state.flights.fetch_flights(None).await.unwrap();
    state
        .flights
        .fetch_flights(Some(&FlightListParams {
            airline_id: Some(String::new()),
            origin_airport_code: Some("CGK".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("includeDeleted=false"));
    let second = requests[1].url.query().unwrap_or_default();
    assert!(second.contains("originAirportCode=CGK"));
    assert!(!second.contains("airlineId"));
}

#[tokio::test]
async fn test_failed_fetch_keeps_cache_and_records_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/flight/all"))
        .and(query_param("includeDeleted", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([flight("F1", "A1", false)]))))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/flight/all"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "Database unavailable"})))
        .mount(&server)
        .await;

    let state = state_for(&server);
    state.flights.fetch_flights(None).await.unwrap();
    let err = state.flights.fetch_flights(None).await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    let snapshot = state.flights.snapshot().await;
    assert_eq!(snapshot.data.flights.len(), 1);
    assert_eq!(snapshot.error.as_deref(), Some("Database unavailable"));
}

#[tokio::test]
async fn test_update_replaces_matching_flight() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/flight/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            flight("F1", "A1", false),
            flight("F2", "B4", false)
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/flight/update"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(flight("F2", "C9", false))))
        .expect(1)
        .mount(&server)
        .await;

    let state = state_for(&server);
    state.flights.fetch_flights(None).await.unwrap();

    let request = UpdateFlightRequest {
        id: "F2".to_string(),
        departure_time: Utc.with_ymd_and_hms(2025, 3, 10, 7, 0, 0).unwrap(),
        arrival_time: Utc.with_ymd_and_hms(2025, 3, 10, 9, 50, 0).unwrap(),
        terminal: "3".to_string(),
        gate: "C9".to_string(),
        baggage_allowance: 20,
        facilities: None,
        classes: None,
    };
    state.flights.update_flight(&request).await.unwrap();

    let flights = state.flights.snapshot().await.data.flights;
    assert_eq!(flights.len(), 2);
    assert_eq!(flights[0].gate, "A1");
    assert_eq!(flights[1].gate, "C9");
}

#[tokio::test]
async fn test_delete_is_soft() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/flight/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            flight("F1", "A1", false),
            flight("F2", "B4", false)
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/flight/delete/F1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(flight("F1", "A1", true))))
        .expect(1)
        .mount(&server)
        .await;

    let state = state_for(&server);
    state.flights.fetch_flights(None).await.unwrap();
    state.flights.delete_flight("F1").await.unwrap();

    let snapshot = state.flights.snapshot().await;
    assert_eq!(snapshot.data.flights.len(), 2);
    assert!(snapshot.data.flights[0].is_deleted);
    let active = state.flights.active_flights().await;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, "F2");
}
