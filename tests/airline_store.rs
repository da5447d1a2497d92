mod common;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{airline, envelope, state_for};

#[tokio::test]
async fn test_airline_name_falls_back_to_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/airline/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            airline("GA", "Garuda Indonesia"),
            airline("QZ", "Indonesia AirAsia")
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let state = state_for(&server);
    state.airlines.fetch_airlines().await;

    assert_eq!(state.airlines.snapshot().await.data.airlines.len(), 2);
    assert_eq!(state.airlines.airline_name("GA").await, "Garuda Indonesia");
    assert_eq!(state.airlines.airline_name("JT").await, "JT");
}

#[tokio::test]
async fn test_null_list_is_empty_without_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/airline/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(null))))
        .mount(&server)
        .await;

    let state = state_for(&server);
    state.airlines.fetch_airlines().await;

    let snapshot = state.airlines.snapshot().await;
    assert!(snapshot.data.airlines.is_empty());
    assert_eq!(snapshot.error, None);
}
