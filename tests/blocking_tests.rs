//! Integration tests for blocking calls.
//!
//! The mock server runs on its own multi-threaded runtime so that the calls
//! under test are made from plain synchronous code.

use serde_json::json;
use square_api::clients::{ApiErrorKind, SquareError};
use square_api::models::{SearchOrdersRequest, SearchOrdersResponse};
use square_api::{
    AccessToken, CancellationToken, CustomUrl, Environment, SquareClient, SquareConfig,
    ValidationError,
};
use tokio::runtime::Runtime;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn start_server(runtime: &Runtime) -> MockServer {
    runtime.block_on(MockServer::start())
}

fn client_for(server: &MockServer) -> SquareClient {
    let config = SquareConfig::builder()
        .environment(Environment::Custom)
        .custom_url(CustomUrl::new(server.uri()).unwrap())
        .access_token(AccessToken::new("blocking-token").unwrap())
        .build()
        .unwrap();
    SquareClient::new(config).unwrap()
}

#[test]
fn test_send_blocking_matches_async_behaviour() {
    let runtime = Runtime::new().unwrap();
    let server = start_server(&runtime);
    runtime.block_on(
        Mock::given(method("POST"))
            .and(path("/v2/orders/search"))
            .and(header("authorization", "Bearer blocking-token"))
            .and(body_json(json!({"location_ids": ["L1"], "limit": 1})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "orders": [{"id": "O1", "location_id": "L1"}],
                "cursor": "next-page"
            })))
            .expect(1)
            .mount(&server),
    );

    let client = client_for(&server);
    let request = SearchOrdersRequest::builder()
        .location_ids(vec!["L1".to_string()])
        .limit(1_i64)
        .build()
        .unwrap();

    let response = client.orders().search_orders(&request).send_blocking().unwrap();

    let expected: SearchOrdersResponse = serde_json::from_value(json!({
        "orders": [{"id": "O1", "location_id": "L1"}],
        "cursor": "next-page"
    }))
    .unwrap();
    assert_eq!(*response, expected);
}

#[test]
fn test_send_blocking_reports_api_errors() {
    let runtime = Runtime::new().unwrap();
    let server = start_server(&runtime);
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/v2/devices/codes/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{"category": "INVALID_REQUEST_ERROR", "code": "NOT_FOUND", "detail": "Device code not found"}]
            })))
            .mount(&server),
    );

    let client = client_for(&server);
    let error = client.devices().get_device_code("missing").send_blocking().unwrap_err();

    match error {
        SquareError::Api(api) => {
            assert_eq!(api.kind(), ApiErrorKind::NotFound);
            assert_eq!(api.detail(), Some("Device code not found"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[test]
fn test_send_blocking_with_cancelled_token() {
    let runtime = Runtime::new().unwrap();
    let server = start_server(&runtime);

    let client = client_for(&server);
    let token = CancellationToken::new();
    token.cancel();

    let error = client
        .devices()
        .get_device_code("abc")
        .send_blocking_with_cancel(&token)
        .unwrap_err();

    assert!(error.is_cancelled());
    let received = runtime.block_on(server.received_requests()).unwrap();
    assert!(received.is_empty());
}

#[test]
fn test_repeated_blocking_calls_reuse_the_client() {
    let runtime = Runtime::new().unwrap();
    let server = start_server(&runtime);
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/v2/inventory/adjustments/adj-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "adjustment": {"id": "adj-1", "quantity": "3"}
            })))
            .expect(3)
            .mount(&server),
    );

    let client = client_for(&server);
    for _ in 0..3 {
        let response = client
            .inventory()
            .retrieve_inventory_adjustment("adj-1")
            .send_blocking()
            .unwrap();
        assert!(response.adjustment.is_value());
    }
}

#[tokio::test]
async fn test_send_blocking_inside_async_context_is_rejected() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let error = client
        .devices()
        .get_device_code("abc")
        .send_blocking()
        .unwrap_err();

    assert!(matches!(
        error,
        SquareError::Validation(ValidationError::BlockingInAsyncContext)
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}
