//! Integration tests for request and response models.
//!
//! These use payloads shaped like Square's documented examples.

use serde_json::json;
use square_api::idempotency::new_idempotency_key;
use square_api::models::{
    BatchRetrieveOrdersRequest, CloneOrderRequest, CreateDeviceCodeRequest, DeviceCode,
    ListEmployeesResponse, Nullable, PayOrderRequest, RetrieveOrderResponse,
    SearchLoyaltyRewardsRequest, SearchLoyaltyRewardsRequestLoyaltyRewardQuery,
    SearchOrdersFilter, SearchOrdersQuery, SearchOrdersRequest, SearchOrdersSort,
    SearchOrdersStateFilter,
};
use square_api::ValidationError;

#[test]
fn test_order_response_survives_decode_encode_decode() {
    let payload = json!({
        "order": {
            "id": "CAISENgvlJ6jLWAzERDzjyHVybY",
            "location_id": "057P5VYJ4A5X1",
            "line_items": [{
                "uid": "8uSwfzvUImn3IRrvciqlXC",
                "name": "New York Strip Steak",
                "quantity": "1",
                "base_price_money": {"amount": 1599, "currency": "USD"}
            }],
            "fulfillments": [{
                "uid": "bQ5S0tBWD1xWpZ5VVbaIGD",
                "type": "PICKUP",
                "state": "PROPOSED",
                "pickup_details": {
                    "recipient": {"display_name": "Jaiden Urie"},
                    "pickup_at": "2019-02-14T18:23:12Z",
                    "is_curbside_pickup": true,
                    "curbside_pickup_details": {"curbside_details": "Mazda CX5, Black, License Plate: 234ABC"}
                }
            }],
            "metadata": {"source": "kiosk"},
            "state": "OPEN",
            "version": 1,
            "total_money": {"amount": 1599, "currency": "USD"}
        }
    });

    let first: RetrieveOrderResponse = serde_json::from_value(payload).unwrap();
    let encoded = serde_json::to_string(&first).unwrap();
    let second: RetrieveOrderResponse = serde_json::from_str(&encoded).unwrap();

    assert_eq!(first, second);
    let order = second.order.as_option().unwrap();
    let fulfillment = &order.fulfillments.as_option().unwrap()[0];
    assert_eq!(fulfillment.fulfillment_type.as_option().map(String::as_str), Some("PICKUP"));
}

#[test]
fn test_request_models_round_trip_through_builders() {
    let search = SearchOrdersRequest::builder()
        .location_ids(vec!["057P5VYJ4A5X1".to_string()])
        .query(
            SearchOrdersQuery::builder()
                .filter(
                    SearchOrdersFilter::builder()
                        .state_filter(
                            SearchOrdersStateFilter::builder()
                                .states(vec!["COMPLETED".to_string()])
                                .build()
                                .unwrap(),
                        )
                        .build()
                        .unwrap(),
                )
                .sort(
                    SearchOrdersSort::builder()
                        .sort_field("CLOSED_AT")
                        .sort_order("DESC")
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        )
        .limit(3_i64)
        .return_entries(true)
        .build()
        .unwrap();
    assert_eq!(search.to_builder().build().unwrap(), search);

    let pay = PayOrderRequest::builder()
        .idempotency_key(new_idempotency_key())
        .order_version(1_i64)
        .payment_ids(vec!["EnZdNAlWCmfh6Mt5FMNST1o7taB".to_string()])
        .build()
        .unwrap();
    assert_eq!(pay.to_builder().build().unwrap(), pay);

    let clone = CloneOrderRequest::builder()
        .order_id("ZAISEM52YcpmcWAzERDOyiWS123")
        .version(3_i64)
        .build()
        .unwrap();
    assert_eq!(clone.to_builder().build().unwrap(), clone);
}

#[test]
fn test_nested_required_fields_are_reported_per_model() {
    let device_code = DeviceCode::builder().name("Counter 1").build();
    assert_eq!(
        device_code.unwrap_err(),
        ValidationError::MissingRequiredFields {
            model: "DeviceCode",
            fields: vec!["product_type"],
        }
    );

    let request = CreateDeviceCodeRequest::builder().build();
    assert_eq!(
        request.unwrap_err(),
        ValidationError::MissingRequiredFields {
            model: "CreateDeviceCodeRequest",
            fields: vec!["idempotency_key", "device_code"],
        }
    );

    let batch = BatchRetrieveOrdersRequest::builder().location_id("L1").build();
    assert!(matches!(
        batch,
        Err(ValidationError::MissingRequiredFields { model: "BatchRetrieveOrdersRequest", .. })
    ));
}

#[test]
fn test_loyalty_search_serializes_nested_query() {
    let request = SearchLoyaltyRewardsRequest::builder()
        .query(
            SearchLoyaltyRewardsRequestLoyaltyRewardQuery::builder()
                .loyalty_account_id("5adcb100-07f1-4ee7-b8c6-6bb9ebc474bd")
                .build()
                .unwrap(),
        )
        .limit(10_i64)
        .build()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "query": {"loyalty_account_id": "5adcb100-07f1-4ee7-b8c6-6bb9ebc474bd"},
            "limit": 10
        })
    );
}

#[test]
fn test_null_and_absent_survive_decoding() {
    let response: ListEmployeesResponse = serde_json::from_value(json!({
        "employees": [{"id": "emp-1", "email": null}],
        "cursor": null
    }))
    .unwrap();

    let employee = &response.employees.as_option().unwrap()[0];
    assert_eq!(employee.email, Nullable::Null);
    assert_eq!(employee.phone_number, Nullable::Absent);
    assert!(response.cursor.is_null());
    assert!(response.errors.is_absent());

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"employees": [{"id": "emp-1", "email": null}], "cursor": null})
    );
}
