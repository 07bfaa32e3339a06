//! Integration tests for the pet store endpoints.
//!
//! Each test builds the full router against its own in-memory database, so
//! tests are independent and need no running server.

#![allow(clippy::indexing_slicing)]

use axum::http::StatusCode;
use serde_json::{Value, json};

use pet_store_integration_tests::{empty_request, json_request, request_json, test_app};

fn store_payload() -> Value {
    json!({
        "petStoreName": "Pawsome Pets",
        "petStoreAddress": "1 Bark Avenue",
        "petStoreCity": "Springfield",
        "petStoreState": "IL",
        "petStoreZip": "62701",
        "petStorePhone": "555-0100"
    })
}

// ============================================================================
// Create & Update Tests
// ============================================================================

#[tokio::test]
async fn test_create_store_returns_created_with_generated_id() {
    let app = test_app().await;

    let (status, body) =
        request_json(app, json_request("POST", "/pet_store", &store_payload())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["petStoreId"], 1);
    assert_eq!(body["petStoreName"], "Pawsome Pets");
    assert_eq!(body["petStoreZip"], "62701");
    assert_eq!(body["employees"], json!([]));
    assert_eq!(body["customers"], json!([]));
}

#[tokio::test]
async fn test_create_twice_yields_distinct_stores() {
    let app = test_app().await;

    let (_, first) = request_json(
        app.clone(),
        json_request("POST", "/pet_store", &store_payload()),
    )
    .await;
    let (_, second) = request_json(
        app.clone(),
        json_request("POST", "/pet_store", &store_payload()),
    )
    .await;

    assert_ne!(first["petStoreId"], second["petStoreId"]);

    let (status, listing) = request_json(app, empty_request("GET", "/pet_store")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_update_store_overwrites_fields() {
    let app = test_app().await;

    request_json(
        app.clone(),
        json_request("POST", "/pet_store", &store_payload()),
    )
    .await;

    let mut updated = store_payload();
    updated["petStoreName"] = json!("Pawsome Pets II");
    updated["petStorePhone"] = Value::Null;

    let (status, body) =
        request_json(app.clone(), json_request("PUT", "/pet_store/1", &updated)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["petStoreId"], 1);
    assert_eq!(body["petStoreName"], "Pawsome Pets II");
    assert_eq!(body["petStorePhone"], Value::Null);

    let (_, fetched) = request_json(app, empty_request("GET", "/pet_store/1")).await;
    assert_eq!(fetched["petStoreName"], "Pawsome Pets II");
}

#[tokio::test]
async fn test_update_uses_path_id_over_body_id() {
    let app = test_app().await;

    request_json(
        app.clone(),
        json_request("POST", "/pet_store", &store_payload()),
    )
    .await;

    let mut payload = store_payload();
    payload["petStoreId"] = json!(999);
    payload["petStoreName"] = json!("Renamed");

    let (status, body) =
        request_json(app.clone(), json_request("PUT", "/pet_store/1", &payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["petStoreId"], 1);
    assert_eq!(body["petStoreName"], "Renamed");

    let (status, _) = request_json(app, empty_request("GET", "/pet_store/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_store_is_not_found() {
    let app = test_app().await;

    let (status, body) = request_json(
        app,
        json_request("PUT", "/pet_store/42", &store_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Pet store with ID=42 does not exist.");
}

// ============================================================================
// Retrieve Tests
// ============================================================================

#[tokio::test]
async fn test_get_missing_store_is_not_found() {
    let app = test_app().await;

    let (status, body) = request_json(app, empty_request("GET", "/pet_store/7")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Pet store with ID=7 does not exist.");
}

#[tokio::test]
async fn test_get_store_includes_employees_and_customers() {
    let app = test_app().await;

    request_json(
        app.clone(),
        json_request("POST", "/pet_store", &store_payload()),
    )
    .await;
    request_json(
        app.clone(),
        json_request(
            "POST",
            "/pet_store/1/employee",
            &json!({"employeeFirstName": "Kim", "employeeJobTitle": "Groomer"}),
        ),
    )
    .await;
    request_json(
        app.clone(),
        json_request(
            "POST",
            "/pet_store/1/customer",
            &json!({"customerFirstName": "Ana", "customerEmail": "ana@example.com"}),
        ),
    )
    .await;

    let (status, body) = request_json(app, empty_request("GET", "/pet_store/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employees"][0]["employeeFirstName"], "Kim");
    assert_eq!(body["customers"][0]["customerEmail"], "ana@example.com");
}

#[tokio::test]
async fn test_list_stores_returns_summaries_without_collections() {
    let app = test_app().await;

    request_json(
        app.clone(),
        json_request("POST", "/pet_store", &store_payload()),
    )
    .await;
    request_json(
        app.clone(),
        json_request(
            "POST",
            "/pet_store/1/employee",
            &json!({"employeeFirstName": "Kim"}),
        ),
    )
    .await;

    let (status, body) = request_json(app, empty_request("GET", "/pet_store")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["petStoreName"], "Pawsome Pets");
    assert_eq!(body[0]["employees"], json!([]));
    assert_eq!(body[0]["customers"], json!([]));
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_store_reports_and_then_is_gone() {
    let app = test_app().await;

    request_json(
        app.clone(),
        json_request("POST", "/pet_store", &store_payload()),
    )
    .await;

    let (status, body) = request_json(app.clone(), empty_request("DELETE", "/pet_store/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully deleted pet store with ID=1");

    let (status, body) = request_json(app, empty_request("DELETE", "/pet_store/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Pet store with ID=1 does not exist.");
}
