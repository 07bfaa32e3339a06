//! Integration tests for the customer endpoints.
//!
//! Customers are shared across stores through a membership table and carry a
//! unique email address, so these tests lean on the conflict and membership
//! failure modes.

#![allow(clippy::indexing_slicing)]

use axum::Router;
use axum::http::StatusCode;
use serde_json::{Value, json};

use pet_store_integration_tests::{empty_request, json_request, request_json, test_app};

fn customer_payload(email: &str) -> Value {
    json!({
        "customerFirstName": "Ana",
        "customerLastName": "Silva",
        "customerEmail": email
    })
}

/// Create a store and return its ID.
async fn create_store(app: &Router) -> i64 {
    let (status, body) = request_json(
        app.clone(),
        json_request("POST", "/pet_store", &json!({"petStoreName": "Pawsome Pets"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["petStoreId"].as_i64().expect("store ID")
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_customer_returns_created_and_joins_store() {
    let app = test_app().await;
    let store_id = create_store(&app).await;

    let (status, body) = request_json(
        app.clone(),
        json_request(
            "POST",
            &format!("/pet_store/{store_id}/customer"),
            &customer_payload("ana@example.com"),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["customerId"], 1);
    assert_eq!(body["customerEmail"], "ana@example.com");

    let (_, store) = request_json(
        app,
        empty_request("GET", &format!("/pet_store/{store_id}")),
    )
    .await;
    assert_eq!(store["customers"][0]["customerId"], 1);
}

#[tokio::test]
async fn test_create_customer_for_missing_store_is_not_found() {
    let app = test_app().await;

    let (status, body) = request_json(
        app,
        json_request(
            "POST",
            "/pet_store/5/customer",
            &customer_payload("ana@example.com"),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Pet store with ID=5 does not exist.");
}

#[tokio::test]
async fn test_create_customer_with_taken_email_is_conflict() {
    let app = test_app().await;
    let first = create_store(&app).await;
    let second = create_store(&app).await;
    request_json(
        app.clone(),
        json_request(
            "POST",
            &format!("/pet_store/{first}/customer"),
            &customer_payload("ana@example.com"),
        ),
    )
    .await;

    let (status, body) = request_json(
        app,
        json_request(
            "POST",
            &format!("/pet_store/{second}/customer"),
            &customer_payload("ana@example.com"),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["message"],
        "Customer with email address: ana@example.com already exists."
    );
}

#[tokio::test]
async fn test_create_customer_without_email_is_rejected() {
    let app = test_app().await;
    let store_id = create_store(&app).await;

    let (status, body) = request_json(
        app,
        json_request(
            "POST",
            &format!("/pet_store/{store_id}/customer"),
            &json!({"customerFirstName": "Ana"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Customer email is required.");
}

#[tokio::test]
async fn test_create_customer_with_malformed_email_is_rejected() {
    let app = test_app().await;
    let store_id = create_store(&app).await;

    let (status, body) = request_json(
        app,
        json_request(
            "POST",
            &format!("/pet_store/{store_id}/customer"),
            &customer_payload("not-an-email"),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Customer email is invalid: email must contain an @ symbol."
    );
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_customer_keeps_own_email() {
    let app = test_app().await;
    let store_id = create_store(&app).await;
    request_json(
        app.clone(),
        json_request(
            "POST",
            &format!("/pet_store/{store_id}/customer"),
            &customer_payload("ana@example.com"),
        ),
    )
    .await;

    let mut updated = customer_payload("ana@example.com");
    updated["customerLastName"] = json!("Silva-Moreno");

    let (status, body) = request_json(
        app,
        json_request(
            "PUT",
            &format!("/pet_store/{store_id}/customer/1"),
            &updated,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["customerId"], 1);
    assert_eq!(body["customerLastName"], "Silva-Moreno");
    assert_eq!(body["customerEmail"], "ana@example.com");
}

#[tokio::test]
async fn test_update_customer_through_unlinked_store_is_rejected() {
    let app = test_app().await;
    let first = create_store(&app).await;
    let second = create_store(&app).await;
    request_json(
        app.clone(),
        json_request(
            "POST",
            &format!("/pet_store/{first}/customer"),
            &customer_payload("ana@example.com"),
        ),
    )
    .await;

    let (status, body) = request_json(
        app,
        json_request(
            "PUT",
            &format!("/pet_store/{second}/customer/1"),
            &customer_payload("ana@example.com"),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        format!("Pet Store with ID={second} not found for the Customer with ID=1")
    );
}

#[tokio::test]
async fn test_update_missing_customer_is_not_found() {
    let app = test_app().await;
    let store_id = create_store(&app).await;

    let (status, body) = request_json(
        app,
        json_request(
            "PUT",
            &format!("/pet_store/{store_id}/customer/8"),
            &customer_payload("ana@example.com"),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Customer with ID=8 does not exist.");
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_customer_reports_and_then_is_gone() {
    let app = test_app().await;
    let store_id = create_store(&app).await;
    request_json(
        app.clone(),
        json_request(
            "POST",
            &format!("/pet_store/{store_id}/customer"),
            &customer_payload("ana@example.com"),
        ),
    )
    .await;

    let (status, body) = request_json(
        app.clone(),
        empty_request("DELETE", &format!("/pet_store/{store_id}/customer/1")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("Successfully deleted customer with ID=1 from store with ID={store_id}")
    );

    let (status, body) = request_json(
        app,
        empty_request("DELETE", &format!("/pet_store/{store_id}/customer/1")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Customer with ID=1 does not exist.");
}

#[tokio::test]
async fn test_delete_customer_through_unlinked_store_is_rejected() {
    let app = test_app().await;
    let first = create_store(&app).await;
    let second = create_store(&app).await;
    request_json(
        app.clone(),
        json_request(
            "POST",
            &format!("/pet_store/{first}/customer"),
            &customer_payload("ana@example.com"),
        ),
    )
    .await;

    let (status, body) = request_json(
        app,
        empty_request("DELETE", &format!("/pet_store/{second}/customer/1")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        format!("Pet Store with ID={second} not found for the Customer with ID=1")
    );
}
