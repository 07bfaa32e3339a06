//! HTTP route handlers for the pet store API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                      - Liveness check
//! GET  /health/ready                                - Readiness check (database ping)
//!
//! # Pet stores
//! POST   /pet_store                                 - Create a store
//! PUT    /pet_store/{storeId}                       - Update a store
//! GET    /pet_store/{storeId}                       - Fetch one store with employees and customers
//! GET    /pet_store                                 - List all stores (summary view)
//! DELETE /pet_store/{storeId}                       - Delete a store
//!
//! # Employees
//! POST   /pet_store/{storeId}/employee              - Hire an employee
//! PUT    /pet_store/{storeId}/employee/{employeeId} - Update an employee
//! DELETE /pet_store/{storeId}/employee/{employeeId} - Remove an employee
//!
//! # Customers
//! POST   /pet_store/{storeId}/customer              - Enroll a customer
//! PUT    /pet_store/{storeId}/customer/{customerId} - Update a customer
//! DELETE /pet_store/{storeId}/customer/{customerId} - Remove a customer
//! ```

pub mod customers;
pub mod employees;
pub mod pet_stores;

use axum::Router;
use axum::routing::{post, put};
use serde::Serialize;

use crate::state::AppState;

/// Informational response returned by the delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create the pet store routes router.
pub fn pet_store_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(pet_stores::create).get(pet_stores::index))
        .route(
            "/{pet_store_id}",
            put(pet_stores::update)
                .get(pet_stores::show)
                .delete(pet_stores::remove),
        )
}

/// Create the employee routes router.
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/{pet_store_id}/employee", post(employees::create))
        .route(
            "/{pet_store_id}/employee/{employee_id}",
            put(employees::update).delete(employees::remove),
        )
}

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/{pet_store_id}/customer", post(customers::create))
        .route(
            "/{pet_store_id}/customer/{customer_id}",
            put(customers::update).delete(customers::remove),
        )
}

/// Create all routes for the pet store API.
pub fn routes() -> Router<AppState> {
    Router::new().nest(
        "/pet_store",
        pet_store_routes()
            .merge(employee_routes())
            .merge(customer_routes()),
    )
}
