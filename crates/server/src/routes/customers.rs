//! Customer management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use pet_store_core::{CustomerId, PetStoreId};

use super::MessageResponse;
use crate::error::Result;
use crate::models::PetStoreCustomer;
use crate::services::PetStoreService;
use crate::state::AppState;

/// Enroll a new customer at the given store.
///
/// # Errors
///
/// Returns `NotFound` if the store does not exist, `BadRequest` if the email
/// is missing or malformed, and `Conflict` if the email is already taken.
pub async fn create(
    State(state): State<AppState>,
    Path(pet_store_id): Path<PetStoreId>,
    Json(data): Json<PetStoreCustomer>,
) -> Result<(StatusCode, Json<PetStoreCustomer>)> {
    tracing::info!("Adding customer to store with ID={pet_store_id}");

    let saved = PetStoreService::new(state.pool())
        .save_customer(pet_store_id, data)
        .await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Update an existing customer. The path ID overrides any ID in the body.
///
/// # Errors
///
/// Returns `NotFound` if the store or customer does not exist, and
/// `BadRequest` if the customer is not linked to the store.
pub async fn update(
    State(state): State<AppState>,
    Path((pet_store_id, customer_id)): Path<(PetStoreId, CustomerId)>,
    Json(mut data): Json<PetStoreCustomer>,
) -> Result<Json<PetStoreCustomer>> {
    tracing::info!("Updating customer with ID={customer_id}");

    data.customer_id = Some(customer_id);
    let saved = PetStoreService::new(state.pool())
        .save_customer(pet_store_id, data)
        .await?;

    Ok(Json(saved))
}

/// Remove a customer from the given store.
///
/// # Errors
///
/// Returns `NotFound` if the customer does not exist, and `BadRequest` if it
/// is not linked to the store.
pub async fn remove(
    State(state): State<AppState>,
    Path((pet_store_id, customer_id)): Path<(PetStoreId, CustomerId)>,
) -> Result<Json<MessageResponse>> {
    tracing::info!("Removing customer with ID={customer_id} from store with ID={pet_store_id}");

    PetStoreService::new(state.pool())
        .delete_customer(pet_store_id, customer_id)
        .await?;

    Ok(Json(MessageResponse {
        message: format!(
            "Successfully deleted customer with ID={customer_id} from store with ID={pet_store_id}"
        ),
    }))
}
