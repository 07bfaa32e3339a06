//! Pet store management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use pet_store_core::PetStoreId;

use super::MessageResponse;
use crate::error::Result;
use crate::models::PetStoreData;
use crate::services::PetStoreService;
use crate::state::AppState;

/// Create a new pet store.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub async fn create(
    State(state): State<AppState>,
    Json(data): Json<PetStoreData>,
) -> Result<(StatusCode, Json<PetStoreData>)> {
    tracing::info!("Creating store");

    let saved = PetStoreService::new(state.pool()).save_pet_store(data).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Update an existing pet store. The path ID overrides any ID in the body.
///
/// # Errors
///
/// Returns `NotFound` if the store does not exist.
pub async fn update(
    State(state): State<AppState>,
    Path(pet_store_id): Path<PetStoreId>,
    Json(mut data): Json<PetStoreData>,
) -> Result<Json<PetStoreData>> {
    tracing::info!("Updating pet store with ID={pet_store_id}");

    data.pet_store_id = Some(pet_store_id);
    let saved = PetStoreService::new(state.pool()).save_pet_store(data).await?;

    Ok(Json(saved))
}

/// Fetch one pet store with its employees and customers.
///
/// # Errors
///
/// Returns `NotFound` if the store does not exist.
pub async fn show(
    State(state): State<AppState>,
    Path(pet_store_id): Path<PetStoreId>,
) -> Result<Json<PetStoreData>> {
    tracing::info!("Retrieving pet store with ID={pet_store_id}");

    let store = PetStoreService::new(state.pool())
        .retrieve_pet_store(pet_store_id)
        .await?;

    Ok(Json(store))
}

/// List all pet stores with their employee and customer collections emptied.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<PetStoreData>>> {
    tracing::info!("Listing all pet stores");

    let stores = PetStoreService::new(state.pool())
        .retrieve_all_pet_stores()
        .await?;

    Ok(Json(stores))
}

/// Delete a pet store along with its employees and customer links.
///
/// # Errors
///
/// Returns `NotFound` if the store does not exist.
pub async fn remove(
    State(state): State<AppState>,
    Path(pet_store_id): Path<PetStoreId>,
) -> Result<Json<MessageResponse>> {
    tracing::info!("Removing pet store with ID={pet_store_id}");

    PetStoreService::new(state.pool())
        .delete_pet_store(pet_store_id)
        .await?;

    Ok(Json(MessageResponse {
        message: format!("Successfully deleted pet store with ID={pet_store_id}"),
    }))
}
