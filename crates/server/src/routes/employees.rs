//! Employee management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use pet_store_core::{EmployeeId, PetStoreId};

use super::MessageResponse;
use crate::error::Result;
use crate::models::PetStoreEmployee;
use crate::services::PetStoreService;
use crate::state::AppState;

/// Hire a new employee at the given store.
///
/// # Errors
///
/// Returns `NotFound` if the store does not exist.
pub async fn create(
    State(state): State<AppState>,
    Path(pet_store_id): Path<PetStoreId>,
    Json(data): Json<PetStoreEmployee>,
) -> Result<(StatusCode, Json<PetStoreEmployee>)> {
    tracing::info!("Adding employee to store with ID={pet_store_id}");

    let saved = PetStoreService::new(state.pool())
        .save_employee(pet_store_id, data)
        .await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Update an existing employee. The path ID overrides any ID in the body.
///
/// # Errors
///
/// Returns `NotFound` if the store or employee does not exist, and
/// `BadRequest` if the employee works at a different store.
pub async fn update(
    State(state): State<AppState>,
    Path((pet_store_id, employee_id)): Path<(PetStoreId, EmployeeId)>,
    Json(mut data): Json<PetStoreEmployee>,
) -> Result<Json<PetStoreEmployee>> {
    tracing::info!("Updating employee with ID={employee_id}");

    data.employee_id = Some(employee_id);
    let saved = PetStoreService::new(state.pool())
        .save_employee(pet_store_id, data)
        .await?;

    Ok(Json(saved))
}

/// Remove an employee from the given store.
///
/// # Errors
///
/// Returns `NotFound` if the employee does not exist, and `BadRequest` if it
/// works at a different store.
pub async fn remove(
    State(state): State<AppState>,
    Path((pet_store_id, employee_id)): Path<(PetStoreId, EmployeeId)>,
) -> Result<Json<MessageResponse>> {
    tracing::info!("Removing employee with ID={employee_id} from store with ID={pet_store_id}");

    PetStoreService::new(state.pool())
        .delete_employee(pet_store_id, employee_id)
        .await?;

    Ok(Json(MessageResponse {
        message: format!(
            "Successfully deleted employee with ID={employee_id} from store with ID={pet_store_id}"
        ),
    }))
}
