//! Pet store persistence.

use pet_store_core::PetStoreId;
use sqlx::SqliteConnection;

use super::RepositoryError;
use crate::models::{PetStore, PetStoreData};

/// Insert a new pet store and return it with its generated ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn insert(
    conn: &mut SqliteConnection,
    data: &PetStoreData,
) -> Result<PetStore, RepositoryError> {
    let store = sqlx::query_as::<_, PetStore>(
        r"
        INSERT INTO pet_store (pet_store_name, pet_store_address, pet_store_city,
                               pet_store_state, pet_store_zip, pet_store_phone)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING pet_store_id, pet_store_name, pet_store_address, pet_store_city,
                  pet_store_state, pet_store_zip, pet_store_phone
        ",
    )
    .bind(&data.pet_store_name)
    .bind(&data.pet_store_address)
    .bind(&data.pet_store_city)
    .bind(&data.pet_store_state)
    .bind(&data.pet_store_zip)
    .bind(&data.pet_store_phone)
    .fetch_one(&mut *conn)
    .await?;

    Ok(store)
}

/// Overwrite every scalar field of an existing pet store.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if no row matches the ID, or
/// `RepositoryError::Database` if the query fails.
pub async fn update(
    conn: &mut SqliteConnection,
    pet_store_id: PetStoreId,
    data: &PetStoreData,
) -> Result<PetStore, RepositoryError> {
    let store = sqlx::query_as::<_, PetStore>(
        r"
        UPDATE pet_store
        SET pet_store_name = ?1,
            pet_store_address = ?2,
            pet_store_city = ?3,
            pet_store_state = ?4,
            pet_store_zip = ?5,
            pet_store_phone = ?6
        WHERE pet_store_id = ?7
        RETURNING pet_store_id, pet_store_name, pet_store_address, pet_store_city,
                  pet_store_state, pet_store_zip, pet_store_phone
        ",
    )
    .bind(&data.pet_store_name)
    .bind(&data.pet_store_address)
    .bind(&data.pet_store_city)
    .bind(&data.pet_store_state)
    .bind(&data.pet_store_zip)
    .bind(&data.pet_store_phone)
    .bind(pet_store_id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(RepositoryError::NotFound)?;

    Ok(store)
}

/// Fetch a pet store by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn get(
    conn: &mut SqliteConnection,
    pet_store_id: PetStoreId,
) -> Result<Option<PetStore>, RepositoryError> {
    let store = sqlx::query_as::<_, PetStore>(
        r"
        SELECT pet_store_id, pet_store_name, pet_store_address, pet_store_city,
               pet_store_state, pet_store_zip, pet_store_phone
        FROM pet_store
        WHERE pet_store_id = ?1
        ",
    )
    .bind(pet_store_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(store)
}

/// Fetch all pet stores, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<PetStore>, RepositoryError> {
    let stores = sqlx::query_as::<_, PetStore>(
        r"
        SELECT pet_store_id, pet_store_name, pet_store_address, pet_store_city,
               pet_store_state, pet_store_zip, pet_store_phone
        FROM pet_store
        ORDER BY pet_store_id
        ",
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(stores)
}

/// Delete a pet store. Owned employees and store-customer links go with it
/// through the foreign key cascades.
///
/// Returns `true` if a row was deleted.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn delete(
    conn: &mut SqliteConnection,
    pet_store_id: PetStoreId,
) -> Result<bool, RepositoryError> {
    let result = sqlx::query("DELETE FROM pet_store WHERE pet_store_id = ?1")
        .bind(pet_store_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
