//! Customer persistence, including the store-customer link table.

use pet_store_core::{CustomerId, Email, PetStoreId};
use sqlx::SqliteConnection;

use super::RepositoryError;
use crate::models::{Customer, PetStoreCustomer};

/// Insert a new customer and return it with its generated ID.
///
/// # Errors
///
/// Returns `RepositoryError::Conflict` if the email is already taken, or
/// `RepositoryError::Database` if the query fails.
pub async fn insert(
    conn: &mut SqliteConnection,
    email: &Email,
    data: &PetStoreCustomer,
) -> Result<Customer, RepositoryError> {
    let customer = sqlx::query_as::<_, Customer>(
        r"
        INSERT INTO customer (customer_first_name, customer_last_name, customer_email)
        VALUES (?1, ?2, ?3)
        RETURNING customer_id, customer_first_name, customer_last_name, customer_email
        ",
    )
    .bind(&data.customer_first_name)
    .bind(&data.customer_last_name)
    .bind(email)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e
            && db_err.is_unique_violation()
        {
            return RepositoryError::Conflict("customer email already exists".to_owned());
        }
        RepositoryError::Database(e)
    })?;

    Ok(customer)
}

/// Overwrite every field of an existing customer.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if no row matches the ID,
/// `RepositoryError::Conflict` if the new email belongs to another customer,
/// or `RepositoryError::Database` if the query fails.
pub async fn update(
    conn: &mut SqliteConnection,
    customer_id: CustomerId,
    email: &Email,
    data: &PetStoreCustomer,
) -> Result<Customer, RepositoryError> {
    let customer = sqlx::query_as::<_, Customer>(
        r"
        UPDATE customer
        SET customer_first_name = ?1,
            customer_last_name = ?2,
            customer_email = ?3
        WHERE customer_id = ?4
        RETURNING customer_id, customer_first_name, customer_last_name, customer_email
        ",
    )
    .bind(&data.customer_first_name)
    .bind(&data.customer_last_name)
    .bind(email)
    .bind(customer_id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e
            && db_err.is_unique_violation()
        {
            return RepositoryError::Conflict("customer email already exists".to_owned());
        }
        RepositoryError::Database(e)
    })?
    .ok_or(RepositoryError::NotFound)?;

    Ok(customer)
}

/// Fetch a customer by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn get(
    conn: &mut SqliteConnection,
    customer_id: CustomerId,
) -> Result<Option<Customer>, RepositoryError> {
    let customer = sqlx::query_as::<_, Customer>(
        r"
        SELECT customer_id, customer_first_name, customer_last_name, customer_email
        FROM customer
        WHERE customer_id = ?1
        ",
    )
    .bind(customer_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(customer)
}

/// Fetch a customer by email.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn get_by_email(
    conn: &mut SqliteConnection,
    email: &Email,
) -> Result<Option<Customer>, RepositoryError> {
    let customer = sqlx::query_as::<_, Customer>(
        r"
        SELECT customer_id, customer_first_name, customer_last_name, customer_email
        FROM customer
        WHERE customer_email = ?1
        ",
    )
    .bind(email)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(customer)
}

/// Fetch all customers linked to one store, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list_for_store(
    conn: &mut SqliteConnection,
    pet_store_id: PetStoreId,
) -> Result<Vec<Customer>, RepositoryError> {
    let customers = sqlx::query_as::<_, Customer>(
        r"
        SELECT c.customer_id, c.customer_first_name, c.customer_last_name, c.customer_email
        FROM customer c
        JOIN pet_store_customer psc ON psc.customer_id = c.customer_id
        WHERE psc.pet_store_id = ?1
        ORDER BY c.customer_id
        ",
    )
    .bind(pet_store_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(customers)
}

/// Link a customer to a store. Linking the same pair twice is a no-op.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn link_to_store(
    conn: &mut SqliteConnection,
    pet_store_id: PetStoreId,
    customer_id: CustomerId,
) -> Result<(), RepositoryError> {
    sqlx::query(
        r"
        INSERT OR IGNORE INTO pet_store_customer (pet_store_id, customer_id)
        VALUES (?1, ?2)
        ",
    )
    .bind(pet_store_id)
    .bind(customer_id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Check whether a customer is linked to a store.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn is_linked_to_store(
    conn: &mut SqliteConnection,
    customer_id: CustomerId,
    pet_store_id: PetStoreId,
) -> Result<bool, RepositoryError> {
    let linked = sqlx::query_scalar::<_, i64>(
        r"
        SELECT EXISTS (
            SELECT 1
            FROM pet_store_customer
            WHERE customer_id = ?1 AND pet_store_id = ?2
        )
        ",
    )
    .bind(customer_id)
    .bind(pet_store_id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(linked != 0)
}

/// Delete a customer. Its store links go with it through the foreign key
/// cascade.
///
/// Returns `true` if a row was deleted.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn delete(
    conn: &mut SqliteConnection,
    customer_id: CustomerId,
) -> Result<bool, RepositoryError> {
    let result = sqlx::query("DELETE FROM customer WHERE customer_id = ?1")
        .bind(customer_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
