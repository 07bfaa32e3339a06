//! Employee persistence.

use pet_store_core::{EmployeeId, PetStoreId};
use sqlx::SqliteConnection;

use super::RepositoryError;
use crate::models::{Employee, PetStoreEmployee};

/// Insert a new employee owned by the given store.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn insert(
    conn: &mut SqliteConnection,
    pet_store_id: PetStoreId,
    data: &PetStoreEmployee,
) -> Result<Employee, RepositoryError> {
    let employee = sqlx::query_as::<_, Employee>(
        r"
        INSERT INTO employee (pet_store_id, employee_first_name, employee_last_name,
                              employee_phone, employee_job_title)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING employee_id, pet_store_id, employee_first_name, employee_last_name,
                  employee_phone, employee_job_title
        ",
    )
    .bind(pet_store_id)
    .bind(&data.employee_first_name)
    .bind(&data.employee_last_name)
    .bind(&data.employee_phone)
    .bind(&data.employee_job_title)
    .fetch_one(&mut *conn)
    .await?;

    Ok(employee)
}

/// Overwrite every field of an existing employee, including its owning store.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if no row matches the ID, or
/// `RepositoryError::Database` if the query fails.
pub async fn update(
    conn: &mut SqliteConnection,
    employee_id: EmployeeId,
    pet_store_id: PetStoreId,
    data: &PetStoreEmployee,
) -> Result<Employee, RepositoryError> {
    let employee = sqlx::query_as::<_, Employee>(
        r"
        UPDATE employee
        SET pet_store_id = ?1,
            employee_first_name = ?2,
            employee_last_name = ?3,
            employee_phone = ?4,
            employee_job_title = ?5
        WHERE employee_id = ?6
        RETURNING employee_id, pet_store_id, employee_first_name, employee_last_name,
                  employee_phone, employee_job_title
        ",
    )
    .bind(pet_store_id)
    .bind(&data.employee_first_name)
    .bind(&data.employee_last_name)
    .bind(&data.employee_phone)
    .bind(&data.employee_job_title)
    .bind(employee_id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(RepositoryError::NotFound)?;

    Ok(employee)
}

/// Fetch an employee by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn get(
    conn: &mut SqliteConnection,
    employee_id: EmployeeId,
) -> Result<Option<Employee>, RepositoryError> {
    let employee = sqlx::query_as::<_, Employee>(
        r"
        SELECT employee_id, pet_store_id, employee_first_name, employee_last_name,
               employee_phone, employee_job_title
        FROM employee
        WHERE employee_id = ?1
        ",
    )
    .bind(employee_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(employee)
}

/// Fetch all employees of one store, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list_for_store(
    conn: &mut SqliteConnection,
    pet_store_id: PetStoreId,
) -> Result<Vec<Employee>, RepositoryError> {
    let employees = sqlx::query_as::<_, Employee>(
        r"
        SELECT employee_id, pet_store_id, employee_first_name, employee_last_name,
               employee_phone, employee_job_title
        FROM employee
        WHERE pet_store_id = ?1
        ORDER BY employee_id
        ",
    )
    .bind(pet_store_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(employees)
}

/// Delete an employee.
///
/// Returns `true` if a row was deleted.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn delete(
    conn: &mut SqliteConnection,
    employee_id: EmployeeId,
) -> Result<bool, RepositoryError> {
    let result = sqlx::query("DELETE FROM employee WHERE employee_id = ?1")
        .bind(employee_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
