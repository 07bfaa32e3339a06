//! Pet store management service.
//!
//! Implements the create/update/read/delete operations for stores and the
//! save/delete operations for their employees and customers, including the
//! ownership and membership checks that guard them.

use sqlx::{SqliteConnection, SqlitePool};
use thiserror::Error;

use pet_store_core::{CustomerId, Email, EmployeeId, PetStoreId};

use crate::db::{self, RepositoryError};
use crate::models::{Customer, Employee, PetStore, PetStoreCustomer, PetStoreData, PetStoreEmployee};

/// Errors produced by pet store operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A referenced store, employee, or customer does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request referenced an entity through the wrong store, or carried
    /// an unusable field.
    #[error("{0}")]
    Validation(String),

    /// Creating a customer whose email address is already taken.
    #[error("{0}")]
    DuplicateKey(String),

    /// Underlying repository failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        Self::Repository(RepositoryError::Database(e))
    }
}

/// Service for managing pet stores and their employees and customers.
///
/// Holds a reference to the connection pool; each operation acquires a
/// connection (reads) or a transaction (writes) for its own duration.
pub struct PetStoreService<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PetStoreService<'a> {
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create or update a pet store.
    ///
    /// An absent `petStoreId` creates a new store; a present one overwrites
    /// every scalar field of the existing store. The returned record carries
    /// the store's employees and linked customers.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if an ID was given but no such
    /// store exists.
    pub async fn save_pet_store(&self, data: PetStoreData) -> Result<PetStoreData, ServiceError> {
        let mut tx = self.pool.begin().await?;

        let store = match data.pet_store_id {
            None => db::pet_stores::insert(&mut tx, &data).await?,
            Some(pet_store_id) => {
                require_pet_store(&mut tx, pet_store_id).await?;
                db::pet_stores::update(&mut tx, pet_store_id, &data).await?
            }
        };

        let employees = db::employees::list_for_store(&mut tx, store.pet_store_id).await?;
        let customers = db::customers::list_for_store(&mut tx, store.pet_store_id).await?;

        tx.commit().await?;

        Ok(PetStoreData::from_parts(store, employees, customers))
    }

    /// Fetch one pet store with its employees and linked customers.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if the store does not exist.
    pub async fn retrieve_pet_store(
        &self,
        pet_store_id: PetStoreId,
    ) -> Result<PetStoreData, ServiceError> {
        let mut conn = self.pool.acquire().await?;

        let store = require_pet_store(&mut conn, pet_store_id).await?;
        let employees = db::employees::list_for_store(&mut conn, pet_store_id).await?;
        let customers = db::customers::list_for_store(&mut conn, pet_store_id).await?;

        Ok(PetStoreData::from_parts(store, employees, customers))
    }

    /// Fetch all pet stores as summaries with empty employee and customer
    /// collections.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] if the query fails.
    pub async fn retrieve_all_pet_stores(&self) -> Result<Vec<PetStoreData>, ServiceError> {
        let mut conn = self.pool.acquire().await?;

        let stores = db::pet_stores::list(&mut conn).await?;

        Ok(stores.into_iter().map(PetStoreData::from).collect())
    }

    /// Delete a pet store, its employees, and its customer links.
    ///
    /// Customer records themselves survive; they may be linked to other
    /// stores.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if the store does not exist.
    pub async fn delete_pet_store(&self, pet_store_id: PetStoreId) -> Result<(), ServiceError> {
        let mut tx = self.pool.begin().await?;

        require_pet_store(&mut tx, pet_store_id).await?;
        db::pet_stores::delete(&mut tx, pet_store_id).await?;

        tx.commit().await?;

        Ok(())
    }

    /// Create or update an employee of the given store.
    ///
    /// An absent `employeeId` creates a new employee owned by the store; a
    /// present one overwrites every field of the existing employee after
    /// checking that it is employed at that store.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if the store or employee does not
    /// exist, and [`ServiceError::Validation`] if the employee belongs to a
    /// different store.
    pub async fn save_employee(
        &self,
        pet_store_id: PetStoreId,
        data: PetStoreEmployee,
    ) -> Result<PetStoreEmployee, ServiceError> {
        let mut tx = self.pool.begin().await?;

        require_pet_store(&mut tx, pet_store_id).await?;

        let employee = match data.employee_id {
            None => db::employees::insert(&mut tx, pet_store_id, &data).await?,
            Some(employee_id) => {
                let existing = require_employee(&mut tx, employee_id).await?;
                if existing.pet_store_id != pet_store_id {
                    return Err(wrong_store_employee(employee_id, pet_store_id));
                }
                db::employees::update(&mut tx, employee_id, pet_store_id, &data).await?
            }
        };

        tx.commit().await?;

        Ok(PetStoreEmployee::from(employee))
    }

    /// Delete an employee of the given store.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if the employee does not exist,
    /// and [`ServiceError::Validation`] if it belongs to a different store.
    pub async fn delete_employee(
        &self,
        pet_store_id: PetStoreId,
        employee_id: EmployeeId,
    ) -> Result<(), ServiceError> {
        let mut tx = self.pool.begin().await?;

        let employee = require_employee(&mut tx, employee_id).await?;
        if employee.pet_store_id != pet_store_id {
            return Err(wrong_store_employee(employee_id, pet_store_id));
        }
        db::employees::delete(&mut tx, employee_id).await?;

        tx.commit().await?;

        Ok(())
    }

    /// Create or update a customer of the given store.
    ///
    /// An absent `customerId` creates a new customer and links it to the
    /// store; a present one overwrites every field of the existing customer
    /// after checking that it is linked to that store.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if the store or customer does not
    /// exist, [`ServiceError::Validation`] if the email is missing or
    /// malformed or the customer is not linked to the store, and
    /// [`ServiceError::DuplicateKey`] if the email is already taken.
    pub async fn save_customer(
        &self,
        pet_store_id: PetStoreId,
        data: PetStoreCustomer,
    ) -> Result<PetStoreCustomer, ServiceError> {
        let mut tx = self.pool.begin().await?;

        require_pet_store(&mut tx, pet_store_id).await?;

        let email = parse_customer_email(data.customer_email.as_deref())?;

        let customer = match data.customer_id {
            None => {
                if db::customers::get_by_email(&mut tx, &email).await?.is_some() {
                    return Err(duplicate_email(&email));
                }
                db::customers::insert(&mut tx, &email, &data)
                    .await
                    .map_err(|e| map_email_conflict(e, &email))?
            }
            Some(customer_id) => {
                require_customer(&mut tx, customer_id).await?;
                if !db::customers::is_linked_to_store(&mut tx, customer_id, pet_store_id).await? {
                    return Err(not_member_of_store(pet_store_id, customer_id));
                }
                db::customers::update(&mut tx, customer_id, &email, &data)
                    .await
                    .map_err(|e| map_email_conflict(e, &email))?
            }
        };

        db::customers::link_to_store(&mut tx, pet_store_id, customer.customer_id).await?;

        tx.commit().await?;

        Ok(PetStoreCustomer::from(customer))
    }

    /// Delete a customer of the given store, along with all of its store
    /// links.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if the customer does not exist,
    /// and [`ServiceError::Validation`] if it is not linked to the store.
    pub async fn delete_customer(
        &self,
        pet_store_id: PetStoreId,
        customer_id: CustomerId,
    ) -> Result<(), ServiceError> {
        let mut tx = self.pool.begin().await?;

        require_customer(&mut tx, customer_id).await?;
        if !db::customers::is_linked_to_store(&mut tx, customer_id, pet_store_id).await? {
            return Err(not_member_of_store(pet_store_id, customer_id));
        }
        db::customers::delete(&mut tx, customer_id).await?;

        tx.commit().await?;

        Ok(())
    }
}

/// Fetch a store or fail with the canonical not-found message.
async fn require_pet_store(
    conn: &mut SqliteConnection,
    pet_store_id: PetStoreId,
) -> Result<PetStore, ServiceError> {
    db::pet_stores::get(conn, pet_store_id).await?.ok_or_else(|| {
        ServiceError::NotFound(format!("Pet store with ID={pet_store_id} does not exist."))
    })
}

/// Fetch an employee or fail with the canonical not-found message.
async fn require_employee(
    conn: &mut SqliteConnection,
    employee_id: EmployeeId,
) -> Result<Employee, ServiceError> {
    db::employees::get(conn, employee_id).await?.ok_or_else(|| {
        ServiceError::NotFound(format!("Employee with ID={employee_id} does not exist."))
    })
}

/// Fetch a customer or fail with the canonical not-found message.
async fn require_customer(
    conn: &mut SqliteConnection,
    customer_id: CustomerId,
) -> Result<Customer, ServiceError> {
    db::customers::get(conn, customer_id).await?.ok_or_else(|| {
        ServiceError::NotFound(format!("Customer with ID={customer_id} does not exist."))
    })
}

/// Validate the email field of an inbound customer payload.
fn parse_customer_email(email: Option<&str>) -> Result<Email, ServiceError> {
    let raw = email
        .ok_or_else(|| ServiceError::Validation("Customer email is required.".to_owned()))?;

    Email::parse(raw).map_err(|e| ServiceError::Validation(format!("Customer email is invalid: {e}.")))
}

fn wrong_store_employee(employee_id: EmployeeId, pet_store_id: PetStoreId) -> ServiceError {
    ServiceError::Validation(format!(
        "Employee with ID={employee_id} is not employed at store with ID={pet_store_id}."
    ))
}

fn not_member_of_store(pet_store_id: PetStoreId, customer_id: CustomerId) -> ServiceError {
    ServiceError::Validation(format!(
        "Pet Store with ID={pet_store_id} not found for the Customer with ID={customer_id}"
    ))
}

fn duplicate_email(email: &Email) -> ServiceError {
    ServiceError::DuplicateKey(format!("Customer with email address: {email} already exists."))
}

/// Turn a unique-constraint conflict from the customer table into the
/// duplicate-email service error; pass everything else through.
fn map_email_conflict(err: RepositoryError, email: &Email) -> ServiceError {
    match err {
        RepositoryError::Conflict(_) => duplicate_email(email),
        other => ServiceError::Repository(other),
    }
}
