//! Pet store domain and transfer types.

use serde::{Deserialize, Serialize};

use pet_store_core::PetStoreId;

use super::{Customer, Employee, PetStoreCustomer, PetStoreEmployee};

/// A pet store row (domain type).
///
/// Owns employees through `employee.pet_store_id` and is linked to customers
/// through the `pet_store_customer` association table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PetStore {
    /// Unique store ID.
    pub pet_store_id: PetStoreId,
    pub pet_store_name: Option<String>,
    pub pet_store_address: Option<String>,
    pub pet_store_city: Option<String>,
    pub pet_store_state: Option<String>,
    pub pet_store_zip: Option<String>,
    pub pet_store_phone: Option<String>,
}

/// Pet store transfer record.
///
/// An absent `petStoreId` in an inbound payload means "create"; a present one
/// means "update". The nested collections are populated on single-store
/// reads and emptied on the list endpoint; inbound collections are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetStoreData {
    pub pet_store_id: Option<PetStoreId>,
    pub pet_store_name: Option<String>,
    pub pet_store_address: Option<String>,
    pub pet_store_city: Option<String>,
    pub pet_store_state: Option<String>,
    pub pet_store_zip: Option<String>,
    pub pet_store_phone: Option<String>,
    #[serde(default)]
    pub customers: Vec<PetStoreCustomer>,
    #[serde(default)]
    pub employees: Vec<PetStoreEmployee>,
}

impl PetStoreData {
    /// Build a full transfer record from a store row and its linked entities.
    #[must_use]
    pub fn from_parts(store: PetStore, employees: Vec<Employee>, customers: Vec<Customer>) -> Self {
        Self {
            pet_store_id: Some(store.pet_store_id),
            pet_store_name: store.pet_store_name,
            pet_store_address: store.pet_store_address,
            pet_store_city: store.pet_store_city,
            pet_store_state: store.pet_store_state,
            pet_store_zip: store.pet_store_zip,
            pet_store_phone: store.pet_store_phone,
            customers: customers.into_iter().map(PetStoreCustomer::from).collect(),
            employees: employees.into_iter().map(PetStoreEmployee::from).collect(),
        }
    }
}

/// Summary conversion: scalar fields only, collections left empty.
impl From<PetStore> for PetStoreData {
    fn from(store: PetStore) -> Self {
        Self::from_parts(store, Vec::new(), Vec::new())
    }
}
