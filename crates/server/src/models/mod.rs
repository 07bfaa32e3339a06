//! Domain and transfer types for the pet store service.
//!
//! Each entity comes in two shapes:
//!
//! - A domain type (`PetStore`, `Employee`, `Customer`) that mirrors one
//!   database row, with relationships expressed as foreign keys rather than
//!   object references.
//! - A transfer record (`PetStoreData`, `PetStoreEmployee`,
//!   `PetStoreCustomer`) that mirrors the wire payload: camelCase fields,
//!   optional identifiers, and no back-references, so serialization can never
//!   cycle.

pub mod customer;
pub mod employee;
pub mod pet_store;

pub use customer::{Customer, PetStoreCustomer};
pub use employee::{Employee, PetStoreEmployee};
pub use pet_store::{PetStore, PetStoreData};
