//! Business logic services.
//!
//! Services sit between the HTTP routes and the database gateways. They own
//! transaction boundaries: every mutating operation runs inside a single
//! transaction, so a failed check never leaves partial writes behind.

pub mod pet_store;

pub use pet_store::{PetStoreService, ServiceError};
