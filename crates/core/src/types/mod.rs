//! Shared newtype wrappers for the pet store domain.
//!
//! These types enforce invariants at construction time so the rest of the
//! codebase can rely on them:
//!
//! - [`id`] - Type-safe entity IDs that cannot be mixed up
//! - [`email`] - Validated email addresses

pub mod email;
pub mod id;

pub use email::{Email, EmailError};
pub use id::*;
