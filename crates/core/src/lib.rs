//! Pet Store Core - Shared types library.
//!
//! This crate provides common types used across the pet store service
//! components:
//! - `server` - HTTP API for managing stores, employees, and customers
//! - `integration-tests` - End-to-end tests against the full router
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and email addresses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
