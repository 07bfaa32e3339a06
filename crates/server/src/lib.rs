//! Pet store management service library.
//!
//! This crate provides the pet store HTTP API as a library, allowing the
//! router to be exercised in-process by integration tests and reused by the
//! server binary.
//!
//! # Architecture
//!
//! - Axum web framework serving a JSON API under `/pet_store`
//! - `SQLite` persistence via sqlx, with embedded migrations
//! - Service layer owning transaction boundaries and business checks

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
