//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. `TraceLayer` (per-request span and latency logging)
//! 2. Request ID (unique ID per request, echoed in the response)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
