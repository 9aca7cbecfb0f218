//! # greenhouse-adapter-http-axum
//!
//! HTTP boundary for the greenhouse control service.
//!
//! Serves the REST API the existing clients speak: plain-text confirmations
//! for single-setting operations, JSON for bulk reads and computed values.
//! Response texts and field names (including the historical `irigationTime`
//! spelling) are part of the wire contract and must not change without
//! versioning the interface.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
