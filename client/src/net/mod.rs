//! Networking modules for the CostLens REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the authenticated HTTP calls and `types` defines the shared
//! JSON schema.

pub mod api;
pub mod types;
