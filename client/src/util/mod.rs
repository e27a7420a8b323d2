//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure calculations
//! from page and component logic to improve reuse and testability.

pub mod auth;
pub mod browser;
pub mod costs;
pub mod date_range;
