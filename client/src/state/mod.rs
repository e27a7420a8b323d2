//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is app-wide and provided through context; the remaining modules
//! hold per-page fetched data so each page depends on a small focused model.

pub mod dashboard;
pub mod profile;
pub mod resources;
pub mod session;
pub mod teams;
