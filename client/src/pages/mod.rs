//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetch orchestration and page state, and delegates
//! shared rendering to `components`. Everything under `/dashboard` renders
//! inside [`protected::ProtectedLayout`].

pub mod dashboard;
pub mod login;
pub mod profile;
pub mod protected;
pub mod resources;
pub mod teams;
