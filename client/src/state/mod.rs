//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `ui`) so individual components can
//! depend on small focused models.

pub mod auth;
pub mod ui;
