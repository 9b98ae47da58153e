//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `history`, `products`, `ui`) so
//! individual components can depend on small focused models.

pub mod auth;
pub mod history;
pub mod products;
pub mod ui;
