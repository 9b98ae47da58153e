//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and small formatting
//! rules from page and component logic to improve reuse and testability.

pub mod address;
pub mod browser;
pub mod card_motion;
pub mod platform;
pub mod price;
pub mod storage;
pub mod theme;
