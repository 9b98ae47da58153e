//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards and header chrome while reading/writing shared
//! state from Leptos context providers.

pub mod history_card;
pub mod location_picker;
pub mod product_card;
pub mod profile_menu;
pub mod theme_toggle;
