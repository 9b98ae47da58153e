//! Theme initialization and toggle.
//!
//! Reads the preference from the store and applies a `data-theme` attribute
//! to `<body>`. Toggle writes back to the store and updates that attribute.
//! Applying the attribute requires a browser; elsewhere it is a no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;
use crate::util::storage::{KeyValueStore, THEME_KEY};

/// Read the stored theme, defaulting to dark.
pub fn read_preference(store: &impl KeyValueStore) -> Theme {
    store.get(THEME_KEY).map_or(Theme::Dark, |raw| Theme::parse(&raw))
}

/// Apply the `data-theme` attribute on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(store: &impl KeyValueStore, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    store.set(THEME_KEY, next.as_str());
    next
}
