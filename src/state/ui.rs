//! Local UI chrome state (theme, search bar, dropdown menus).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`products`,
//! `history`) so page chrome can evolve independently of backend data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Colour theme applied as `data-theme` on `<body>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse a stored preference. Anything other than `"light"` is dark.
    pub fn parse(raw: &str) -> Self {
        if raw == "light" { Self::Light } else { Self::Dark }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle button.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
        }
    }
}

pub const DEFAULT_LOCATION_LABEL: &str = "Select location";

/// UI state for the header chrome.
#[derive(Clone, Debug)]
pub struct UiState {
    pub theme: Theme,
    pub search_expanded: bool,
    pub location_open: bool,
    pub profile_open: bool,
    pub location_label: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            search_expanded: false,
            location_open: false,
            profile_open: false,
            location_label: DEFAULT_LOCATION_LABEL.to_owned(),
        }
    }
}

impl UiState {
    /// Toggle the location dropdown; opening it closes the profile menu.
    pub fn toggle_location(&mut self) {
        self.location_open = !self.location_open;
        self.profile_open = false;
    }

    /// Toggle the profile dropdown; opening it closes the location menu.
    pub fn toggle_profile(&mut self) {
        self.profile_open = !self.profile_open;
        self.location_open = false;
    }

    /// Page-level click outside any menu: close menus, collapse an empty search bar.
    pub fn dismiss(&mut self, search_text: &str) {
        self.location_open = false;
        self.profile_open = false;
        if search_text.is_empty() {
            self.search_expanded = false;
        }
    }
}
