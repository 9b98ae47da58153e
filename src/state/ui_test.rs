use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
    assert_eq!(UiState::default().theme, Theme::Dark);
}

#[test]
fn theme_parse_only_recognizes_light() {
    assert_eq!(Theme::parse("light"), Theme::Light);
    assert_eq!(Theme::parse("dark"), Theme::Dark);
    assert_eq!(Theme::parse("sepia"), Theme::Dark);
    assert_eq!(Theme::parse(""), Theme::Dark);
}

#[test]
fn theme_toggled_twice_is_identity() {
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_glyph_and_str() {
    assert_eq!(Theme::Light.glyph(), "☀️");
    assert_eq!(Theme::Dark.glyph(), "🌙");
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

// =============================================================
// Menus
// =============================================================

#[test]
fn opening_location_closes_profile() {
    let mut ui = UiState { profile_open: true, ..UiState::default() };
    ui.toggle_location();
    assert!(ui.location_open);
    assert!(!ui.profile_open);
}

#[test]
fn opening_profile_closes_location() {
    let mut ui = UiState { location_open: true, ..UiState::default() };
    ui.toggle_profile();
    assert!(ui.profile_open);
    assert!(!ui.location_open);
}

#[test]
fn toggling_profile_twice_closes_it() {
    let mut ui = UiState::default();
    ui.toggle_profile();
    ui.toggle_profile();
    assert!(!ui.profile_open);
}

#[test]
fn dismiss_closes_menus_and_collapses_empty_search() {
    let mut ui = UiState { location_open: true, search_expanded: true, ..UiState::default() };
    ui.dismiss("");
    assert!(!ui.location_open);
    assert!(!ui.profile_open);
    assert!(!ui.search_expanded);
}

#[test]
fn dismiss_keeps_search_open_with_text() {
    let mut ui = UiState { search_expanded: true, ..UiState::default() };
    ui.dismiss("milk");
    assert!(ui.search_expanded);
}
