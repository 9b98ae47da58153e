//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;
use crate::util::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="theme-toggle"
            title="Toggle theme"
            aria-label="Toggle theme"
            on:click=move |_| {
                let current = ui.get_untracked().theme;
                let next = theme::toggle(&BrowserStorage, current);
                ui.update(|u| u.theme = next);
            }
        >
            {move || ui.get().theme.glyph()}
        </button>
    }
}
