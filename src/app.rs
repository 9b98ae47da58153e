//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{history::HistoryPage, product::ProductPage, sign_in::SignInPage, sign_up::SignUpPage};
use crate::state::{auth::AuthState, history::HistoryState, products::ProductsState, ui::UiState};
use crate::util::storage::BrowserStorage;
use crate::util::theme;

/// Root application component.
///
/// Provides all shared state contexts, applies the stored theme, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let stored_theme = theme::read_preference(&BrowserStorage);
    theme::apply(stored_theme);

    let ui = RwSignal::new(UiState { theme: stored_theme, ..UiState::default() });
    let auth = RwSignal::new(AuthState::load(&BrowserStorage));
    let products = RwSignal::new(ProductsState::default());
    let history = RwSignal::new(HistoryState::load(&BrowserStorage));

    provide_context(ui);
    provide_context(auth);
    provide_context(products);
    provide_context(history);

    view! {
        <Title text="SnapIt"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ProductPage/>
                <Route path=StaticSegment("history") view=HistoryPage/>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
            </Routes>
        </Router>
    }
}
