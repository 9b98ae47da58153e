//! Product comparison page: search, latest results, and header chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It loads the most recent scrape on open, runs
//! retrying searches from the search bar, and renders one comparison card
//! per product group.
//!
//! DESIGN
//! ======
//! Searches run through `net::search` against a [`SignalSearchView`] bound
//! to the epoch taken when the search started. Starting another search bumps
//! the epoch, so the older run stops at its next step and its late responses
//! never reach the page.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use leptos::prelude::*;

use crate::components::location_picker::LocationPicker;
use crate::components::product_card::ProductCard;
use crate::components::profile_menu::ProfileMenu;
use crate::components::theme_toggle::ThemeToggle;
use crate::net::search::SearchView;
use crate::net::types::ProductRow;
use crate::state::products::{ProductGroup, ProductsState};
use crate::state::ui::UiState;

/// Status shown when a render receives no items.
pub const NO_RESULTS: &str = "No results yet.";

/// [`SearchView`] writing into the shared products signal.
#[derive(Clone, Copy)]
pub struct SignalSearchView {
    products: RwSignal<ProductsState>,
    epoch: u64,
}

impl SignalSearchView {
    pub fn new(products: RwSignal<ProductsState>, epoch: u64) -> Self {
        Self { products, epoch }
    }
}

impl SearchView for SignalSearchView {
    fn set_status(&self, message: String) {
        if self.is_current() {
            self.products.try_update(|p| p.status = message);
        }
    }

    fn show(&self, items: Vec<ProductRow>, priority_term: Option<String>) {
        if !self.is_current() {
            return;
        }
        self.products.try_update(|p| {
            if items.is_empty() {
                p.status = NO_RESULTS.to_owned();
            }
            p.items = items;
            p.priority_term = priority_term;
        });
    }

    fn is_current(&self) -> bool {
        self.products.try_with_untracked(|p| p.epoch == self.epoch).unwrap_or(false)
    }
}

/// Comparison groups derived from `products`.
///
/// Only changes to the grouped rows notify readers, so status updates leave
/// the rendered cards and their entrance animation alone.
pub fn card_groups(products: RwSignal<ProductsState>) -> Memo<Vec<ProductGroup>> {
    Memo::new(move |_| products.with(ProductsState::groups))
}

/// Supersede any running search and start a new one for `term`.
fn start_search(products: RwSignal<ProductsState>, term: String) {
    let epoch = products.try_update(ProductsState::begin_search).unwrap_or_default();
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::config::{BackendConfig, RetryPolicy};
        use crate::net::search::{HttpProductSource, run_search};

        let source = HttpProductSource::new(BackendConfig::from_build_env());
        let view = SignalSearchView::new(products, epoch);
        let outcome = run_search(&source, &view, &term, RetryPolicy::default(), gloo_timers::future::sleep).await;
        leptos::logging::log!(
            "search \"{term}\" ended after {} attempts ({} scrape errors, superseded: {})",
            outcome.attempts,
            outcome.scrape_errors.len(),
            outcome.superseded
        );
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (epoch, term);
    }
}

/// Load the latest scrape without superseding a running search.
fn load_latest(products: RwSignal<ProductsState>) {
    let epoch = products.try_with_untracked(|p| p.epoch).unwrap_or_default();
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::config::BackendConfig;
        use crate::net::search::{HttpProductSource, fetch_latest_combined};

        let source = HttpProductSource::new(BackendConfig::from_build_env());
        fetch_latest_combined(&source, &SignalSearchView::new(products, epoch)).await;
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = epoch;
    }
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let products = expect_context::<RwSignal<ProductsState>>();
    let search_text = RwSignal::new(String::new());

    load_latest(products);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let term = search_text.get_untracked().trim().to_owned();
        if term.is_empty() {
            return;
        }
        start_search(products, term);
    };

    let groups = card_groups(products);
    let cards = move || {
        groups
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, group)| view! { <ProductCard group=group index=index/> })
            .collect_view()
    };

    view! {
        <div class="product-page" on:click=move |_| ui.update(|u| u.dismiss(&search_text.get_untracked()))>
            <header class="navbar">
                <a class="logo" href="/">"SnapIt"</a>
                <LocationPicker/>
                <div
                    class="search-bar"
                    class:active=move || ui.get().search_expanded
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        ui.update(|u| u.search_expanded = true);
                    }
                >
                    <span class="search-bar__icon">"🔍"</span>
                    <input
                        class="search-bar__input"
                        type="text"
                        placeholder="Search groceries..."
                        prop:value=move || search_text.get()
                        on:input=move |ev| search_text.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        on:blur=move |_| {
                            if search_text.get_untracked().is_empty() {
                                ui.update(|u| u.search_expanded = false);
                            }
                        }
                    />
                </div>
                <ThemeToggle/>
                <a class="nav-link" href="/history">"History"</a>
                <ProfileMenu/>
            </header>
            <main class="products">
                <div class="products__toolbar">
                    <p class="status-message">{move || products.with(|p| p.status.clone())}</p>
                    <button class="btn load-latest" on:click=move |_| load_latest(products)>
                        "Load latest"
                    </button>
                </div>
                <div class="products-grid">{cards}</div>
            </main>
        </div>
    }
}
