//! Comparison card for one product across retailers.
//!
//! DESIGN
//! ======
//! Column contents come from `compare_columns`; this component only adds the
//! entrance stagger, pointer tilt and the click that opens a listing and
//! records it in history.

use leptos::prelude::*;

use crate::state::history::{HistoryEntry, HistoryState, record_view};
use crate::state::products::{CompareColumn, ProductGroup, compare_columns};
use crate::util::browser;
use crate::util::card_motion::{TILT_RESET, stagger_style};
use crate::util::storage::BrowserStorage;

/// A card comparing the Zepto and Blinkit listings of `group`.
#[component]
pub fn ProductCard(group: ProductGroup, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let tilt = RwSignal::new(TILT_RESET.to_owned());
    let columns = compare_columns(&group);
    let stagger = stagger_style(index);
    let ProductGroup { name, term, .. } = group;

    let on_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(card) = card_ref.get() else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            let x = f64::from(ev.client_x()) - rect.left();
            let y = f64::from(ev.client_y()) - rect.top();
            tilt.set(crate::util::card_motion::tilt_transform(x, y, rect.width(), rect.height()));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, card_ref);
        }
    };

    let cells = columns
        .into_iter()
        .map(|column| view! { <CompareCell column=column term=term.clone() name=name.clone()/> })
        .collect_view();

    view! {
        <div
            class="product-card"
            node_ref=card_ref
            style=move || format!("{stagger}; transform: {}", tilt.get())
            on:mousemove=on_move
            on:mouseleave=move |_| tilt.set(TILT_RESET.to_owned())
        >
            <div class="card-header">
                <h3>{name}</h3>
                <div class="subtitle">{term}</div>
            </div>
            <div class="card-body">
                <div class="product-preview">"🛍️"</div>
                <div class="compare-grid">
                    <div class="compare-row">{cells}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CompareCell(column: CompareColumn, term: String, name: String) -> impl IntoView {
    let history = use_context::<RwSignal<HistoryState>>();
    let clickable = column.url.is_some();
    let CompareColumn { store, badge, price, quantity, url, populated, .. } = column.clone();

    let on_click = move |_| {
        let Some(url) = url.as_deref() else {
            return;
        };
        browser::open_in_new_tab(url);
        let entry = HistoryEntry::from_column(&term, &name, &column, browser::now_iso());
        let entries = record_view(&BrowserStorage, entry);
        if let Some(history) = history {
            history.update(|h| h.entries = entries);
        }
    };

    view! {
        <div
            class="compare-col"
            class:compare-col--empty=!populated
            class:compare-col--clickable=clickable
            on:click=on_click
        >
            <div class="store-head">
                <div class=format!("store-badge {}", badge.class)>{badge.label}</div>
                <div class="store-name">{store}</div>
            </div>
            <div class="compare-price">{price}</div>
            <div class="compare-qty">{quantity}</div>
        </div>
    }
}
