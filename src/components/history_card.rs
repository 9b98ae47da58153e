//! Card for one search history entry.

use leptos::prelude::*;

use crate::state::history::HistoryEntry;

/// A history row with a delete button.
///
/// `removing` drives the exit animation; `on_delete` receives the entry key.
#[component]
pub fn HistoryCard(entry: HistoryEntry, removing: Signal<bool>, on_delete: Callback<String>) -> impl IntoView {
    let key = entry.key();
    let HistoryEntry { term, name, price, saved, .. } = entry;

    view! {
        <div class="history-card" class:removing=move || removing.get()>
            <div class="history-card__info">
                <h4 class="history-card__name">{name}</h4>
                <span class="history-card__term">{term}</span>
            </div>
            <div class="history-card__price">
                <span class="price">{price}</span>
                <span class="saved">{saved}</span>
            </div>
            <button
                class="delete-btn"
                title="Delete entry"
                aria-label="Delete entry"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    on_delete.run(key.clone());
                }
            >
                "✕"
            </button>
        </div>
    }
}
