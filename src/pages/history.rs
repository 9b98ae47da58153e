//! Search history page with stats, date sections and animated deletion.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rebuilds its list from storage when opened. Storage is updated at once on
//! delete or clear; the on-screen list catches up after the exit animations.

use leptos::prelude::*;

use crate::components::history_card::HistoryCard;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::history::{
    EMPTY_HISTORY_MESSAGE, HistoryEntry, HistoryState, REMOVE_ANIMATION_MS, clear_delay_ms, clear_history,
    clear_settle_ms, delete_entry,
};
use crate::util::browser;
use crate::util::storage::BrowserStorage;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let history = expect_context::<RwSignal<HistoryState>>();
    history.set(HistoryState::load(&BrowserStorage));

    let stats = Memo::new(move |_| history.with(HistoryState::stats));
    let sections = Memo::new(move |_| history.with(HistoryState::sections));

    let on_delete = Callback::new(move |key: String| {
        delete_entry(&BrowserStorage, &key);
        history.update(|h| h.begin_remove(&key));
        browser::after_ms(REMOVE_ANIMATION_MS, move || {
            history.try_update(|h| h.finish_remove(&key));
        });
    });

    let on_clear = move |_| {
        let keys: Vec<String> = history.with_untracked(|h| h.entries.iter().map(HistoryEntry::key).collect());
        clear_history(&BrowserStorage);
        let count = keys.len();
        for (index, key) in keys.into_iter().enumerate() {
            browser::after_ms(clear_delay_ms(index), move || {
                history.try_update(|h| h.begin_remove(&key));
            });
        }
        browser::after_ms(clear_settle_ms(count), move || {
            history.try_update(HistoryState::finish_clear);
        });
    };

    let list = move || {
        let sections = sections.get();
        if sections.is_empty() {
            return view! { <div class="no-history-msg">{EMPTY_HISTORY_MESSAGE}</div> }.into_any();
        }
        sections
            .into_iter()
            .map(|section| {
                let cards = section
                    .entries
                    .into_iter()
                    .map(|entry| {
                        let key = entry.key();
                        let removing = Signal::derive(move || history.with(|h| h.is_removing(&key)));
                        view! { <HistoryCard entry=entry removing=removing on_delete=on_delete/> }
                    })
                    .collect_view();
                view! {
                    <div class="date-header">{section.label}</div>
                    {cards}
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="history-page">
            <header class="navbar">
                <a class="logo" href="/">"SnapIt"</a>
                <a class="nav-link" href="/">"Back to products"</a>
                <ThemeToggle/>
            </header>
            <section class="history-stats">
                <div class="stat">
                    <span class="stat__value">{move || stats.get().searches}</span>
                    <span class="stat__label">"Searches"</span>
                </div>
                <div class="stat">
                    <span class="stat__value">{move || stats.get().total_saved_label()}</span>
                    <span class="stat__label">"Total saved"</span>
                </div>
                <div class="stat">
                    <span class="stat__value">{move || stats.get().best_deals}</span>
                    <span class="stat__label">"Best deals"</span>
                </div>
            </section>
            <div class="history-toolbar">
                <h2>"Recent searches"</h2>
                <button class="btn clear-all" on:click=on_clear>
                    "Clear all"
                </button>
            </div>
            <div class="history-list">{list}</div>
        </div>
    }
}
