//! Search history persistence, statistics and removal state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entries are written by the product page when a retailer listing is opened
//! and read back by the history page. Storage holds the newest-first array;
//! [`HistoryState`] mirrors it for rendering and tracks cards mid-removal.
//!
//! ERROR HANDLING
//! ==============
//! Malformed stored history reads as an empty list and is overwritten on the
//! next write.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::net::types::deserialize_lenient_string;
use crate::state::products::CompareColumn;
use crate::util::price::{format_rupees, rupee_amount, saved_label};
use crate::util::storage::{HISTORY_KEY, KeyValueStore, load_json, save_json};

/// Removal animation length for a single card.
pub const REMOVE_ANIMATION_MS: u64 = 300;
/// Delay between successive cards when clearing everything.
pub const CLEAR_STAGGER_MS: u64 = 50;

/// Label for entries whose timestamp has no calendar date.
pub const UNDATED_LABEL: &str = "Earlier";
pub const EMPTY_HISTORY_MESSAGE: &str = "No search history found.";

/// A product the user opened from a comparison card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub term: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub price: String,
    /// Display text such as `"Saved ₹14"`.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub saved: String,
    /// ISO-8601 timestamp.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub viewed_at: String,
}

impl HistoryEntry {
    /// Case-insensitive identity: `term::name`.
    pub fn key(&self) -> String {
        format!("{}::{}", self.term, self.name).to_lowercase()
    }

    /// Entry for opening `column` on the card named `name`.
    pub fn from_column(term: &str, name: &str, column: &CompareColumn, viewed_at: String) -> Self {
        Self {
            term: term.to_owned(),
            name: name.to_owned(),
            price: column.price.clone(),
            saved: saved_label(column.saved),
            viewed_at,
        }
    }

    /// `YYYY-MM-DD` prefix of `viewed_at`, if it has one.
    pub fn day(&self) -> Option<&str> {
        let day = self.viewed_at.get(..10)?;
        let bytes = day.as_bytes();
        let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
        shape_ok.then_some(day)
    }
}

pub fn load_history(store: &impl KeyValueStore) -> Vec<HistoryEntry> {
    load_json(store, HISTORY_KEY).unwrap_or_default()
}

pub fn save_history(store: &impl KeyValueStore, entries: &[HistoryEntry]) {
    save_json(store, HISTORY_KEY, &entries);
}

/// Put `entry` at the front, replacing any entry with the same key.
pub fn record_view(store: &impl KeyValueStore, entry: HistoryEntry) -> Vec<HistoryEntry> {
    let key = entry.key();
    let mut entries = load_history(store);
    entries.retain(|e| e.key() != key);
    entries.insert(0, entry);
    save_history(store, &entries);
    entries
}

/// Remove the entry whose key matches `key` (case-insensitive) and return the rest.
pub fn delete_entry(store: &impl KeyValueStore, key: &str) -> Vec<HistoryEntry> {
    let key = key.to_lowercase();
    let mut entries = load_history(store);
    entries.retain(|e| e.key() != key);
    save_history(store, &entries);
    entries
}

pub fn clear_history(store: &impl KeyValueStore) {
    store.remove(HISTORY_KEY);
}

/// Delay before the card at `index` starts its exit when clearing everything.
pub fn clear_delay_ms(index: usize) -> u64 {
    u64::try_from(index).unwrap_or(u64::MAX).saturating_mul(CLEAR_STAGGER_MS)
}

/// When the view should settle after clearing `count` cards.
pub fn clear_settle_ms(count: usize) -> u64 {
    clear_delay_ms(count).saturating_add(REMOVE_ANIMATION_MS)
}

/// Aggregates shown above the history list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryStats {
    pub searches: usize,
    pub total_saved: u64,
    pub best_deals: usize,
}

impl HistoryStats {
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        let mut stats = Self { searches: entries.len(), ..Self::default() };
        for amount in entries.iter().filter_map(|e| rupee_amount(&e.saved)) {
            stats.total_saved = stats.total_saved.saturating_add(amount);
            if amount > 0 {
                stats.best_deals += 1;
            }
        }
        stats
    }

    pub fn total_saved_label(&self) -> String {
        format_rupees(self.total_saved)
    }
}

/// Consecutive entries that share a calendar day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DaySection {
    pub label: String,
    pub entries: Vec<HistoryEntry>,
}

/// Split entries into date sections, keeping list order.
pub fn group_by_day(entries: &[HistoryEntry]) -> Vec<DaySection> {
    let mut sections: Vec<DaySection> = Vec::new();
    for entry in entries {
        let label = entry.day().unwrap_or(UNDATED_LABEL);
        match sections.last_mut() {
            Some(section) if section.label == label => section.entries.push(entry.clone()),
            _ => sections.push(DaySection { label: label.to_owned(), entries: vec![entry.clone()] }),
        }
    }
    sections
}

/// Entries on screen plus the keys whose removal animation is running.
#[derive(Clone, Debug, Default)]
pub struct HistoryState {
    pub entries: Vec<HistoryEntry>,
    pub removing: HashSet<String>,
}

impl HistoryState {
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self { entries: load_history(store), removing: HashSet::new() }
    }

    pub fn is_removing(&self, key: &str) -> bool {
        self.removing.contains(key)
    }

    pub fn begin_remove(&mut self, key: &str) {
        self.removing.insert(key.to_lowercase());
    }

    /// Drop the entry once its animation has finished.
    pub fn finish_remove(&mut self, key: &str) {
        let key = key.to_lowercase();
        self.entries.retain(|e| e.key() != key);
        self.removing.remove(&key);
    }

    pub fn finish_clear(&mut self) {
        self.entries.clear();
        self.removing.clear();
    }

    pub fn stats(&self) -> HistoryStats {
        HistoryStats::from_entries(&self.entries)
    }

    pub fn sections(&self) -> Vec<DaySection> {
        group_by_day(&self.entries)
    }
}
