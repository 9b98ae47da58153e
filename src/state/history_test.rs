use super::*;
use crate::util::platform::platform_badge;
use crate::util::storage::MemoryStore;

fn entry(term: &str, name: &str, saved: &str, viewed_at: &str) -> HistoryEntry {
    HistoryEntry {
        term: term.to_owned(),
        name: name.to_owned(),
        price: "₹26".to_owned(),
        saved: saved.to_owned(),
        viewed_at: viewed_at.to_owned(),
    }
}

fn seeded(entries: &[HistoryEntry]) -> MemoryStore {
    let store = MemoryStore::new();
    save_history(&store, entries);
    store
}

// =============================================================
// persistence
// =============================================================

#[test]
fn malformed_history_loads_as_empty() {
    let store = MemoryStore::new();
    store.set(HISTORY_KEY, "{not json");
    assert!(load_history(&store).is_empty());
}

#[test]
fn missing_and_null_fields_load_as_empty_strings() {
    let store = MemoryStore::new();
    store.set(HISTORY_KEY, r#"[{"term":"milk","name":null,"saved":14}]"#);
    let entries = load_history(&store);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "");
    assert_eq!(entries[0].saved, "14");
    assert_eq!(entries[0].viewed_at, "");
}

#[test]
fn key_is_lowercase_term_and_name() {
    assert_eq!(entry("Milk", "Amul Taaza", "", "").key(), "milk::amul taaza");
}

#[test]
fn delete_entry_removes_only_matching_key() {
    let store = seeded(&[
        entry("milk", "Amul Taaza", "Saved ₹14", ""),
        entry("milk", "Amul Gold", "Saved ₹0", ""),
        entry("bread", "Amul Taaza", "Saved ₹2", ""),
    ]);
    let rest = delete_entry(&store, "MILK::amul taaza");
    let names: Vec<_> = rest.iter().map(HistoryEntry::key).collect();
    assert_eq!(names, ["milk::amul gold", "bread::amul taaza"]);
    assert_eq!(load_history(&store), rest);
}

#[test]
fn delete_entry_with_unknown_key_keeps_everything() {
    let store = seeded(&[entry("milk", "A", "", "")]);
    assert_eq!(delete_entry(&store, "eggs::b").len(), 1);
}

#[test]
fn clear_history_empties_storage() {
    let store = seeded(&[entry("milk", "A", "", ""), entry("milk", "B", "", "")]);
    clear_history(&store);
    assert!(load_history(&store).is_empty());
}

#[test]
fn record_view_moves_repeat_entry_to_front() {
    let store = seeded(&[entry("milk", "A", "Saved ₹1", "2026-01-01"), entry("milk", "B", "", "2026-01-01")]);
    let entries = record_view(&store, entry("Milk", "b", "Saved ₹5", "2026-02-01"));
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].saved, "Saved ₹5");
    assert_eq!(entries[1].name, "A");
    assert_eq!(load_history(&store), entries);
}

#[test]
fn from_column_uses_column_price_and_savings() {
    let column = CompareColumn {
        store: "Zepto",
        badge: platform_badge("Zepto"),
        price: "₹26".to_owned(),
        quantity: "500 ml".to_owned(),
        url: Some("https://zepto.example/milk".to_owned()),
        populated: true,
        saved: 14,
    };
    let e = HistoryEntry::from_column("milk", "Amul Milk", &column, "2026-10-18T09:00:00.000Z".to_owned());
    assert_eq!(e.price, "₹26");
    assert_eq!(e.saved, "Saved ₹14");
    assert_eq!(e.day(), Some("2026-10-18"));
}

// =============================================================
// stats
// =============================================================

#[test]
fn stats_sum_rupee_amounts_and_count_positive_deals() {
    let entries = [
        entry("milk", "A", "Saved ₹14", ""),
        entry("milk", "B", "Saved ₹0", ""),
        entry("milk", "C", "no savings", ""),
        entry("milk", "D", "Saved ₹1200", ""),
    ];
    let stats = HistoryStats::from_entries(&entries);
    assert_eq!(stats, HistoryStats { searches: 4, total_saved: 1214, best_deals: 2 });
    assert_eq!(stats.total_saved_label(), "₹1,214");
}

#[test]
fn stats_for_empty_history_are_zero() {
    let stats = HistoryStats::from_entries(&[]);
    assert_eq!(stats, HistoryStats::default());
    assert_eq!(stats.total_saved_label(), "₹0");
}

// =============================================================
// sections
// =============================================================

#[test]
fn group_by_day_keeps_order_and_labels_undated_entries() {
    let entries = [
        entry("milk", "A", "", "2026-10-18T09:00:00Z"),
        entry("milk", "B", "", "2026-10-18T08:00:00Z"),
        entry("milk", "C", "", "2026-10-17T20:00:00Z"),
        entry("milk", "D", "", "yesterday"),
    ];
    let sections = group_by_day(&entries);
    let labels: Vec<_> = sections.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["2026-10-18", "2026-10-17", UNDATED_LABEL]);
    assert_eq!(sections[0].entries.len(), 2);
}

// =============================================================
// removal state
// =============================================================

#[test]
fn single_removal_marks_then_drops_entry() {
    let store = seeded(&[entry("milk", "A", "", ""), entry("milk", "B", "", "")]);
    let mut state = HistoryState::load(&store);

    state.begin_remove("Milk::A");
    assert!(state.is_removing("milk::a"));
    assert_eq!(state.entries.len(), 2);

    state.finish_remove("milk::a");
    assert!(!state.is_removing("milk::a"));
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].name, "B");
}

#[test]
fn clear_settles_after_stagger_window() {
    assert_eq!(clear_delay_ms(0), 0);
    assert_eq!(clear_delay_ms(3), 150);
    assert_eq!(clear_settle_ms(0), 300);
    assert_eq!(clear_settle_ms(4), 500);

    let store = seeded(&[entry("milk", "A", "", ""), entry("milk", "B", "", "")]);
    let mut state = HistoryState::load(&store);
    clear_history(&store);
    for e in state.entries.clone() {
        state.begin_remove(&e.key());
    }
    state.finish_clear();
    assert!(state.entries.is_empty());
    assert!(state.removing.is_empty());
    assert!(state.sections().is_empty());
}
