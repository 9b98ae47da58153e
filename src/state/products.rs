//! Product results state and comparison-card grouping.
//!
//! DESIGN
//! ======
//! Rows arrive flat from several retailers. Cards are derived on every render
//! by grouping rows under a normalized product name, partitioning each group
//! by platform keyword, and deduplicating within each partition. Nothing
//! derived here is stored.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use std::collections::{HashMap, HashSet};

use crate::net::types::ProductRow;
use crate::util::platform::{PlatformBadge, platform_badge};
use crate::util::price::{parse_price, savings};

/// Rendered product results and the search status line.
#[derive(Clone, Debug, Default)]
pub struct ProductsState {
    pub items: Vec<ProductRow>,
    pub priority_term: Option<String>,
    pub status: String,
    /// Bumped whenever a new search starts; older searches stop touching state.
    pub epoch: u64,
}

impl ProductsState {
    /// Start a new search generation and return its epoch.
    pub fn begin_search(&mut self) -> u64 {
        self.epoch = self.epoch.wrapping_add(1);
        self.epoch
    }

    pub fn groups(&self) -> Vec<ProductGroup> {
        group_products(&self.items, self.priority_term.as_deref())
    }
}

/// Rows that describe the same product across retailers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductGroup {
    pub name: String,
    pub term: String,
    pub zepto: Vec<ProductRow>,
    pub blinkit: Vec<ProductRow>,
    pub other: Vec<ProductRow>,
}

/// Lowercase, replace anything outside `[a-z0-9]`/whitespace with a space,
/// collapse whitespace, trim.
pub fn normalize_name(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            cleaned.push(ch);
        } else {
            cleaned.push(' ');
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn dedupe_key(row: &ProductRow) -> String {
    [
        row.platform.as_str(),
        row.product_name.as_str(),
        row.price.as_str(),
        row.quantity.as_str(),
        row.url.as_str(),
    ]
    .join("|")
}

/// Drop rows whose platform/name/price/quantity/url repeat an earlier row.
pub fn dedupe_rows(rows: Vec<ProductRow>) -> Vec<ProductRow> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert(dedupe_key(row)))
        .collect()
}

/// Group rows into comparison cards.
///
/// Groups whose term matches `priority_term` (case-insensitive) come first;
/// otherwise first-seen order is kept.
pub fn group_products(items: &[ProductRow], priority_term: Option<&str>) -> Vec<ProductGroup> {
    let mut groups: Vec<ProductGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let display = [item.product_name.as_str(), item.search_term.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or("Unknown");
        let key = normalize_name(display);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(ProductGroup {
                name: display.to_owned(),
                term: item.search_term.clone(),
                zepto: Vec::new(),
                blinkit: Vec::new(),
                other: Vec::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];

        if item.product_name.chars().count() > group.name.chars().count() {
            group.name.clone_from(&item.product_name);
        }
        if group.term.is_empty() && !item.search_term.is_empty() {
            group.term.clone_from(&item.search_term);
        }

        let platform = item.platform.to_lowercase();
        if platform.contains("zept") {
            group.zepto.push(item.clone());
        } else if platform.contains("blink") {
            group.blinkit.push(item.clone());
        } else {
            group.other.push(item.clone());
        }
    }

    for group in &mut groups {
        group.zepto = dedupe_rows(std::mem::take(&mut group.zepto));
        group.blinkit = dedupe_rows(std::mem::take(&mut group.blinkit));
        group.other = dedupe_rows(std::mem::take(&mut group.other));
    }

    let priority = priority_term.map(str::to_lowercase).filter(|p| !p.is_empty());
    if let Some(priority) = priority {
        groups.sort_by_key(|g| g.term.to_lowercase() != priority);
    }
    groups
}

pub const NOT_AVAILABLE: &str = "Not available";
const NO_PRICE: &str = "—";

/// One retailer column on a comparison card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareColumn {
    pub store: &'static str,
    pub badge: PlatformBadge,
    pub price: String,
    pub quantity: String,
    /// Set only when the column has a row with a usable link.
    pub url: Option<String>,
    pub populated: bool,
    /// Amount saved by buying here instead of at the other store.
    pub saved: u64,
}

fn build_column(store: &'static str, row: Option<&ProductRow>, other: Option<&ProductRow>) -> CompareColumn {
    let price = row.map(|r| r.price.clone()).filter(|p| !p.is_empty());
    let quantity = row
        .and_then(|r| [r.quantity.as_str(), r.raw_text.as_str()].into_iter().find(|s| !s.is_empty()))
        .unwrap_or(NOT_AVAILABLE)
        .to_owned();
    let url = row
        .map(|r| r.url.clone())
        .filter(|u| !u.is_empty() && u != "#");
    let saved = savings(
        row.and_then(|r| parse_price(&r.price)),
        other.and_then(|r| parse_price(&r.price)),
    );
    CompareColumn {
        store,
        badge: platform_badge(store),
        price: price.unwrap_or_else(|| NO_PRICE.to_owned()),
        quantity,
        url,
        populated: row.is_some(),
        saved,
    }
}

/// The fixed Zepto and Blinkit columns for a card, from each bucket's first row.
pub fn compare_columns(group: &ProductGroup) -> [CompareColumn; 2] {
    let zepto = group.zepto.first();
    let blinkit = group.blinkit.first();
    [build_column("Zepto", zepto, blinkit), build_column("Blinkit", blinkit, zepto)]
}
