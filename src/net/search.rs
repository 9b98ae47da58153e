//! Product search orchestration across the retailer services.
//!
//! SYSTEM CONTEXT
//! ==============
//! The product page asks every retailer for stored results, triggers fresh
//! scrapes, and re-reads until the attempt budget runs out. This module owns
//! that sequence as plain async functions over two seams: [`ProductSource`]
//! (the network) and [`SearchView`] (status text, rendered items, and whether
//! the search is still the current one).
//!
//! ERROR HANDLING
//! ==============
//! Nothing here fails. Transport errors, non-OK statuses and bad bodies
//! become a soft `had_error` flag or an entry in the scrape error list, and
//! only change the status text.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::future::Future;
use std::time::Duration;

use super::api;
use super::error::ApiError;
use super::types::{ProductRow, ResultsResponse};
use crate::config::{BackendConfig, RetryPolicy};

/// Network seam: one result per retailer, in merge order.
#[allow(async_fn_in_trait)]
pub trait ProductSource {
    async fn results(&self, term: &str) -> Vec<Result<ResultsResponse, ApiError>>;
    async fn latest(&self) -> Vec<Result<ResultsResponse, ApiError>>;
    async fn scrape(&self, term: &str) -> Vec<Result<(), ApiError>>;
}

/// Presentation seam for a running search.
pub trait SearchView {
    fn set_status(&self, message: String);
    fn show(&self, items: Vec<ProductRow>, priority_term: Option<String>);
    /// `false` once a newer search has replaced this one.
    fn is_current(&self) -> bool;
}

/// Live retailer services, queried concurrently.
#[derive(Clone, Debug)]
pub struct HttpProductSource {
    config: BackendConfig,
}

impl HttpProductSource {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }
}

impl ProductSource for HttpProductSource {
    async fn results(&self, term: &str) -> Vec<Result<ResultsResponse, ApiError>> {
        let [zepto, blinkit] = self.config.retailer_urls();
        let (a, b) = futures::future::join(api::fetch_results(zepto, term), api::fetch_results(blinkit, term)).await;
        vec![a, b]
    }

    async fn latest(&self) -> Vec<Result<ResultsResponse, ApiError>> {
        let [zepto, blinkit] = self.config.retailer_urls();
        let (a, b) = futures::future::join(api::fetch_latest(zepto), api::fetch_latest(blinkit)).await;
        vec![a, b]
    }

    async fn scrape(&self, term: &str) -> Vec<Result<(), ApiError>> {
        let [zepto, blinkit] = self.config.retailer_urls();
        let (a, b) = futures::future::join(api::request_scrape(zepto, term), api::request_scrape(blinkit, term)).await;
        vec![a, b]
    }
}

/// Items merged from every retailer plus a soft error flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fetched {
    pub items: Vec<ProductRow>,
    pub had_error: bool,
    pub last_term: Option<String>,
}

/// Merge per-retailer responses in order; any failure only sets `had_error`.
pub fn merge_responses(responses: Vec<Result<ResultsResponse, ApiError>>) -> Fetched {
    let mut merged = Fetched::default();
    for response in responses {
        match response {
            Ok(body) => {
                merged.items.extend(body.items);
                if merged.last_term.is_none() {
                    merged.last_term = body.last_term.filter(|t| !t.is_empty());
                }
            }
            Err(e) => {
                leptos::logging::warn!("results request failed: {e}");
                merged.had_error = true;
            }
        }
    }
    merged
}

/// Fetch stored results for `term` and render whatever arrived.
///
/// Returns the rendered items (empty when nothing was rendered).
pub async fn fetch_and_render<S: ProductSource, V: SearchView>(
    source: &S,
    view: &V,
    term: &str,
    silent_if_empty: bool,
) -> Vec<ProductRow> {
    view.set_status(format!("Loading results for \"{term}\" ..."));
    let fetched = merge_responses(source.results(term).await);
    if !view.is_current() {
        return Vec::new();
    }

    if fetched.items.is_empty() {
        if silent_if_empty {
            view.set_status(String::new());
        } else if fetched.had_error {
            view.set_status("Could not load results.".to_owned());
        } else {
            view.set_status("No results yet.".to_owned());
        }
        return Vec::new();
    }

    view.show(fetched.items.clone(), Some(term.to_owned()));
    view.set_status(String::new());
    fetched.items
}

/// Load the most recent scrape from every retailer.
pub async fn fetch_latest_combined<S: ProductSource, V: SearchView>(source: &S, view: &V) {
    view.set_status("Loading latest Zepto + Blinkit results ...".to_owned());
    let fetched = merge_responses(source.latest().await);
    if !view.is_current() {
        return;
    }

    if fetched.items.is_empty() {
        let message = if fetched.had_error { "Could not load latest results." } else { "No scraped results yet." };
        view.set_status(message.to_owned());
        return;
    }

    view.show(fetched.items, fetched.last_term);
    view.set_status("Showing latest Zepto + Blinkit results".to_owned());
}

/// Trigger a scrape on every retailer and collect failure messages.
pub async fn scrape_both<S: ProductSource>(source: &S, term: &str) -> Vec<String> {
    source
        .scrape(term)
        .await
        .into_iter()
        .filter_map(Result::err)
        .map(|e| api::scrape_error_message(&e))
        .collect()
}

/// What a search run did before it finished or was superseded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub attempts: u32,
    pub scrape_errors: Vec<String>,
    pub superseded: bool,
}

/// Run up to `policy.max_attempts` fetch/scrape/reload cycles for `term`.
///
/// Steps within an attempt run strictly in sequence; `sleep` is awaited
/// between attempts and never after the last one. The run stops early, without
/// touching the view, once `view.is_current()` turns false.
pub async fn run_search<S, V, F, Fut>(source: &S, view: &V, term: &str, policy: RetryPolicy, sleep: F) -> SearchOutcome
where
    S: ProductSource,
    V: SearchView,
    F: Fn(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    let max = policy.max_attempts.max(1);
    let mut outcome = SearchOutcome::default();

    for attempt in 1..=max {
        if !view.is_current() {
            outcome.superseded = true;
            return outcome;
        }
        outcome.attempts = attempt;
        view.set_status(format!("Attempt {attempt}/{max} for \"{term}\" ..."));

        let stored = fetch_and_render(source, view, term, true).await;
        if !stored.is_empty() {
            view.set_status(format!("Showing {} saved results for \"{term}\"", stored.len()));
        }

        if !view.is_current() {
            outcome.superseded = true;
            return outcome;
        }
        view.set_status(format!("Scraping \"{term}\" (attempt {attempt}/{max}) ..."));
        let errors = scrape_both(source, term).await;
        for e in &errors {
            leptos::logging::warn!("scrape failed for \"{term}\": {e}");
        }
        outcome.scrape_errors.extend(errors);

        if !view.is_current() {
            outcome.superseded = true;
            return outcome;
        }
        let fresh = fetch_and_render(source, view, term, true).await;
        if !view.is_current() {
            outcome.superseded = true;
            return outcome;
        }
        if !fresh.is_empty() {
            view.set_status(format!("Showing {} scraped results for \"{term}\"", fresh.len()));
        }

        if attempt < max {
            view.set_status(format!(
                "Scheduling attempt {}/{max} in {}s ...",
                attempt + 1,
                policy.retry_delay.as_secs()
            ));
            sleep(policy.retry_delay).await;
        } else {
            view.set_status(format!("Finished {max} attempts."));
        }
    }

    outcome
}
