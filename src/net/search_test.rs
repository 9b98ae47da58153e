use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;

fn row(platform: &str, name: &str, price: &str) -> ProductRow {
    ProductRow {
        platform: platform.to_owned(),
        product_name: name.to_owned(),
        price: price.to_owned(),
        search_term: "milk".to_owned(),
        ..ProductRow::default()
    }
}

fn body(items: Vec<ProductRow>) -> ResultsResponse {
    ResultsResponse { items, last_term: None }
}

/// Scripted retailers: the same replies on every call, with call counters.
#[derive(Default)]
struct FakeSource {
    results: Vec<Result<ResultsResponse, ApiError>>,
    latest: Vec<Result<ResultsResponse, ApiError>>,
    scrape: Vec<Result<(), ApiError>>,
    result_calls: Cell<usize>,
    scrape_calls: Cell<usize>,
}

impl ProductSource for FakeSource {
    async fn results(&self, _term: &str) -> Vec<Result<ResultsResponse, ApiError>> {
        self.result_calls.set(self.result_calls.get() + 1);
        self.results.clone()
    }

    async fn latest(&self) -> Vec<Result<ResultsResponse, ApiError>> {
        self.latest.clone()
    }

    async fn scrape(&self, _term: &str) -> Vec<Result<(), ApiError>> {
        self.scrape_calls.set(self.scrape_calls.get() + 1);
        self.scrape.clone()
    }
}

struct FakeView {
    statuses: RefCell<Vec<String>>,
    shown: RefCell<Vec<(usize, Option<String>)>>,
    current: Cell<bool>,
}

impl FakeView {
    fn new() -> Self {
        Self { statuses: RefCell::new(Vec::new()), shown: RefCell::new(Vec::new()), current: Cell::new(true) }
    }

    fn last_status(&self) -> String {
        self.statuses.borrow().last().cloned().unwrap_or_default()
    }
}

impl SearchView for FakeView {
    fn set_status(&self, message: String) {
        self.statuses.borrow_mut().push(message);
    }

    fn show(&self, items: Vec<ProductRow>, priority_term: Option<String>) {
        self.shown.borrow_mut().push((items.len(), priority_term));
    }

    fn is_current(&self) -> bool {
        self.current.get()
    }
}

// =============================================================
// merge_responses
// =============================================================

#[test]
fn merge_responses_concatenates_in_retailer_order() {
    let merged = merge_responses(vec![
        Ok(body(vec![row("Zepto", "Milk", "10")])),
        Ok(body(vec![row("Blinkit", "Milk", "12"), row("Blinkit", "Bread", "30")])),
    ]);
    assert!(!merged.had_error);
    let platforms: Vec<_> = merged.items.iter().map(|r| r.platform.as_str()).collect();
    assert_eq!(platforms, ["Zepto", "Blinkit", "Blinkit"]);
}

#[test]
fn merge_responses_flags_errors_but_keeps_partial_items() {
    let merged = merge_responses(vec![
        Err(ApiError::Transport("down".to_owned())),
        Ok(body(vec![row("Blinkit", "Milk", "12")])),
    ]);
    assert!(merged.had_error);
    assert_eq!(merged.items.len(), 1);
}

#[test]
fn merge_responses_takes_first_non_empty_last_term() {
    let merged = merge_responses(vec![
        Ok(ResultsResponse { items: Vec::new(), last_term: Some(String::new()) }),
        Ok(ResultsResponse { items: Vec::new(), last_term: Some("bread".to_owned()) }),
    ]);
    assert_eq!(merged.last_term.as_deref(), Some("bread"));
}

// =============================================================
// fetch_and_render / fetch_latest_combined
// =============================================================

#[test]
fn fetch_and_render_silent_when_empty() {
    let source = FakeSource { results: vec![Ok(body(Vec::new())), Ok(body(Vec::new()))], ..FakeSource::default() };
    let view = FakeView::new();
    let items = block_on(fetch_and_render(&source, &view, "milk", true));
    assert!(items.is_empty());
    assert!(view.shown.borrow().is_empty());
    assert_eq!(view.last_status(), "");
}

#[test]
fn fetch_and_render_reports_error_when_empty_and_failed() {
    let source = FakeSource {
        results: vec![Err(ApiError::Status { status: 500, message: None }), Ok(body(Vec::new()))],
        ..FakeSource::default()
    };
    let view = FakeView::new();
    block_on(fetch_and_render(&source, &view, "milk", false));
    assert_eq!(view.last_status(), "Could not load results.");
}

#[test]
fn fetch_and_render_reports_no_results_without_error() {
    let source = FakeSource { results: vec![Ok(body(Vec::new())), Ok(body(Vec::new()))], ..FakeSource::default() };
    let view = FakeView::new();
    block_on(fetch_and_render(&source, &view, "milk", false));
    assert_eq!(view.last_status(), "No results yet.");
}

#[test]
fn fetch_and_render_shows_items_with_term_priority() {
    let source = FakeSource {
        results: vec![Ok(body(vec![row("Zepto", "Milk", "10")])), Err(ApiError::Unavailable)],
        ..FakeSource::default()
    };
    let view = FakeView::new();
    let items = block_on(fetch_and_render(&source, &view, "milk", false));
    assert_eq!(items.len(), 1);
    assert_eq!(*view.shown.borrow(), vec![(1, Some("milk".to_owned()))]);
    assert_eq!(view.last_status(), "");
}

#[test]
fn fetch_latest_combined_uses_last_term_as_priority() {
    let source = FakeSource {
        latest: vec![
            Ok(ResultsResponse { items: vec![row("Zepto", "Milk", "10")], last_term: Some("milk".to_owned()) }),
            Ok(body(vec![row("Blinkit", "Milk", "12")])),
        ],
        ..FakeSource::default()
    };
    let view = FakeView::new();
    block_on(fetch_latest_combined(&source, &view));
    assert_eq!(*view.shown.borrow(), vec![(2, Some("milk".to_owned()))]);
    assert_eq!(view.last_status(), "Showing latest Zepto + Blinkit results");
}

#[test]
fn fetch_latest_combined_reports_failure_or_empty() {
    let failing = FakeSource {
        latest: vec![Err(ApiError::Transport("down".to_owned())), Ok(body(Vec::new()))],
        ..FakeSource::default()
    };
    let view = FakeView::new();
    block_on(fetch_latest_combined(&failing, &view));
    assert_eq!(view.last_status(), "Could not load latest results.");

    let empty = FakeSource { latest: vec![Ok(body(Vec::new())), Ok(body(Vec::new()))], ..FakeSource::default() };
    let view = FakeView::new();
    block_on(fetch_latest_combined(&empty, &view));
    assert_eq!(view.last_status(), "No scraped results yet.");
}

// =============================================================
// scrape_both / run_search
// =============================================================

#[test]
fn scrape_both_collects_messages_for_failures_only() {
    let source = FakeSource {
        scrape: vec![
            Err(ApiError::Status { status: 504, message: Some("scrape timed out".to_owned()) }),
            Ok(()),
        ],
        ..FakeSource::default()
    };
    assert_eq!(block_on(scrape_both(&source, "milk")), vec!["scrape timed out".to_owned()]);
}

#[test]
fn run_search_performs_three_cycles_and_two_waits() {
    let source = FakeSource {
        results: vec![Ok(body(vec![row("Zepto", "Milk", "10")])), Ok(body(Vec::new()))],
        scrape: vec![Ok(()), Ok(())],
        ..FakeSource::default()
    };
    let view = FakeView::new();
    let waits = RefCell::new(Vec::new());
    let outcome = block_on(run_search(&source, &view, "milk", RetryPolicy::default(), |d| {
        waits.borrow_mut().push(d);
        std::future::ready(())
    }));

    assert_eq!(outcome.attempts, 3);
    assert!(!outcome.superseded);
    assert_eq!(source.scrape_calls.get(), 3);
    assert_eq!(source.result_calls.get(), 6);
    assert_eq!(*waits.borrow(), vec![Duration::from_secs(20), Duration::from_secs(20)]);
    assert_eq!(view.last_status(), "Finished 3 attempts.");
}

#[test]
fn run_search_status_sequence_for_single_attempt() {
    let source = FakeSource {
        results: vec![Ok(body(vec![row("Zepto", "Milk", "10")])), Ok(body(vec![row("Blinkit", "Milk", "12")]))],
        scrape: vec![Ok(()), Ok(())],
        ..FakeSource::default()
    };
    let view = FakeView::new();
    let policy = RetryPolicy { max_attempts: 1, retry_delay: Duration::from_secs(20) };
    block_on(run_search(&source, &view, "milk", policy, |_| std::future::ready(())));

    assert_eq!(
        *view.statuses.borrow(),
        vec![
            "Attempt 1/1 for \"milk\" ...".to_owned(),
            "Loading results for \"milk\" ...".to_owned(),
            String::new(),
            "Showing 2 saved results for \"milk\"".to_owned(),
            "Scraping \"milk\" (attempt 1/1) ...".to_owned(),
            "Loading results for \"milk\" ...".to_owned(),
            String::new(),
            "Showing 2 scraped results for \"milk\"".to_owned(),
            "Finished 1 attempts.".to_owned(),
        ]
    );
}

#[test]
fn run_search_keeps_going_after_scrape_failures() {
    let source = FakeSource {
        results: vec![Ok(body(Vec::new())), Ok(body(Vec::new()))],
        scrape: vec![Err(ApiError::Transport(String::new())), Ok(())],
        ..FakeSource::default()
    };
    let view = FakeView::new();
    let outcome = block_on(run_search(&source, &view, "milk", RetryPolicy::default(), |_| std::future::ready(())));
    assert_eq!(outcome.attempts, 3);
    assert_eq!(outcome.scrape_errors, vec!["Scrape request failed".to_owned(); 3]);
    assert!(view.shown.borrow().is_empty());
}

#[test]
fn run_search_stops_when_superseded_during_wait() {
    let source = FakeSource {
        results: vec![Ok(body(Vec::new())), Ok(body(Vec::new()))],
        scrape: vec![Ok(()), Ok(())],
        ..FakeSource::default()
    };
    let view = FakeView::new();
    let outcome = block_on(run_search(&source, &view, "milk", RetryPolicy::default(), |_| {
        view.current.set(false);
        std::future::ready(())
    }));
    assert!(outcome.superseded);
    assert_eq!(outcome.attempts, 1);
    assert_eq!(source.scrape_calls.get(), 1);
}

#[test]
fn run_search_treats_zero_attempts_as_one() {
    let source = FakeSource::default();
    let view = FakeView::new();
    let policy = RetryPolicy { max_attempts: 0, retry_delay: Duration::from_secs(1) };
    let outcome = block_on(run_search(&source, &view, "milk", policy, |_| std::future::ready(())));
    assert_eq!(outcome.attempts, 1);
    assert_eq!(source.scrape_calls.get(), 1);
}
