//! Tests for PageController
//!
//! The fixture collection mirrors five items paged two at a time: pages 1
//! and 2 are full, page 3 holds the remainder.

use super::*;
use crate::error::{Error, Result};
use crate::types::FetchedPage;
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;

const TOTAL_ITEMS: u32 = 5;

fn fixture_items(page: u32, page_size: u32) -> Vec<String> {
    let start = (page - 1) * page_size;
    (start..TOTAL_ITEMS.min(start + page_size))
        .map(|i| format!("item-{i}"))
        .collect()
}

fn fixture_config() -> ControllerConfig {
    ControllerConfig::new().with_max_per_page(2)
}

/// Serves the fixture collection and counts invocations
#[derive(Clone)]
struct FixtureFetcher {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

impl FixtureFetcher {
    fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            fail: true,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher<String> for FixtureFetcher {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<FetchedPage<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::fetch(page, "backend unavailable"));
        }
        Ok(FetchedPage::new(
            fixture_items(page, page_size),
            u64::from(TOTAL_ITEMS),
        ))
    }
}

/// Like `FixtureFetcher`, but each call blocks until released
#[derive(Clone)]
struct GatedFetcher {
    calls: Arc<AtomicUsize>,
    gate: Arc<Semaphore>,
}

impl GatedFetcher {
    fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            gate: Arc::new(Semaphore::new(0)),
        }
    }

    fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher<String> for GatedFetcher {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<FetchedPage<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| Error::other(e.to_string()))?;
        permit.forget();
        Ok(FetchedPage::new(
            fixture_items(page, page_size),
            u64::from(TOTAL_ITEMS),
        ))
    }
}

// ============================================================================
// Startup
// ============================================================================

#[tokio::test]
async fn test_starts_loading_before_first_resolution() {
    let fetcher = FixtureFetcher::new();
    let controller = PageController::new(fixture_config(), fetcher.clone());

    let view = controller.snapshot().await;
    assert_eq!(view.current_page, 1);
    assert_eq!(view.items, Vec::<String>::new());
    assert_eq!(view.max_per_page, 2);
    assert_eq!(view.total_count, 0);
    assert_eq!(view.total_pages, 0);
    assert_eq!(view.status, LoadStatus::Loading);
    assert_eq!(view.status_message.as_deref(), Some("Loading"));
}

#[tokio::test]
async fn test_loads_the_default_page() {
    let fetcher = FixtureFetcher::new();
    let controller = PageController::new(fixture_config(), fetcher.clone());
    controller.settled().await;

    assert_eq!(fetcher.calls(), 1);
    let view = controller.snapshot().await;
    assert_eq!(view.current_page, 1);
    assert_eq!(view.items, fixture_items(1, 2));
    assert_eq!(view.total_count, 5);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.status, LoadStatus::Success);
    assert_eq!(view.status_message.as_deref(), Some("Loaded"));
}

#[tokio::test]
async fn test_honors_default_page_option() {
    let fetcher = FixtureFetcher::new();
    let controller =
        PageController::new(fixture_config().with_default_page(2), fetcher.clone());
    controller.settled().await;

    assert_eq!(controller.current_page().await, 2);
    assert_eq!(controller.current_page_items().await, fixture_items(2, 2));
}

// ============================================================================
// Navigation
// ============================================================================

#[tokio::test]
async fn test_next_page_fetches_and_loads() {
    let fetcher = FixtureFetcher::new();
    let controller = PageController::new(fixture_config(), fetcher.clone());
    controller.settled().await;

    controller.next_page().await;
    // The fetch is issued but not yet resolved
    assert_eq!(controller.status().await, LoadStatus::Loading);
    controller.settled().await;

    assert_eq!(fetcher.calls(), 2);
    assert_eq!(controller.current_page().await, 2);
    assert_eq!(controller.current_page_items().await, fixture_items(2, 2));
    assert_eq!(controller.status().await, LoadStatus::Success);
}

#[tokio::test]
async fn test_boundary_clamps() {
    let fetcher = FixtureFetcher::new();
    let controller = PageController::new(fixture_config(), fetcher.clone());
    controller.settled().await;

    // Page 1 of 3: no previous page
    controller.previous_page().await;
    controller.settled().await;
    assert_eq!(controller.current_page().await, 1);

    controller.change_page(3).await;
    controller.settled().await;

    // Page 3 of 3: no next page
    controller.next_page().await;
    controller.settled().await;
    assert_eq!(controller.current_page().await, 3);
    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test]
async fn test_out_of_range_targets_ignored() {
    let fetcher = FixtureFetcher::new();
    let controller = PageController::new(fixture_config(), fetcher.clone());
    controller.settled().await;

    controller.change_page(0).await;
    controller.change_page(4).await;
    controller.change_page(99).await;
    controller.settled().await;

    assert_eq!(controller.current_page().await, 1);
    assert_eq!(fetcher.calls(), 1);
    assert_eq!(controller.status().await, LoadStatus::Success);
}

// ============================================================================
// Caching
// ============================================================================

#[tokio::test]
async fn test_cached_pages_are_not_refetched() {
    let fetcher = FixtureFetcher::new();
    let controller = PageController::new(fixture_config(), fetcher.clone());
    controller.settled().await;

    controller.next_page().await;
    controller.settled().await;
    controller.previous_page().await;
    controller.settled().await;
    controller.next_page().await;
    controller.settled().await;

    assert_eq!(fetcher.calls(), 2);
    assert_eq!(controller.current_page().await, 2);
    assert_eq!(controller.current_page_items().await, fixture_items(2, 2));
}

#[tokio::test]
async fn test_same_page_navigation_is_idempotent() {
    let fetcher = FixtureFetcher::new();
    let controller = PageController::new(fixture_config(), fetcher.clone());
    controller.settled().await;

    controller.change_page(1).await;
    controller.change_page(1).await;
    controller.settled().await;

    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn test_caching_disabled_refetches_every_navigation() {
    let fetcher = FixtureFetcher::new();
    let controller =
        PageController::new(fixture_config().with_caching(false), fetcher.clone());
    controller.settled().await;

    controller.next_page().await;
    controller.settled().await;
    controller.previous_page().await;
    controller.settled().await;
    controller.next_page().await;
    controller.settled().await;

    assert_eq!(fetcher.calls(), 4);
}

#[tokio::test]
async fn test_rapid_same_target_issues_one_fetch() {
    let fetcher = GatedFetcher::new();
    fetcher.release(1);
    let controller = PageController::new(fixture_config(), fetcher.clone());
    controller.settled().await;

    controller.change_page(2).await;
    controller.change_page(2).await;
    controller.change_page(2).await;
    fetcher.release(1);
    controller.settled().await;

    assert_eq!(fetcher.calls(), 2);
    assert_eq!(controller.current_page_items().await, fixture_items(2, 2));
}

// ============================================================================
// Page Size Changes
// ============================================================================

#[tokio::test]
async fn test_page_size_change_invalidates_and_rehomes() {
    let fetcher = FixtureFetcher::new();
    let controller = PageController::new(fixture_config(), fetcher.clone());
    controller.settled().await;
    controller.change_page(3).await;
    controller.settled().await;
    assert_eq!(fetcher.calls(), 2);

    controller.change_max_per_page(3).await;
    controller.settled().await;

    // One fetch for page 1 at the new size, nothing served from old cache
    assert_eq!(fetcher.calls(), 3);
    assert_eq!(controller.current_page().await, 1);
    assert_eq!(controller.max_per_page().await, 3);
    assert_eq!(controller.total_pages().await, 2);
    assert_eq!(controller.current_page_items().await, fixture_items(1, 3));
}

#[tokio::test]
async fn test_zero_page_size_blocks_navigation() {
    let fetcher = FixtureFetcher::new();
    let controller = PageController::new(fixture_config(), fetcher.clone());
    controller.settled().await;

    controller.change_max_per_page(0).await;
    controller.settled().await;

    assert_eq!(controller.total_pages().await, 0);
    // Re-homing was bounds-blocked; the current page was refetched at size 0
    assert_eq!(controller.current_page().await, 1);
    assert_eq!(controller.current_page_items().await, Vec::<String>::new());

    controller.next_page().await;
    controller.change_page(2).await;
    controller.settled().await;
    assert_eq!(controller.current_page().await, 1);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_fetch_failure_surfaces_in_status() {
    let fetcher = FixtureFetcher::failing();
    let controller = PageController::new(fixture_config(), fetcher.clone());
    controller.settled().await;

    assert_eq!(fetcher.calls(), 1);
    let view = controller.snapshot().await;
    assert_eq!(view.status, LoadStatus::Failed);
    assert_eq!(
        view.status_message.as_deref(),
        Some("fetch failed for page 1: backend unavailable")
    );
    assert_eq!(view.items, Vec::<String>::new());
    assert_eq!(view.total_count, 0);
}

// ============================================================================
// In-Flight Resolutions
// ============================================================================

#[tokio::test]
async fn test_late_resolution_files_under_its_own_page() {
    let fetcher = GatedFetcher::new();
    fetcher.release(1);
    let controller = PageController::new(fixture_config(), fetcher.clone());
    controller.settled().await;

    // Navigate twice before either fetch resolves
    controller.change_page(2).await;
    controller.change_page(3).await;

    fetcher.release(2);
    controller.settled().await;
    assert_eq!(fetcher.calls(), 3);

    // Page 2's resolution landed in the cache, page 3's drove the status
    assert_eq!(controller.current_page().await, 3);
    assert_eq!(controller.current_page_items().await, fixture_items(3, 2));
    assert_eq!(controller.page_items(2).await, Some(fixture_items(2, 2)));
    assert_eq!(controller.status().await, LoadStatus::Success);
}

#[tokio::test]
async fn test_late_resolution_dropped_without_cache() {
    let fetcher = GatedFetcher::new();
    fetcher.release(1);
    let controller =
        PageController::new(fixture_config().with_caching(false), fetcher.clone());
    controller.settled().await;

    controller.change_page(2).await;
    controller.change_page(1).await;

    fetcher.release(2);
    controller.settled().await;
    assert_eq!(fetcher.calls(), 3);

    // The abandoned page 2 response must not clobber the single cache slot
    assert_eq!(controller.current_page().await, 1);
    assert_eq!(controller.current_page_items().await, fixture_items(1, 2));
    assert_eq!(controller.page_items(2).await, None);
    assert_eq!(controller.status().await, LoadStatus::Success);
}

#[tokio::test]
async fn test_resolution_at_old_size_dropped_after_size_change() {
    let fetcher = GatedFetcher::new();
    fetcher.release(1);
    let controller = PageController::new(fixture_config(), fetcher.clone());
    controller.settled().await;

    // Fetch for page 2 at size 2 hangs; the size changes underneath it
    controller.change_page(2).await;
    controller.change_max_per_page(3).await;

    fetcher.release(2);
    controller.settled().await;
    assert_eq!(fetcher.calls(), 3);

    assert_eq!(controller.current_page().await, 1);
    assert_eq!(controller.max_per_page().await, 3);
    assert_eq!(controller.current_page_items().await, fixture_items(1, 3));
    // The size-2 response for page 2 was discarded wholesale
    assert_eq!(controller.page_items(2).await, None);
}
