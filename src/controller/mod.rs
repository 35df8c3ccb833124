//! Pagination controller module
//!
//! # Overview
//!
//! `PageController` owns the pagination state behind a lock, applies
//! UI-issued navigation through the transition function, and after every
//! dispatch re-evaluates the fetch decision policy on the settled state.
//! When the policy says fetch, at most one fetch task is issued per
//! distinct `(page, page_size)` snapshot; an identical request already in
//! flight is never duplicated.
//!
//! Fetch tasks resolve on their own time. Each one dispatches a success or
//! failure event carrying the `(page, page_size)` it was issued with, so
//! the transition function can file or discard late resolutions correctly
//! no matter what the user did in the meantime.

use crate::config::ControllerConfig;
use crate::fetch::PageFetcher;
use crate::policy::should_fetch_page;
use crate::state::{reduce, Event, PageState, PageView};
use crate::types::LoadStatus;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{Mutex, Notify, RwLock};
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

/// Shared core behind the controller handles
struct Shared<T> {
    /// The pagination state; all mutation goes through `reduce`
    state: RwLock<PageState<T>>,
    /// Keys of fetches currently in flight
    in_flight: Mutex<HashSet<(u32, u32)>>,
    /// Signalled whenever a fetch resolves
    resolved: Notify,
}

/// Pagination controller
///
/// Drives a [`PageFetcher`] from UI navigation commands and exposes the
/// read model the UI renders from. Fetch rejections are never returned to
/// the caller; they surface as [`LoadStatus::Failed`] plus a status
/// message, and the next navigation that needs a fetch recovers.
///
/// Cloning is cheap and every clone shares the same state, so a handle can
/// be kept wherever navigation is triggered.
///
/// Must be created inside a Tokio runtime: construction schedules the
/// fetch for the starting page immediately.
pub struct PageController<T> {
    shared: Arc<Shared<T>>,
    fetcher: Arc<dyn PageFetcher<T>>,
}

impl<T> Clone for PageController<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}

impl<T: Send + Sync + 'static> PageController<T> {
    /// Create a controller and schedule the fetch for the starting page
    pub fn new(config: ControllerConfig, fetcher: impl PageFetcher<T> + 'static) -> Self {
        let state = PageState::new(&config);
        let page = state.current_page();
        let page_size = state.max_per_page();

        let controller = Self {
            shared: Arc::new(Shared {
                state: RwLock::new(state),
                in_flight: Mutex::new(HashSet::from([(page, page_size)])),
                resolved: Notify::new(),
            }),
            fetcher: Arc::new(fetcher),
        };
        controller.spawn_fetch(page, page_size);
        controller
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Navigate to `page`
    ///
    /// Out-of-range targets (below 1 or past the last page) are silently
    /// ignored; that keeps boundary buttons dumb.
    pub async fn change_page(&self, page: u32) {
        {
            let mut state = self.shared.state.write().await;
            if !state.is_page_in_range(page) {
                return;
            }
            reduce(&mut state, Event::PageChanged { page });
        }
        self.settle().await;
    }

    /// Navigate to the page after the current one, if any
    pub async fn next_page(&self) {
        let target = {
            let state = self.shared.state.read().await;
            state.has_next_page().then(|| state.current_page() + 1)
        };
        if let Some(page) = target {
            self.change_page(page).await;
        }
    }

    /// Navigate to the page before the current one, if any
    pub async fn previous_page(&self) {
        let target = {
            let state = self.shared.state.read().await;
            state.has_previous_page().then(|| state.current_page() - 1)
        };
        if let Some(page) = target {
            self.change_page(page).await;
        }
    }

    /// Change the page size and re-home navigation to page 1
    ///
    /// Every cached page is invalidated: the old entries no longer
    /// correspond to the same item ranges. Both transitions apply before
    /// the fetch decision runs, so the change costs a single fetch.
    pub async fn change_max_per_page(&self, size: u32) {
        {
            let mut state = self.shared.state.write().await;
            reduce(&mut state, Event::PageSizeChanged { size });
            if state.is_page_in_range(1) {
                reduce(&mut state, Event::PageChanged { page: 1 });
            }
        }
        self.settle().await;
    }

    // ========================================================================
    // Fetch Loop
    // ========================================================================

    /// Re-evaluate the fetch decision for the current state snapshot
    ///
    /// Runs after every dispatched transition and issues at most one fetch
    /// for the snapshot it observed.
    async fn settle(&self) {
        let needed = {
            let state = self.shared.state.read().await;
            let page = state.current_page();
            let cached = state.page_items(page).is_some();
            should_fetch_page(state.caching(), cached, state.status())
                .then(|| (page, state.max_per_page()))
        };
        if let Some((page, page_size)) = needed {
            self.request_fetch(page, page_size).await;
        }
    }

    /// Register a fetch key and spawn the fetch, unless an identical
    /// request is already pending
    async fn request_fetch(&self, page: u32, page_size: u32) {
        {
            let mut in_flight = self.shared.in_flight.lock().await;
            if !in_flight.insert((page, page_size)) {
                debug!("fetch for page {page} (size {page_size}) already in flight");
                return;
            }
        }
        self.spawn_fetch(page, page_size);
    }

    /// Run the fetch on its own task; the key must already be registered
    fn spawn_fetch(&self, page: u32, page_size: u32) {
        debug!("fetching page {page} (size {page_size})");
        let shared = Arc::clone(&self.shared);
        let fetcher = Arc::clone(&self.fetcher);
        tokio::spawn(async move {
            let event = match fetcher.fetch_page(page, page_size).await {
                Ok(fetched) => Event::LoadSucceeded {
                    page,
                    page_size,
                    items: fetched.items,
                    total_count: fetched.total_count,
                },
                Err(error) => {
                    warn!("fetch for page {page} failed: {error}");
                    Event::LoadFailed {
                        page,
                        page_size,
                        message: error.to_string(),
                    }
                }
            };

            {
                let mut state = shared.state.write().await;
                reduce(&mut state, event);
            }
            shared.in_flight.lock().await.remove(&(page, page_size));
            shared.resolved.notify_waiters();
        });
    }

    /// Wait until no fetch is outstanding
    ///
    /// The synchronization point for hosts without a reactive re-render
    /// loop: await this, then read.
    pub async fn settled(&self) {
        loop {
            let notified = self.shared.resolved.notified();
            tokio::pin!(notified);
            // Arm before checking, so a resolution in between is not missed
            notified.as_mut().enable();
            if self.shared.in_flight.lock().await.is_empty() {
                return;
            }
            notified.await;
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Page currently selected
    pub async fn current_page(&self) -> u32 {
        self.shared.state.read().await.current_page()
    }

    /// Requested page size
    pub async fn max_per_page(&self) -> u32 {
        self.shared.state.read().await.max_per_page()
    }

    /// Total item count reported by the most recent successful fetch
    pub async fn total_count(&self) -> u64 {
        self.shared.state.read().await.total_count()
    }

    /// Number of pages the collection spans at the current page size
    pub async fn total_pages(&self) -> u64 {
        self.shared.state.read().await.total_pages()
    }

    /// Lifecycle of the most recent fetch attempt
    pub async fn status(&self) -> LoadStatus {
        self.shared.state.read().await.status()
    }

    /// Human-readable status detail
    pub async fn status_message(&self) -> Option<String> {
        self.shared
            .state
            .read()
            .await
            .status_message()
            .map(ToString::to_string)
    }

    /// Check if a page follows the current one
    pub async fn has_next_page(&self) -> bool {
        self.shared.state.read().await.has_next_page()
    }

    /// Check if a page precedes the current one
    pub async fn has_previous_page(&self) -> bool {
        self.shared.state.read().await.has_previous_page()
    }
}

impl<T: Clone + Send + Sync + 'static> PageController<T> {
    /// Items for the current page; empty until fetched
    pub async fn current_page_items(&self) -> Vec<T> {
        self.shared.state.read().await.current_page_items().to_vec()
    }

    /// Cached items for a page, if fetched
    pub async fn page_items(&self, page: u32) -> Option<Vec<T>> {
        self.shared
            .state
            .read()
            .await
            .page_items(page)
            .map(<[T]>::to_vec)
    }

    /// Snapshot everything a UI needs to render
    pub async fn snapshot(&self) -> PageView<T> {
        self.shared.state.read().await.view()
    }
}
