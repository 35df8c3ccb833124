//! The state transition function
//!
//! `reduce` is the only place `PageState` is mutated. It performs no I/O;
//! the controller turns fetch resolutions into events and feeds them back
//! here. Fetch resolution events carry the `(page, page_size)` they were
//! issued with, so a response that outlived its navigation can never
//! mis-attach items or status to the wrong page.

use super::types::PageState;
use crate::policy::should_fetch_page;
use crate::types::LoadStatus;
use tracing::{debug, warn};

/// Events dispatched into [`reduce`]
#[derive(Debug, Clone)]
pub enum Event<T> {
    /// Navigation to a page; bounds are checked by the controller, not here
    PageChanged {
        /// Target page (1-indexed)
        page: u32,
    },

    /// The requested page size changed; cached page boundaries are void
    PageSizeChanged {
        /// New page size
        size: u32,
    },

    /// A fetch resolved with one page of items
    LoadSucceeded {
        /// Page the fetch was issued for
        page: u32,
        /// Page size the fetch was issued with
        page_size: u32,
        /// Items on the page
        items: Vec<T>,
        /// Total item count across all pages
        total_count: u64,
    },

    /// A fetch was rejected
    LoadFailed {
        /// Page the fetch was issued for
        page: u32,
        /// Page size the fetch was issued with
        page_size: u32,
        /// Stringified fetch error
        message: String,
    },
}

/// Apply one event to the state
pub fn reduce<T>(state: &mut PageState<T>, event: Event<T>) {
    match event {
        Event::PageChanged { page } => {
            let needs_fetch = should_fetch_page(
                state.caching,
                state.content.contains_key(&page),
                state.status,
            );
            state.current_page = page;
            if needs_fetch {
                state.status = LoadStatus::Loading;
                state.status_message = Some("Loading".to_string());
            }
        }

        Event::PageSizeChanged { size } => {
            // Cached pages no longer correspond to the same item ranges
            state.content.clear();
            state.max_per_page = size;
        }

        Event::LoadSucceeded {
            page,
            page_size,
            items,
            total_count,
        } => {
            // The count is independent of page boundaries, so even a stale
            // resolution carries fresh server truth here
            state.total_count = total_count;

            if page_size != state.max_per_page {
                warn!("dropping page {page}: fetched with stale page size {page_size}");
                return;
            }

            if state.caching {
                state.content.insert(page, items);
            } else if page == state.current_page {
                state.content.clear();
                state.content.insert(page, items);
            } else {
                debug!(
                    "dropping page {page}: resolved after navigating to {}",
                    state.current_page
                );
            }

            if page == state.current_page {
                state.status = LoadStatus::Success;
                state.status_message = Some("Loaded".to_string());
            }
        }

        Event::LoadFailed {
            page,
            page_size,
            message,
        } => {
            if page != state.current_page || page_size != state.max_per_page {
                debug!("ignoring failure of abandoned fetch for page {page}");
                return;
            }
            state.status = LoadStatus::Failed;
            state.status_message = Some(message);
        }
    }
}
