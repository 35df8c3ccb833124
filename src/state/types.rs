//! Pagination state and derived views

use crate::config::ControllerConfig;
use crate::types::LoadStatus;
use serde::Serialize;
use std::collections::HashMap;

/// Compute the number of pages a collection spans
///
/// A page size of zero means no pages are computable and reports zero.
pub fn total_pages(total_count: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        0
    } else {
        total_count.div_ceil(u64::from(page_size))
    }
}

/// The full pagination state for one controller instance
///
/// Mutated exclusively through [`reduce`](super::reduce); everything else
/// only reads it. Derived values (`total_pages`, navigation validity) are
/// computed fresh on every read so they always reflect the latest
/// `total_count` / `max_per_page` pair.
#[derive(Debug, Clone)]
pub struct PageState<T> {
    /// Page currently selected (1-indexed)
    pub(crate) current_page: u32,
    /// Requested page size
    pub(crate) max_per_page: u32,
    /// Fetched pages, keyed by page number; at most one entry with caching off
    pub(crate) content: HashMap<u32, Vec<T>>,
    /// Total item count from the most recent successful fetch
    pub(crate) total_count: u64,
    /// Lifecycle of the most recent fetch attempt
    pub(crate) status: LoadStatus,
    /// Human-readable status detail
    pub(crate) status_message: Option<String>,
    /// Whether fetched pages are retained and reused
    pub(crate) caching: bool,
}

impl<T> PageState<T> {
    /// Create state seeded from configuration
    ///
    /// The initial status is `Loading`: a fetch for the starting page is
    /// always scheduled at startup. `default_page` is clamped to at least 1.
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            current_page: config.default_page.max(1),
            max_per_page: config.max_per_page,
            content: HashMap::new(),
            total_count: 0,
            status: LoadStatus::Loading,
            status_message: Some("Loading".to_string()),
            caching: config.caching,
        }
    }

    /// Page currently selected
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Requested page size
    pub fn max_per_page(&self) -> u32 {
        self.max_per_page
    }

    /// Total item count reported by the most recent successful fetch
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Lifecycle of the most recent fetch attempt
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Human-readable status detail
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Whether fetched pages are retained and reused
    pub fn caching(&self) -> bool {
        self.caching
    }

    /// Cached items for a page, if fetched
    pub fn page_items(&self, page: u32) -> Option<&[T]> {
        self.content.get(&page).map(Vec::as_slice)
    }

    /// Items for the current page; empty until fetched
    pub fn current_page_items(&self) -> &[T] {
        self.page_items(self.current_page).unwrap_or(&[])
    }

    /// Number of pages the collection spans at the current page size
    pub fn total_pages(&self) -> u64 {
        total_pages(self.total_count, self.max_per_page)
    }

    /// Check if `page` is a valid navigation target
    pub fn is_page_in_range(&self, page: u32) -> bool {
        page >= 1 && u64::from(page) <= self.total_pages()
    }

    /// Check if a page follows the current one
    pub fn has_next_page(&self) -> bool {
        u64::from(self.current_page) + 1 <= self.total_pages()
    }

    /// Check if a page precedes the current one
    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }
}

impl<T: Clone> PageState<T> {
    /// Snapshot everything a UI needs to render this state
    pub fn view(&self) -> PageView<T> {
        PageView {
            current_page: self.current_page,
            items: self.current_page_items().to_vec(),
            max_per_page: self.max_per_page,
            total_count: self.total_count,
            total_pages: self.total_pages(),
            status: self.status,
            status_message: self.status_message.clone(),
        }
    }
}

/// Read model handed to UI components
///
/// A detached snapshot; it does not observe later state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView<T> {
    /// Page currently selected
    pub current_page: u32,
    /// Items on the current page; empty until fetched
    pub items: Vec<T>,
    /// Requested page size
    pub max_per_page: u32,
    /// Total item count across all pages
    pub total_count: u64,
    /// Number of pages at the current page size
    pub total_pages: u64,
    /// Lifecycle of the most recent fetch attempt
    pub status: LoadStatus,
    /// Human-readable status detail
    pub status_message: Option<String>,
}
