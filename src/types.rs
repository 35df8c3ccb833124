//! Common types shared across pageflow modules

use serde::{Deserialize, Serialize};

// ============================================================================
// Load Status
// ============================================================================

/// Lifecycle of the most recent fetch attempt for the current page
///
/// `Loading` whenever a fetch is outstanding for the current page; `Failed`
/// is recoverable: the next navigation that needs a fetch moves back to
/// `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoadStatus {
    /// A fetch is outstanding for the current page
    #[default]
    Loading,
    /// The most recent fetch completed
    Success,
    /// The most recent fetch was rejected
    Failed,
}

impl LoadStatus {
    /// Check if a fetch is outstanding
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if the most recent fetch completed
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Check if the most recent fetch was rejected
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

// ============================================================================
// Fetched Page
// ============================================================================

/// One page of items as returned by a [`PageFetcher`](crate::fetch::PageFetcher)
///
/// Shaped so that typical list-endpoint payloads deserialize straight into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedPage<T> {
    /// Items on this page
    pub items: Vec<T>,

    /// Total item count across all pages
    #[serde(default)]
    pub total_count: u64,
}

impl<T> FetchedPage<T> {
    /// Create a fetched page
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }

    /// Create an empty page reporting zero items overall
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}
