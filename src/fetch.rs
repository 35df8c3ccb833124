//! The page fetch boundary
//!
//! `PageFetcher` is the sole I/O seam of the crate: the controller hands it
//! a page number and page size, and gets back the page items plus the total
//! item count. Transport, timeouts and retries are the implementation's
//! concern, not the controller's.

use crate::error::Result;
use crate::types::FetchedPage;
use async_trait::async_trait;
use std::future::Future;

/// Fetches one page of items by page number and page size
///
/// `page` is 1-indexed. Implementations may be called with a `page_size` of
/// zero when the controller was configured that way; what that means is up
/// to the backend.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    /// Fetch the given page
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<FetchedPage<T>>;
}

/// Plain async closures work as fetchers:
/// `|page, page_size| async move { ... }`
#[async_trait]
impl<T, F, Fut> PageFetcher<T> for F
where
    F: Fn(u32, u32) -> Fut + Send + Sync,
    Fut: Future<Output = Result<FetchedPage<T>>> + Send,
{
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<FetchedPage<T>> {
        (self)(page, page_size).await
    }
}
