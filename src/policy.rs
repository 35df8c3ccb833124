//! Fetch decision policy
//!
//! Decides whether the target page's content is trustworthy enough to
//! display without issuing a new fetch. Pure and side-effect-free; the
//! controller acts on the answer, this module never does.

use crate::types::LoadStatus;

/// Decide whether a page needs fetching
///
/// `cached` says whether content for the target page is already present.
/// With caching enabled the cache entry alone decides. With caching
/// disabled, present content is only served while no fetch is outstanding,
/// so navigating while loading still re-fetches.
pub fn should_fetch_page(caching: bool, cached: bool, status: LoadStatus) -> bool {
    // Caching on: fetch exactly the pages we have never seen
    if caching && !cached {
        return true;
    }
    if caching && cached {
        return false;
    }
    // Caching off: a no-cache page is never fresh, except between fetches
    if cached && !status.is_loading() {
        return false;
    }
    true
}
