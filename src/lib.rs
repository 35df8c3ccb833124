//! # Pageflow
//!
//! A minimal, Rust-native pagination controller for paged data views.
//! Hand it an async function that fetches one page of items and it manages
//! everything a UI needs around it: current page, per-page cache, total
//! counts, and the loading lifecycle.
//!
//! ## Features
//!
//! - **Any backend**: the fetch boundary is a trait; plain async closures
//!   qualify
//! - **Page caching**: visited pages are served from memory, or refetched
//!   on every navigation when caching is off
//! - **Safe arithmetic**: derived page counts, boundary-clamped navigation,
//!   zero page size handled as "no pages"
//! - **Race-proof resolutions**: fetches that outlive a navigation or page
//!   size change can never mis-file their results
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pageflow::{ControllerConfig, FetchedPage, PageController};
//!
//! #[tokio::main]
//! async fn main() {
//!     let controller = PageController::new(
//!         ControllerConfig::new().with_max_per_page(25),
//!         |page, page_size| async move {
//!             let body = api::list_users(page, page_size).await?;
//!             Ok(FetchedPage::new(body.users, body.total))
//!         },
//!     );
//!
//!     // The first page is already being fetched
//!     controller.settled().await;
//!     let view = controller.snapshot().await;
//!     render(&view.items, view.current_page, view.total_pages);
//!
//!     controller.next_page().await;
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       PageController                        │
//! │  change_page  next_page  previous_page  change_max_per_page │
//! │  snapshot() → PageView          settled() → fetches quiet   │
//! └───────────────────────────────┬─────────────────────────────┘
//!                                 │ events / settle
//! ┌──────────────┬────────────────┴───────────┬─────────────────┐
//! │    policy    │           state            │      fetch      │
//! ├──────────────┼────────────────────────────┼─────────────────┤
//! │ should_fetch │ PageState · Event · reduce │ PageFetcher     │
//! │ _page        │ total_pages · PageView     │ FetchedPage     │
//! └──────────────┴────────────────────────────┴─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Controller configuration
pub mod config;

/// The pagination controller
pub mod controller;

/// Error types
pub mod error;

/// The page fetch boundary
pub mod fetch;

/// Fetch decision policy
pub mod policy;

/// Pagination state and its transition function
pub mod state;

/// Common types
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ControllerConfig;
pub use controller::PageController;
pub use error::{Error, Result};
pub use fetch::PageFetcher;
pub use policy::should_fetch_page;
pub use state::{reduce, total_pages, Event, PageState, PageView};
pub use types::{FetchedPage, LoadStatus};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
