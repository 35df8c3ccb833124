//! Pagination state and its transition function
//!
//! # Overview
//!
//! - `PageState` - the single state entity, owned by the controller
//! - `Event` / `reduce` - the transition function; all mutation goes
//!   through it, which is what keeps the state machine testable without
//!   mocking any I/O
//! - `PageView` - one-shot read model handed to UIs
//! - `total_pages` - derived page arithmetic, never stored

mod reducer;
mod types;

pub use reducer::{reduce, Event};
pub use types::{total_pages, PageState, PageView};
