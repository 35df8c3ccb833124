//! Controller configuration
//!
//! A `ControllerConfig` seeds the pagination state once at construction;
//! `caching` is fixed for the lifetime of the controller instance.

use serde::{Deserialize, Serialize};

/// Configuration for a [`PageController`](crate::controller::PageController)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Requested page size; 0 is valid and disables pagination math
    #[serde(default = "default_max_per_page")]
    pub max_per_page: u32,

    /// Whether previously fetched pages are retained in memory and reused
    #[serde(default = "default_caching")]
    pub caching: bool,

    /// Page selected at startup
    #[serde(default = "default_page")]
    pub default_page: u32,
}

fn default_max_per_page() -> u32 {
    10
}

fn default_caching() -> bool {
    true
}

fn default_page() -> u32 {
    1
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_per_page: default_max_per_page(),
            caching: default_caching(),
            default_page: default_page(),
        }
    }
}

impl ControllerConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn with_max_per_page(mut self, max_per_page: u32) -> Self {
        self.max_per_page = max_per_page;
        self
    }

    /// Enable or disable cache retention
    #[must_use]
    pub fn with_caching(mut self, caching: bool) -> Self {
        self.caching = caching;
        self
    }

    /// Set the page selected at startup
    #[must_use]
    pub fn with_default_page(mut self, default_page: u32) -> Self {
        self.default_page = default_page;
        self
    }
}
