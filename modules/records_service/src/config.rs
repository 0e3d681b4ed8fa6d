//! Configuration for the records service module

use serde::{Deserialize, Serialize};

/// Records service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Page size applied when a list request omits `limit`
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,

    /// Largest `limit` a list request may ask for
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_page_size() -> u64 {
    50
}

fn default_max_page_size() -> u64 {
    100
}
