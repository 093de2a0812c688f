use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const MAX_PAGE_SIZE: usize = 200;
pub const DEFAULT_MAX_ITEMS_PER_PARENT: usize = 20;
pub const DEFAULT_MULTI_CODE_LIMIT: usize = 50;

/// Document categories every shipment folder is expected to contain.
pub const DEFAULT_PARENT_ORDER: &[&str] = &["CIPL", "BL", "POD"];

/// Static configuration, loaded once at startup and passed by reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Allowed root directories. These are both the authorization boundary
    /// and the starting points of every search.
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// Ordered, unique category folder names used by every report.
    #[serde(default = "default_parent_order")]
    pub parent_order: Vec<String>,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            parent_order: default_parent_order(),
            search: SearchConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Pagination limits for baseline search [search].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

/// Limits for coverage reports [report].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Items listed per category in coverage and monthly reports.
    #[serde(default = "default_max_items_per_parent")]
    pub max_items_per_parent: usize,

    /// Maximum number of codes processed by one missing-folder report.
    #[serde(default = "default_multi_code_limit")]
    pub multi_code_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_items_per_parent: DEFAULT_MAX_ITEMS_PER_PARENT,
            multi_code_limit: DEFAULT_MULTI_CODE_LIMIT,
        }
    }
}

fn default_parent_order() -> Vec<String> {
    DEFAULT_PARENT_ORDER.iter().map(|s| (*s).to_string()).collect()
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

const fn default_max_page_size() -> usize {
    MAX_PAGE_SIZE
}

const fn default_max_items_per_parent() -> usize {
    DEFAULT_MAX_ITEMS_PER_PARENT
}

const fn default_multi_code_limit() -> usize {
    DEFAULT_MULTI_CODE_LIMIT
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
