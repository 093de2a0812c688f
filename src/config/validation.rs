//! Configuration semantic validation.
//!
//! Checks that parsed values are usable together: category names are
//! distinct and page and batch limits are positive and ordered.

use std::collections::HashSet;

use crate::config::Config;
use crate::{DocFinderError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if `parent_order` is empty or has blank or duplicate
/// names, or if any page or batch limit is zero or inconsistent.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_parent_order(&config.parent_order)?;
    validate_search_section(config)?;
    validate_report_section(config)?;
    Ok(())
}

fn validate_parent_order(parent_order: &[String]) -> Result<()> {
    if parent_order.is_empty() {
        return Err(DocFinderError::Config(
            "parent_order must list at least one category".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for (i, parent) in parent_order.iter().enumerate() {
        if parent.trim().is_empty() {
            return Err(DocFinderError::Config(format!(
                "parent_order[{i}] must not be blank"
            )));
        }
        if !seen.insert(parent.to_lowercase()) {
            return Err(DocFinderError::Config(format!(
                "parent_order contains duplicate category '{parent}'"
            )));
        }
    }
    Ok(())
}

fn validate_search_section(config: &Config) -> Result<()> {
    let search = &config.search;
    if search.default_page_size == 0 {
        return Err(DocFinderError::Config(
            "search.default_page_size must be at least 1".to_string(),
        ));
    }
    if search.max_page_size < search.default_page_size {
        return Err(DocFinderError::Config(format!(
            "search.max_page_size ({}) must not be less than search.default_page_size ({})",
            search.max_page_size, search.default_page_size
        )));
    }
    Ok(())
}

fn validate_report_section(config: &Config) -> Result<()> {
    if config.report.max_items_per_parent == 0 {
        return Err(DocFinderError::Config(
            "report.max_items_per_parent must be at least 1".to_string(),
        ));
    }
    if config.report.multi_code_limit == 0 {
        return Err(DocFinderError::Config(
            "report.multi_code_limit must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
