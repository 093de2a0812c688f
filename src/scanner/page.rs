use crate::error::{DocFinderError, Result};

/// A contiguous slice of a sorted result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub items: Vec<T>,
}

/// Validated pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    /// # Errors
    /// Returns `InvalidArgument` if `page` is 0 or `page_size` is outside
    /// `1..=max_page_size`.
    pub fn new(page: usize, page_size: usize, max_page_size: usize) -> Result<Self> {
        if page == 0 {
            return Err(DocFinderError::InvalidArgument(
                "page must be at least 1".to_string(),
            ));
        }
        if page_size == 0 || page_size > max_page_size {
            return Err(DocFinderError::InvalidArgument(format!(
                "page_size must be between 1 and {max_page_size}, got {page_size}"
            )));
        }
        Ok(Self { page, page_size })
    }
}

/// Slice `items` into the requested page. `total_pages` is at least 1, so an
/// empty list is a single empty page; pages past the end are empty.
#[must_use]
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let PageRequest { page, page_size } = request;
    let count = items.len();
    let start = page.saturating_sub(1).saturating_mul(page_size);

    Page {
        count,
        page,
        page_size,
        total_pages: count.div_ceil(page_size).max(1),
        items: items.into_iter().skip(start).take(page_size).collect(),
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
