//! Match predicates for single files and folders.
//!
//! All comparisons are case-insensitive substring tests. `year` and `company`
//! are tested against the whole path; `month` against individual directory
//! segments. When a month filter is present the year test is skipped, since
//! month scoping has already narrowed traversal to folders under the year.

use super::filter::SearchFilter;

/// True if a file satisfies the filter. The query is tested against the file
/// name; the month against the directories above the file.
#[must_use]
pub fn file_matches(name: &str, full_path: &str, filter: &SearchFilter) -> bool {
    contains_ci(name, &filter.query)
        && path_filters_pass(full_path, &directory_segments(full_path), filter)
}

/// True if a folder satisfies the filter. The query is tested against the
/// folder's own name; every path segment (including the folder) counts for
/// the month test.
#[must_use]
pub fn folder_matches(name: &str, full_path: &str, filter: &SearchFilter) -> bool {
    contains_ci(name, &filter.query)
        && path_filters_pass(full_path, &path_segments(full_path), filter)
}

/// File predicate used for coverage attribution: the query may match the file
/// name or any directory above it, so files inside a shipment-code folder
/// count towards that code.
#[must_use]
pub fn file_matches_in_subtree(name: &str, full_path: &str, filter: &SearchFilter) -> bool {
    let dirs = directory_segments(full_path);
    let query_hit = contains_ci(name, &filter.query)
        || dirs.iter().any(|segment| contains_ci(segment, &filter.query));
    query_hit && path_filters_pass(full_path, &dirs, filter)
}

/// Non-empty segments of a path, splitting on both separator styles.
#[must_use]
pub fn path_segments(full_path: &str) -> Vec<&str> {
    full_path
        .split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .collect()
}

/// Path segments without the final (file name) segment.
#[must_use]
pub fn directory_segments(full_path: &str) -> Vec<&str> {
    let mut segments = path_segments(full_path);
    segments.pop();
    segments
}

fn path_filters_pass(full_path: &str, dirs: &[&str], filter: &SearchFilter) -> bool {
    if let Some(company) = &filter.company
        && !contains_ci(full_path, company)
    {
        return false;
    }

    if let Some(year) = &filter.year
        && filter.month.is_none()
        && !contains_ci(full_path, year)
    {
        return false;
    }

    filter
        .month
        .is_none_or(|month| dirs.iter().any(|segment| month.matches_segment(segment)))
}

/// Case-insensitive substring test; an empty needle always matches.
#[must_use]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
