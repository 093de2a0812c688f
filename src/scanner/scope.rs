//! Resolve year/month selectors into the directories to traverse.
//!
//! The share is laid out as `<root>/<year>/<month folder>/...`. Selectors
//! narrow traversal strictly along that hierarchy with no fallback: a root
//! lacking the requested year contributes nothing.

use std::path::{Component, Path, PathBuf};

use super::filter::{Month, SearchFilter};
use super::listing::{DirListing, EntryKind, list_dir};

/// Directories to walk for the given selectors.
///
/// - no selectors: every root that exists
/// - year: `<root>/<year>` where it is a real directory (not a link)
/// - month: children of `<root>` whose name contains the month
/// - both: children of `<root>/<year>` whose name contains the month
///
/// An empty result means "no results", never an error.
#[must_use]
pub fn effective_roots(
    roots: &[PathBuf],
    year: Option<&str>,
    month: Option<Month>,
) -> Vec<PathBuf> {
    let resolved: Vec<PathBuf> = match (year, month) {
        (None, None) => roots.iter().filter(|r| r.exists()).cloned().collect(),
        (Some(year), None) => year_dirs(roots, year).collect(),
        (None, Some(month)) => roots.iter().flat_map(|r| month_dirs(r, month)).collect(),
        (Some(year), Some(month)) => year_dirs(roots, year)
            .flat_map(|dir| month_dirs(&dir, month))
            .collect(),
    };

    tracing::debug!(
        year = year.unwrap_or("-"),
        month = month.map_or("-", Month::as_str),
        count = resolved.len(),
        "resolved effective roots"
    );
    resolved
}

/// Effective roots for a filter's year and month.
#[must_use]
pub fn effective_roots_for(roots: &[PathBuf], filter: &SearchFilter) -> Vec<PathBuf> {
    effective_roots(roots, filter.year.as_deref(), filter.month)
}

fn year_dirs<'a>(roots: &'a [PathBuf], year: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
    let roots: &[PathBuf] = if is_single_component(year) { roots } else { &[] };
    roots
        .iter()
        .map(move |root| root.join(year))
        .filter(|dir| is_real_dir(dir))
}

fn is_real_dir(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok_and(|meta| meta.is_dir())
}

fn month_dirs(parent: &Path, month: Month) -> Vec<PathBuf> {
    match list_dir(parent) {
        DirListing::Entries(entries) => entries
            .into_iter()
            .filter(|e| e.kind == EntryKind::Folder && month.matches_segment(&e.name))
            .map(|e| e.path)
            .collect(),
        DirListing::Skipped(reason) => {
            tracing::debug!(path = %parent.display(), %reason, "skipping directory");
            Vec::new()
        }
    }
}

/// A year selector must name one folder; separators or `..` would step
/// outside the year level of the hierarchy.
fn is_single_component(text: &str) -> bool {
    let mut components = Path::new(text).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !text.contains(['/', '\\'])
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
