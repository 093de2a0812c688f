use std::path::PathBuf;

use crate::scanner::{
    EntryKind, MatchRecord, SearchFilter, TreeWalk, WalkEvent, effective_roots_for,
    file_matches_in_subtree, folder_matches, sort_records,
};

use super::{attribute, category_index};

/// Per-category summary for one query.
///
/// `present` records that a folder with the category's name exists anywhere in
/// scope, regardless of the query. `found`/`count`/`items` describe the
/// matches attributed to the category; `items` is capped, `count` is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentCoverageRow {
    pub parent: String,
    pub present: bool,
    pub found: bool,
    pub count: usize,
    pub items: Vec<MatchRecord>,
}

impl ParentCoverageRow {
    fn empty(parent: &str) -> Self {
        Self {
            parent: parent.to_string(),
            present: false,
            found: false,
            count: 0,
            items: Vec::new(),
        }
    }
}

/// Bucket the matches for `filter` into one row per entry of `parent_order`,
/// in that order.
///
/// Files match when the query appears in their name or in any folder above
/// them, so the documents inside a shipment folder count for its code.
#[must_use]
pub fn coverage(
    roots: &[PathBuf],
    filter: &SearchFilter,
    parent_order: &[String],
    max_items_per_parent: usize,
) -> Vec<ParentCoverageRow> {
    coverage_in(
        &effective_roots_for(roots, filter),
        filter,
        parent_order,
        max_items_per_parent,
    )
}

/// [`coverage`] over an already resolved scope.
#[must_use]
pub fn coverage_in(
    scope: &[PathBuf],
    filter: &SearchFilter,
    parent_order: &[String],
    max_items_per_parent: usize,
) -> Vec<ParentCoverageRow> {
    tally(
        TreeWalk::new(scope.iter().cloned()),
        filter,
        parent_order,
        max_items_per_parent,
    )
}

fn tally<I>(
    events: I,
    filter: &SearchFilter,
    parent_order: &[String],
    max_items_per_parent: usize,
) -> Vec<ParentCoverageRow>
where
    I: IntoIterator<Item = WalkEvent>,
{
    let mut rows: Vec<ParentCoverageRow> = parent_order
        .iter()
        .map(|p| ParentCoverageRow::empty(p))
        .collect();
    let mut matches = Vec::new();

    for event in events {
        match event {
            WalkEvent::Folder(path) => {
                let record = MatchRecord::new(EntryKind::Folder, &path);
                if let Some(index) = category_index(&record.name, parent_order) {
                    rows[index].present = true;
                }
                if folder_matches(&record.name, &record.full_path, filter) {
                    matches.push(record);
                }
            }
            WalkEvent::File(path) => {
                let record = MatchRecord::new(EntryKind::File, &path);
                if file_matches_in_subtree(&record.name, &record.full_path, filter) {
                    matches.push(record);
                }
            }
            WalkEvent::Skipped { path, reason } => {
                tracing::debug!(path = %path.display(), %reason, "skipping directory");
                // An unreadable category folder still exists.
                if reason.is_unreadable()
                    && let Some(name) = path.file_name()
                    && let Some(index) = category_index(&name.to_string_lossy(), parent_order)
                {
                    rows[index].present = true;
                }
            }
        }
    }

    sort_records(&mut matches);
    for record in matches {
        let Some(index) = attribute(&record, parent_order) else {
            continue;
        };
        let row = &mut rows[index];
        row.found = true;
        row.count += 1;
        if row.items.len() < max_items_per_parent {
            row.items.push(record);
        }
    }

    tracing::info!(
        query = %filter.query,
        found = rows.iter().filter(|r| r.found).count(),
        categories = rows.len(),
        "coverage computed"
    );
    rows
}

#[cfg(test)]
#[path = "coverage_tests.rs"]
mod tests;
