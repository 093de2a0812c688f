use std::path::PathBuf;

use crate::scanner::{
    EntryKind, MatchRecord, Month, SearchFilter, TreeWalk, WalkEvent, effective_roots_for,
    file_matches, sort_by_name,
};

use super::attribute;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyPeriod {
    pub year: Option<String>,
    pub month: Option<Month>,
}

/// A category with at least one document in the period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableCategory {
    pub parent: String,
    pub count: usize,
    pub items: Vec<MatchRecord>,
}

/// Partition of the configured categories for one period. Every category is
/// in exactly one of `available` and `missing`, each list keeping the
/// configured order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyCoverageResult {
    pub period: MonthlyPeriod,
    pub available: Vec<AvailableCategory>,
    pub missing: Vec<String>,
}

impl MonthlyCoverageResult {
    #[must_use]
    pub fn total_documents(&self) -> usize {
        self.available.iter().map(|a| a.count).sum()
    }
}

/// Which categories have documents in the year/month scope of `filter`.
///
/// Only files are counted. Any query on `filter` is ignored.
#[must_use]
pub fn monthly(
    roots: &[PathBuf],
    filter: &SearchFilter,
    parent_order: &[String],
    max_items_per_parent: usize,
) -> MonthlyCoverageResult {
    monthly_in(
        &effective_roots_for(roots, filter),
        filter,
        parent_order,
        max_items_per_parent,
    )
}

/// [`monthly`] over an already resolved scope.
#[must_use]
pub fn monthly_in(
    scope: &[PathBuf],
    filter: &SearchFilter,
    parent_order: &[String],
    max_items_per_parent: usize,
) -> MonthlyCoverageResult {
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
) -> MonthlyCoverageResult
where
    I: IntoIterator<Item = WalkEvent>,
{
    let filter = filter.without_query();
    let mut buckets: Vec<Vec<MatchRecord>> = vec![Vec::new(); parent_order.len()];

    for event in events {
        match event {
            WalkEvent::File(path) => {
                let record = MatchRecord::new(EntryKind::File, &path);
                if !file_matches(&record.name, &record.full_path, &filter) {
                    continue;
                }
                if let Some(index) = attribute(&record, parent_order) {
                    buckets[index].push(record);
                }
            }
            WalkEvent::Folder(_) => {}
            WalkEvent::Skipped { path, reason } => {
                tracing::debug!(path = %path.display(), %reason, "skipping directory");
            }
        }
    }

    let mut available = Vec::new();
    let mut missing = Vec::new();
    for (parent, mut items) in parent_order.iter().zip(buckets) {
        if items.is_empty() {
            missing.push(parent.clone());
            continue;
        }
        sort_by_name(&mut items);
        let count = items.len();
        items.truncate(max_items_per_parent);
        available.push(AvailableCategory {
            parent: parent.clone(),
            count,
            items,
        });
    }

    tracing::info!(
        year = filter.year.as_deref().unwrap_or("-"),
        month = filter.month.map_or("-", Month::as_str),
        available = available.len(),
        missing = missing.len(),
        "monthly coverage computed"
    );

    MonthlyCoverageResult {
        period: MonthlyPeriod {
            year: filter.year.clone(),
            month: filter.month,
        },
        available,
        missing,
    }
}

#[cfg(test)]
#[path = "monthly_tests.rs"]
mod tests;
