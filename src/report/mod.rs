//! Aggregation of walk results into fixed category reports.
//!
//! Every report is keyed by the configured parent order: an ordered list of
//! document category folder names (e.g. `CIPL`, `BL`, `POD`) that each
//! shipment is expected to contain.

mod coverage;
mod monthly;
mod multi_code;

pub use coverage::{ParentCoverageRow, coverage, coverage_in};
pub use monthly::{AvailableCategory, MonthlyCoverageResult, MonthlyPeriod, monthly, monthly_in};
pub use multi_code::{
    CodeCoverage, MissingSummary, MultiCodeResult, NormalizedCodes, normalize_code,
    normalize_codes, report, report_in, split_codes,
};

use crate::scanner::{EntryKind, MatchRecord, directory_segments, path_segments};

/// Index into `parent_order` of the category whose name equals `name`,
/// ignoring case.
#[must_use]
pub fn category_index(name: &str, parent_order: &[String]) -> Option<usize> {
    let name = name.to_lowercase();
    parent_order
        .iter()
        .position(|parent| parent.to_lowercase() == name)
}

/// The category a record belongs to: the nearest enclosing directory whose
/// name is a configured category. A folder counts as its own nearest
/// directory.
#[must_use]
pub fn attribute(record: &MatchRecord, parent_order: &[String]) -> Option<usize> {
    let segments = match record.kind {
        EntryKind::Folder => path_segments(&record.full_path),
        EntryKind::File => directory_segments(&record.full_path),
    };
    segments
        .iter()
        .rev()
        .find_map(|segment| category_index(segment, parent_order))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
