//! Entry point for callers: one engine per loaded configuration.
//!
//! The engine owns nothing mutable. Each call resolves its scope, walks the
//! filesystem afresh and returns a new result, so one engine can serve
//! concurrent callers from multiple threads.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{DocFinderError, Result};
use crate::guard::PathGuard;
use crate::report::{self, MonthlyCoverageResult, MultiCodeResult, ParentCoverageRow};
use crate::scanner::{
    DirListing, MatchRecord, Page, PageRequest, SearchFilter, SkipReason, contains_ci,
    effective_roots_for, list_dir, paginate, sort_records, walk,
};

pub struct Engine<'a> {
    config: &'a Config,
    guard: PathGuard,
    roots: Vec<PathBuf>,
}

impl<'a> Engine<'a> {
    /// Build an engine over the configured roots. Roots the guard cannot
    /// authorize (malformed paths) are left out of every walk.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        let guard = PathGuard::new(&config.roots);
        let roots = config
            .roots
            .iter()
            .filter(|root| {
                let allowed = guard.is_allowed(root);
                if !allowed {
                    tracing::warn!(root = %root.display(), "ignoring unusable root");
                }
                allowed
            })
            .cloned()
            .collect();

        Self {
            config,
            guard,
            roots,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        self.config
    }

    #[must_use]
    pub const fn guard(&self) -> &PathGuard {
        &self.guard
    }

    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Pagination for a search, falling back to the configured page size.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the page or page size is out of range.
    pub fn page_request(&self, page: usize, page_size: Option<usize>) -> Result<PageRequest> {
        let search = &self.config.search;
        PageRequest::new(
            page,
            page_size.unwrap_or(search.default_page_size),
            search.max_page_size,
        )
    }

    /// Baseline search: every matching file and folder, sorted and paged.
    #[must_use]
    pub fn search(&self, filter: &SearchFilter, request: PageRequest) -> Page<MatchRecord> {
        paginate(walk(&self.scope(filter), filter), request)
    }

    /// Category coverage for a query, one row per configured category.
    #[must_use]
    pub fn coverage(
        &self,
        filter: &SearchFilter,
        max_items: Option<usize>,
    ) -> Vec<ParentCoverageRow> {
        report::coverage_in(
            &self.scope(filter),
            filter,
            &self.config.parent_order,
            self.max_items(max_items),
        )
    }

    /// Available and missing categories for a year/month period.
    #[must_use]
    pub fn monthly(&self, filter: &SearchFilter, max_items: Option<usize>) -> MonthlyCoverageResult {
        report::monthly_in(
            &self.scope(filter),
            filter,
            &self.config.parent_order,
            self.max_items(max_items),
        )
    }

    /// Missing-category report for a batch of shipment codes. A caller limit
    /// can lower the configured batch cap but never raise it.
    #[must_use]
    pub fn missing_report<S: AsRef<str>>(
        &self,
        codes: &[S],
        filter: &SearchFilter,
        limit: Option<usize>,
    ) -> MultiCodeResult {
        report::report_in(
            &self.scope(filter),
            codes,
            filter,
            &self.config.parent_order,
            self.batch_limit(limit),
        )
    }

    /// Effective cap on codes per missing-folder report.
    #[must_use]
    pub fn batch_limit(&self, requested: Option<usize>) -> usize {
        let cap = self.config.report.multi_code_limit;
        requested.map_or(cap, |limit| limit.min(cap))
    }

    /// Immediate children of a caller-supplied folder, optionally filtered by
    /// name, in result order.
    ///
    /// # Errors
    /// Returns `NotAllowed` for paths outside the roots, `NotFound` if the
    /// folder does not exist or is not a directory, and `FileAccess` if it
    /// cannot be read.
    pub fn browse(&self, path: &Path, name_filter: Option<&str>) -> Result<Vec<MatchRecord>> {
        let folder = self.guard.authorize(path)?;

        let entries = match list_dir(&folder) {
            DirListing::Entries(entries) => entries,
            DirListing::Skipped(SkipReason::NotFound | SkipReason::NotADirectory) => {
                return Err(DocFinderError::NotFound { path: folder });
            }
            DirListing::Skipped(reason) => {
                let kind = match reason {
                    SkipReason::PermissionDenied => io::ErrorKind::PermissionDenied,
                    _ => io::ErrorKind::Other,
                };
                return Err(DocFinderError::FileAccess {
                    path: folder,
                    source: io::Error::new(kind, reason.to_string()),
                });
            }
        };

        let needle = name_filter.unwrap_or("").trim();
        let mut items: Vec<MatchRecord> = entries
            .into_iter()
            .filter(|entry| contains_ci(&entry.name, needle))
            .map(|entry| MatchRecord::new(entry.kind, &entry.path))
            .collect();
        sort_records(&mut items);
        Ok(items)
    }

    /// Effective roots for `filter` that still resolve inside an allowed
    /// root. Nothing outside the guard is ever walked.
    fn scope(&self, filter: &SearchFilter) -> Vec<PathBuf> {
        effective_roots_for(&self.roots, filter)
            .into_iter()
            .filter(|dir| {
                let allowed = self.guard.is_allowed(dir);
                if !allowed {
                    tracing::warn!(path = %dir.display(), "scope resolves outside the allowed roots");
                }
                allowed
            })
            .collect()
    }

    fn max_items(&self, requested: Option<usize>) -> usize {
        requested
            .filter(|n| *n > 0)
            .unwrap_or(self.config.report.max_items_per_parent)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
