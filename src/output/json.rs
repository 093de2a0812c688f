use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;
use crate::report::{
    AvailableCategory, CodeCoverage, MonthlyCoverageResult, MultiCodeResult, ParentCoverageRow,
};
use crate::scanner::{MatchRecord, Month, Page};

use super::{ReportFormatter, kind_label};

pub struct JsonFormatter;

#[derive(Serialize)]
struct RecordJson<'a> {
    kind: &'static str,
    file_name: &'a str,
    parent_folder: &'a str,
    full_path: &'a str,
}

#[derive(Serialize)]
struct SearchJson<'a> {
    count: usize,
    page: usize,
    page_size: usize,
    total_pages: usize,
    items: Vec<RecordJson<'a>>,
}

#[derive(Serialize)]
struct CoverageRowJson<'a> {
    parent: &'a str,
    present: bool,
    found: bool,
    count: usize,
    items: Vec<RecordJson<'a>>,
}

#[derive(Serialize)]
struct MonthlyJson<'a> {
    period: PeriodJson<'a>,
    available: Vec<AvailableJson<'a>>,
    missing: &'a [String],
}

#[derive(Serialize)]
struct PeriodJson<'a> {
    year: Option<&'a str>,
    month: Option<&'static str>,
}

#[derive(Serialize)]
struct AvailableJson<'a> {
    parent: &'a str,
    count: usize,
    items: Vec<RecordJson<'a>>,
}

#[derive(Serialize)]
struct MissingJson<'a> {
    results: Vec<CodeJson<'a>>,
    summary: SummaryJson<'a>,
    invalid: &'a [String],
    limit: usize,
}

#[derive(Serialize)]
struct CodeJson<'a> {
    code: &'a str,
    missing: &'a [String],
    found: &'a [String],
}

#[derive(Serialize)]
struct SummaryJson<'a> {
    missing_counts: &'a IndexMap<String, usize>,
}

#[derive(Serialize)]
struct BrowseJson<'a> {
    count: usize,
    items: Vec<RecordJson<'a>>,
}

impl ReportFormatter for JsonFormatter {
    fn format_search(&self, page: &Page<MatchRecord>) -> Result<String> {
        let output = SearchJson {
            count: page.count,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
            items: convert_records(&page.items),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_coverage(&self, rows: &[ParentCoverageRow]) -> Result<String> {
        let output: Vec<CoverageRowJson> = rows
            .iter()
            .map(|row| CoverageRowJson {
                parent: &row.parent,
                present: row.present,
                found: row.found,
                count: row.count,
                items: convert_records(&row.items),
            })
            .collect();
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_monthly(&self, result: &MonthlyCoverageResult) -> Result<String> {
        let output = MonthlyJson {
            period: PeriodJson {
                year: result.period.year.as_deref(),
                month: result.period.month.map(Month::as_str),
            },
            available: result.available.iter().map(convert_available).collect(),
            missing: &result.missing,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_missing(&self, result: &MultiCodeResult, limit: usize) -> Result<String> {
        let output = MissingJson {
            results: result.items.iter().map(convert_code).collect(),
            summary: SummaryJson {
                missing_counts: &result.summary.missing_counts,
            },
            invalid: &result.invalid,
            limit,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_browse(&self, items: &[MatchRecord]) -> Result<String> {
        let output = BrowseJson {
            count: items.len(),
            items: convert_records(items),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_records(records: &[MatchRecord]) -> Vec<RecordJson<'_>> {
    records
        .iter()
        .map(|record| RecordJson {
            kind: kind_label(record.kind),
            file_name: &record.name,
            parent_folder: &record.parent_folder,
            full_path: &record.full_path,
        })
        .collect()
}

fn convert_available(category: &AvailableCategory) -> AvailableJson<'_> {
    AvailableJson {
        parent: &category.parent,
        count: category.count,
        items: convert_records(&category.items),
    }
}

fn convert_code(coverage: &CodeCoverage) -> CodeJson<'_> {
    CodeJson {
        code: &coverage.code,
        missing: &coverage.missing,
        found: &coverage.found,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
