use std::path::PathBuf;
use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};
use regex::Regex;

use crate::scanner::{SearchFilter, effective_roots_for};

use super::coverage_in;

/// `EXP-192`, `exp192`, `Exp 192` or bare `192`.
static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: the pattern is a literal
    Regex::new(r"(?i)^(?:EXP[ -]?)?([0-9]+)$").expect("valid code pattern")
});

/// Which categories one shipment code has and lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeCoverage {
    pub code: String,
    pub missing: Vec<String>,
    pub found: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MissingSummary {
    /// Number of processed codes missing each category, in configured order.
    pub missing_counts: IndexMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiCodeResult {
    pub items: Vec<CodeCoverage>,
    pub summary: MissingSummary,
    pub invalid: Vec<String>,
}

/// Canonical, deduplicated codes plus the inputs that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedCodes {
    pub codes: Vec<String>,
    pub invalid: Vec<String>,
}

/// Canonicalize a shipment code to `EXP-<digits>`.
#[must_use]
pub fn normalize_code(input: &str) -> Option<String> {
    CODE_PATTERN
        .captures(input.trim())
        .map(|caps| format!("EXP-{}", &caps[1]))
}

/// Normalize a batch of inputs, keeping first-seen order. Blank inputs are
/// ignored; unparsable ones are returned verbatim in `invalid`.
pub fn normalize_codes<I, S>(inputs: I) -> NormalizedCodes
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut codes = IndexSet::new();
    let mut invalid = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        if input.trim().is_empty() {
            continue;
        }
        match normalize_code(input) {
            Some(code) => {
                codes.insert(code);
            }
            None => invalid.push(input.to_string()),
        }
    }

    NormalizedCodes {
        codes: codes.into_iter().collect(),
        invalid,
    }
}

/// Split free-form text into code candidates on commas, semicolons and line
/// breaks. Spaces are kept since `Exp 192` is a single code.
#[must_use]
pub fn split_codes(text: &str) -> Vec<String> {
    text.split([',', ';', '\n', '\r'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Missing-category report for a batch of shipment codes.
///
/// Codes are normalized and deduplicated, then truncated to `limit`; codes
/// beyond the limit are dropped without being reported. Each remaining code
/// gets its own coverage run with the code as the query.
#[must_use]
pub fn report<S: AsRef<str>>(
    roots: &[PathBuf],
    codes: &[S],
    filter: &SearchFilter,
    parent_order: &[String],
    limit: usize,
) -> MultiCodeResult {
    report_in(
        &effective_roots_for(roots, filter),
        codes,
        filter,
        parent_order,
        limit,
    )
}

/// [`report`] over an already resolved scope. The scope depends only on the
/// year and month, so every code shares it.
#[must_use]
pub fn report_in<S: AsRef<str>>(
    scope: &[PathBuf],
    codes: &[S],
    filter: &SearchFilter,
    parent_order: &[String],
    limit: usize,
) -> MultiCodeResult {
    let NormalizedCodes { mut codes, invalid } = normalize_codes(codes);
    if codes.len() > limit {
        tracing::info!(
            dropped = codes.len() - limit,
            limit,
            "truncating code batch"
        );
        codes.truncate(limit);
    }

    let mut missing_counts: IndexMap<String, usize> =
        parent_order.iter().map(|p| (p.clone(), 0)).collect();
    let mut items = Vec::with_capacity(codes.len());

    for code in codes {
        let rows = coverage_in(scope, &filter.with_query(&code), parent_order, 1);
        let (found_rows, missing_rows): (Vec<_>, Vec<_>) = rows.into_iter().partition(|r| r.found);

        for row in &missing_rows {
            if let Some(count) = missing_counts.get_mut(&row.parent) {
                *count += 1;
            }
        }

        items.push(CodeCoverage {
            code,
            missing: missing_rows.into_iter().map(|r| r.parent).collect(),
            found: found_rows.into_iter().map(|r| r.parent).collect(),
        });
    }

    tracing::info!(
        processed = items.len(),
        invalid = invalid.len(),
        "multi-code report computed"
    );

    MultiCodeResult {
        items,
        summary: MissingSummary { missing_counts },
        invalid,
    }
}

#[cfg(test)]
#[path = "multi_code_tests.rs"]
mod tests;
