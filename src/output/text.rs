use std::io::Write;

use crate::error::Result;
use crate::report::{MonthlyCoverageResult, MultiCodeResult, ParentCoverageRow};
use crate::scanner::{EntryKind, MatchRecord, Page};

use super::{ReportFormatter, ansi};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize_with_color(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn found_mark(&self, found: bool) -> String {
        if found {
            self.colorize_with_color("✓", ansi::GREEN)
        } else {
            self.colorize_with_color("✗", ansi::RED)
        }
    }

    fn format_record(&self, record: &MatchRecord, indent: &str, output: &mut Vec<u8>) {
        let name = match record.kind {
            EntryKind::Folder => self.colorize_with_color(&format!("{}/", record.name), ansi::CYAN),
            EntryKind::File => record.name.clone(),
        };
        writeln!(output, "{indent}{name}").ok();
        writeln!(output, "{indent}   {}", record.full_path).ok();
    }

    /// Footer for capped item lists.
    fn format_more(shown: usize, count: usize, indent: &str, output: &mut Vec<u8>) {
        if count > shown {
            writeln!(output, "{indent}... and {} more", count - shown).ok();
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format_search(&self, page: &Page<MatchRecord>) -> Result<String> {
        let mut output = Vec::new();

        for record in &page.items {
            self.format_record(record, "", &mut output);
        }
        if !page.items.is_empty() {
            writeln!(output).ok();
        }

        let count = self.colorize_with_color(&page.count.to_string(), ansi::GREEN);
        writeln!(
            output,
            "Found {count} matches (page {} of {}, {} per page)",
            page.page, page.total_pages, page.page_size
        )
        .ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }

    fn format_coverage(&self, rows: &[ParentCoverageRow]) -> Result<String> {
        let mut output = Vec::new();

        for row in rows {
            let presence = if row.present { "present" } else { "absent" };
            writeln!(
                output,
                "{} {}: {} matches (folder {presence})",
                self.found_mark(row.found),
                row.parent,
                row.count
            )
            .ok();
            for record in &row.items {
                self.format_record(record, "   ", &mut output);
            }
            Self::format_more(row.items.len(), row.count, "   ", &mut output);
        }

        let found = rows.iter().filter(|r| r.found).count();
        writeln!(output).ok();
        writeln!(output, "Summary: {found} of {} categories found", rows.len()).ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }

    fn format_monthly(&self, result: &MonthlyCoverageResult) -> Result<String> {
        let mut output = Vec::new();

        let year = result.period.year.as_deref().unwrap_or("any year");
        let month = result
            .period
            .month
            .map_or_else(|| "any month".to_string(), |m| m.to_string());
        writeln!(output, "Period: {year} / {month}").ok();
        writeln!(output).ok();

        for category in &result.available {
            writeln!(
                output,
                "{} {}: {} documents",
                self.found_mark(true),
                category.parent,
                category.count
            )
            .ok();
            for record in &category.items {
                self.format_record(record, "   ", &mut output);
            }
            Self::format_more(category.items.len(), category.count, "   ", &mut output);
        }
        for parent in &result.missing {
            writeln!(output, "{} {parent}: missing", self.found_mark(false)).ok();
        }

        writeln!(output).ok();
        let missing = self.colorize_with_color(&result.missing.len().to_string(), ansi::RED);
        writeln!(
            output,
            "Summary: {} documents, {} categories available, {missing} missing",
            result.total_documents(),
            result.available.len()
        )
        .ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }

    fn format_missing(&self, result: &MultiCodeResult, limit: usize) -> Result<String> {
        let mut output = Vec::new();

        for item in &result.items {
            if item.missing.is_empty() {
                writeln!(output, "{} {}: complete", self.found_mark(true), item.code).ok();
            } else {
                let missing = self.colorize_with_color(&item.missing.join(", "), ansi::RED);
                writeln!(
                    output,
                    "{} {}: missing {missing}",
                    self.found_mark(false),
                    item.code
                )
                .ok();
            }
        }

        if !result.invalid.is_empty() {
            let invalid = self.colorize_with_color(&result.invalid.join(", "), ansi::YELLOW);
            writeln!(output, "Invalid codes: {invalid}").ok();
        }

        writeln!(output).ok();
        writeln!(
            output,
            "Summary: {} codes checked (limit {limit})",
            result.items.len()
        )
        .ok();
        for (parent, count) in &result.summary.missing_counts {
            writeln!(output, "   {parent}: missing for {count}").ok();
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }

    fn format_browse(&self, items: &[MatchRecord]) -> Result<String> {
        let mut output = Vec::new();

        for record in items {
            self.format_record(record, "", &mut output);
        }
        if !items.is_empty() {
            writeln!(output).ok();
        }
        writeln!(output, "{} entries", items.len()).ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
