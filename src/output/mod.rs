mod error_output;
mod json;
mod text;

pub use error_output::{ErrorOutput, print_error};
pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::report::{MonthlyCoverageResult, MultiCodeResult, ParentCoverageRow};
use crate::scanner::{EntryKind, MatchRecord, Page};

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Trait for rendering engine results into an output format.
pub trait ReportFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_search(&self, page: &Page<MatchRecord>) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_coverage(&self, rows: &[ParentCoverageRow]) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_monthly(&self, result: &MonthlyCoverageResult) -> Result<String>;

    /// `limit` is the batch cap that was applied to the codes.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_missing(&self, result: &MultiCodeResult, limit: usize) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_browse(&self, items: &[MatchRecord]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Formatter for this format. `color` only affects text output.
    #[must_use]
    pub fn formatter(self, color: ColorMode) -> Box<dyn ReportFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::new(color)),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// External name of a record kind.
#[must_use]
pub const fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Folder => "folder",
        EntryKind::File => "file",
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
