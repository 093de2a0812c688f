use crate::cli::{Cli, MonthlyArgs};
use crate::engine::Engine;
use crate::scanner::{Month, SearchFilter};
use crate::{DocFinderError, Result};

use super::context::{CommandOutput, color_mode, finish, load_search_config, positive};

#[must_use]
pub fn run_monthly(args: &MonthlyArgs, cli: &Cli) -> i32 {
    finish(run_monthly_impl(args, cli), cli)
}

/// Available and missing categories for one year and month.
///
/// # Errors
/// Returns an error if the year is blank, the month is not a month name,
/// `--max-items` is zero, or configuration cannot be loaded.
pub fn run_monthly_impl(args: &MonthlyArgs, cli: &Cli) -> Result<CommandOutput> {
    let filter = SearchFilter::default()
        .with_year(Some(&args.year))
        .with_month(Some(&args.month))
        .with_company(args.company.as_deref());
    if filter.year.is_none() {
        return Err(DocFinderError::InvalidArgument(
            "year must not be empty".to_string(),
        ));
    }
    if filter.month.is_none() {
        let names: Vec<&str> = Month::ALL.into_iter().map(Month::as_str).collect();
        return Err(DocFinderError::InvalidArgument(format!(
            "unknown month '{}'; expected one of: {}",
            args.month.trim(),
            names.join(", ")
        )));
    }
    let max_items = positive("--max-items", args.max_items)?;

    let config = load_search_config(cli)?;
    let result = Engine::new(&config).monthly(&filter, max_items);

    let text = args
        .format
        .formatter(color_mode(cli))
        .format_monthly(&result)?;
    Ok(CommandOutput::new(text, !result.available.is_empty()))
}

#[cfg(test)]
#[path = "monthly_tests.rs"]
mod tests;
