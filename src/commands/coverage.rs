use crate::cli::{Cli, CoverageArgs};
use crate::engine::Engine;
use crate::{DocFinderError, Result};

use super::context::{
    CommandOutput, build_filter, color_mode, finish, load_search_config, positive,
};

#[must_use]
pub fn run_coverage(args: &CoverageArgs, cli: &Cli) -> i32 {
    finish(run_coverage_impl(args, cli), cli)
}

/// Category coverage for one shipment code.
///
/// # Errors
/// Returns an error if the code is blank, `--max-items` is zero, or
/// configuration cannot be loaded.
pub fn run_coverage_impl(args: &CoverageArgs, cli: &Cli) -> Result<CommandOutput> {
    let filter = build_filter(&args.code, &args.filter);
    if filter.query.is_empty() {
        return Err(DocFinderError::InvalidArgument(
            "code must not be empty".to_string(),
        ));
    }
    let max_items = positive("--max-items", args.max_items)?;

    let config = load_search_config(cli)?;
    let rows = Engine::new(&config).coverage(&filter, max_items);

    let text = args
        .format
        .formatter(color_mode(cli))
        .format_coverage(&rows)?;
    Ok(CommandOutput::new(text, rows.iter().any(|r| r.found)))
}

#[cfg(test)]
#[path = "coverage_tests.rs"]
mod tests;
