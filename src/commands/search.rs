use crate::cli::{Cli, SearchArgs};
use crate::engine::Engine;
use crate::{DocFinderError, Result};

use super::context::{CommandOutput, build_filter, color_mode, finish, load_search_config};

#[must_use]
pub fn run_search(args: &SearchArgs, cli: &Cli) -> i32 {
    finish(run_search_impl(args, cli), cli)
}

/// Baseline search over the configured roots.
///
/// # Errors
/// Returns an error if the query is blank, the paging arguments are out of
/// range, or configuration cannot be loaded.
pub fn run_search_impl(args: &SearchArgs, cli: &Cli) -> Result<CommandOutput> {
    let filter = build_filter(&args.query, &args.filter);
    if filter.query.is_empty() {
        return Err(DocFinderError::InvalidArgument(
            "query must not be empty".to_string(),
        ));
    }

    let config = load_search_config(cli)?;
    let engine = Engine::new(&config);
    let request = engine.page_request(args.page, args.page_size)?;
    let page = engine.search(&filter, request);

    let text = args
        .format
        .formatter(color_mode(cli))
        .format_search(&page)?;
    Ok(CommandOutput::new(text, page.count > 0))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
