use std::fs;
use std::path::Path;

use crate::cli::{Cli, MissingArgs};
use crate::engine::Engine;
use crate::report::split_codes;
use crate::{DocFinderError, Result};

use super::context::{
    CommandOutput, build_filter, color_mode, finish, load_search_config, positive,
};

#[must_use]
pub fn run_missing(args: &MissingArgs, cli: &Cli) -> i32 {
    finish(run_missing_impl(args, cli), cli)
}

/// Missing-category report for the codes given as arguments and in `--file`.
///
/// # Errors
/// Returns an error if no codes are given, the code file cannot be read,
/// `--limit` is zero, or configuration cannot be loaded.
pub fn run_missing_impl(args: &MissingArgs, cli: &Cli) -> Result<CommandOutput> {
    let mut codes: Vec<String> = args.codes.iter().flat_map(|c| split_codes(c)).collect();
    if let Some(path) = &args.file {
        codes.extend(read_codes(path)?);
    }
    if codes.is_empty() {
        return Err(DocFinderError::InvalidArgument(
            "no shipment codes given".to_string(),
        ));
    }
    let limit = positive("--limit", args.limit)?;

    let config = load_search_config(cli)?;
    let engine = Engine::new(&config);
    let filter = build_filter("", &args.filter);
    let result = engine.missing_report(&codes, &filter, limit);
    let applied_limit = engine.batch_limit(limit);

    let text = args
        .format
        .formatter(color_mode(cli))
        .format_missing(&result, applied_limit)?;
    let has_results = result.items.iter().any(|item| !item.found.is_empty());
    Ok(CommandOutput::new(text, has_results))
}

fn read_codes(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| DocFinderError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_codes(&content))
}

#[cfg(test)]
#[path = "missing_tests.rs"]
mod tests;
