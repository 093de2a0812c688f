use crate::cli::{BrowseArgs, Cli};
use crate::engine::Engine;
use crate::Result;

use super::context::{CommandOutput, color_mode, finish, load_search_config};

#[must_use]
pub fn run_browse(args: &BrowseArgs, cli: &Cli) -> i32 {
    finish(run_browse_impl(args, cli), cli)
}

/// List one folder under a configured root.
///
/// # Errors
/// Returns an error if the path is outside the roots, missing, not a folder
/// or unreadable, or if configuration cannot be loaded.
pub fn run_browse_impl(args: &BrowseArgs, cli: &Cli) -> Result<CommandOutput> {
    let config = load_search_config(cli)?;
    let items = Engine::new(&config).browse(&args.path, args.filter.as_deref())?;

    let text = args
        .format
        .formatter(color_mode(cli))
        .format_browse(&items)?;
    Ok(CommandOutput::new(text, !items.is_empty()))
}

#[cfg(test)]
#[path = "browse_tests.rs"]
mod tests;
