//! Shared plumbing for command handlers: configuration, filters and exit codes.

use std::path::Path;

use crate::cli::{Cli, FilterArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::{ColorMode, print_error};
use crate::scanner::SearchFilter;
use crate::{DocFinderError, EXIT_ERROR, EXIT_NO_RESULTS, EXIT_SUCCESS, Result};

/// Rendered command output plus whether anything was found.
#[derive(Debug)]
pub struct CommandOutput {
    pub text: String,
    pub has_results: bool,
}

impl CommandOutput {
    #[must_use]
    pub const fn new(text: String, has_results: bool) -> Self {
        Self { text, has_results }
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.has_results {
            EXIT_SUCCESS
        } else {
            EXIT_NO_RESULTS
        }
    }
}

/// Print the output of a command implementation and map it to an exit code.
#[must_use]
pub fn finish(result: Result<CommandOutput>, cli: &Cli) -> i32 {
    match result {
        Ok(output) => {
            print!("{}", output.text);
            output.exit_code()
        }
        Err(e) => report_error(&e, cli),
    }
}

#[must_use]
pub fn report_error(error: &DocFinderError, cli: &Cli) -> i32 {
    tracing::debug!(error = ?error, "command failed");
    print_error(error, color_mode(cli));
    EXIT_ERROR
}

#[must_use]
pub fn color_mode(cli: &Cli) -> ColorMode {
    cli.color.into()
}

/// Load configuration as selected by the global flags.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed or
/// validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Configuration for a command that searches: loaded config with `--root`
/// overrides applied, and at least one root.
///
/// # Errors
/// Returns an error if loading fails or no roots are configured.
pub fn load_search_config(cli: &Cli) -> Result<Config> {
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_root_overrides(&mut config, cli);
    if config.roots.is_empty() {
        return Err(DocFinderError::Config(
            "no roots configured; set `roots` in the configuration file or pass --root".to_string(),
        ));
    }
    Ok(config)
}

pub fn apply_root_overrides(config: &mut Config, cli: &Cli) {
    if !cli.roots.is_empty() {
        config.roots.clone_from(&cli.roots);
    }
}

/// Build a search filter from a query and the shared filter flags.
#[must_use]
pub fn build_filter(query: &str, args: &FilterArgs) -> SearchFilter {
    SearchFilter::new(query)
        .with_year(args.year.as_deref())
        .with_month(args.month.as_deref())
        .with_company(args.company.as_deref())
}

/// Reject an explicit zero for a count flag.
///
/// # Errors
/// Returns `InvalidArgument` naming the flag if `value` is `Some(0)`.
pub fn positive(flag: &str, value: Option<usize>) -> Result<Option<usize>> {
    if value == Some(0) {
        return Err(DocFinderError::InvalidArgument(format!(
            "{flag} must be at least 1"
        )));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
