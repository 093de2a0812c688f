use std::fmt::Write;
use std::path::PathBuf;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::OutputFormat;
use crate::{EXIT_SUCCESS, Result};

use super::context::{apply_root_overrides, load_config, report_error};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match args.action {
        ConfigAction::Validate => run_config_validate_impl(cli),
        ConfigAction::Show { format } => run_config_show_impl(format, cli),
    };
    match result {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e, cli),
    }
}

/// Validates the configuration file that would be loaded.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(cli: &Cli) -> Result<String> {
    if cli.no_config {
        return Ok("Configuration loading disabled (--no-config)\n".to_string());
    }

    let loader = FileConfigLoader::new();
    let path: Option<PathBuf> = cli.config.clone().or_else(|| loader.find_config());
    match path {
        Some(path) => {
            loader.load_from_path(&path)?;
            Ok(format!("Configuration is valid: {}\n", path.display()))
        }
        None => Ok("No configuration file found; built-in defaults apply\n".to_string()),
    }
}

/// Shows the effective configuration, including `--root` overrides.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialization fails.
pub fn run_config_show_impl(format: OutputFormat, cli: &Cli) -> Result<String> {
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_root_overrides(&mut config, cli);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub fn format_config_text(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    if config.roots.is_empty() {
        output.push_str("roots = []  # none configured\n");
    } else {
        output.push_str("roots = [\n");
        for root in &config.roots {
            let _ = writeln!(output, "  {:?},", root.display().to_string());
        }
        output.push_str("]\n");
    }
    let _ = writeln!(output, "parent_order = {:?}", config.parent_order);

    output.push_str("\n[search]\n");
    let _ = writeln!(
        output,
        "  default_page_size = {}",
        config.search.default_page_size
    );
    let _ = writeln!(output, "  max_page_size = {}", config.search.max_page_size);

    output.push_str("\n[report]\n");
    let _ = writeln!(
        output,
        "  max_items_per_parent = {}",
        config.report.max_items_per_parent
    );
    let _ = writeln!(
        output,
        "  multi_code_limit = {}",
        config.report.multi_code_limit
    );

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
