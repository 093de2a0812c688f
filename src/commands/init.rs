use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::{DocFinderError, EXIT_SUCCESS, Result};

use super::context::report_error;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e, cli),
    }
}

/// Writes a commented configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(DocFinderError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        DocFinderError::FileAccess {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# docfinder configuration file

# Allowed document roots. Every search starts here, and no path outside
# these folders is ever read. Year folders (2025, ...) sit directly below.
roots = [
    # "S:\\Export Logistics",
    # "/mnt/share/export-logistics",
]

# Document categories every shipment folder is expected to contain, in
# report order. Names are matched against folder names ignoring case.
parent_order = ["CIPL", "BL", "POD"]

[search]
# Results per page when --page-size is not given
default_page_size = 50
# Largest page a caller may request
max_page_size = 200

[report]
# Documents listed per category in coverage and monthly reports
max_items_per_parent = 20
# Most shipment codes checked by one missing-folder report
multi_code_limit = 50
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
