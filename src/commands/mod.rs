pub mod browse;
pub mod config;
pub mod context;
pub mod coverage;
pub mod init;
pub mod missing;
pub mod monthly;
pub mod search;

#[cfg(test)]
mod test_support;

pub use browse::{run_browse, run_browse_impl};
pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use context::CommandOutput;
pub use coverage::{run_coverage, run_coverage_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use missing::{run_missing, run_missing_impl};
pub use monthly::{run_monthly, run_monthly_impl};
pub use search::{run_search, run_search_impl};
