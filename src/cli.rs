use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "docfinder")]
#[command(author, version, about = "Find shipment documents on a structured share and report missing categories")]
#[command(long_about = "Searches the configured document roots by name, year, month and company, \
    and reports which document categories (CIPL, BL, POD, ...) exist for shipment codes or periods.\n\n\
    Exit codes:\n  \
    0 - Results found\n  \
    1 - No results\n  \
    2 - Configuration, argument or path error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    /// Document root to search (repeatable, overrides configured roots)
    #[arg(long = "root", global = true)]
    pub roots: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search files and folders by name
    Search(SearchArgs),

    /// Show which document categories exist for a shipment code
    Coverage(CoverageArgs),

    /// Show which document categories have files in a month
    Monthly(MonthlyArgs),

    /// Report missing document categories for a batch of shipment codes
    Missing(MissingArgs),

    /// List the contents of a folder under a configured root
    Browse(BrowseArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Path filters shared by search and report commands.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Year folder to search (e.g. 2025)
    #[arg(long)]
    pub year: Option<String>,

    /// Month name (e.g. june); anything else means all months
    #[arg(long)]
    pub month: Option<String>,

    /// Company name that must appear in the path
    #[arg(long)]
    pub company: Option<String>,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to find in file and folder names
    pub query: String,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Results per page (default from config)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct CoverageArgs {
    /// Shipment code or other text to look for
    pub code: String,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Items listed per category (default from config)
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct MonthlyArgs {
    /// Year folder (e.g. 2025)
    #[arg(long)]
    pub year: String,

    /// Month name (e.g. june)
    #[arg(long)]
    pub month: String,

    /// Company name that must appear in the path
    #[arg(long)]
    pub company: Option<String>,

    /// Items listed per category (default from config)
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct MissingArgs {
    /// Shipment codes (EXP-192, exp192, 192, ...)
    pub codes: Vec<String>,

    /// Read more codes from a file (comma, semicolon or newline separated)
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Maximum codes to check (capped by config)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct BrowseArgs {
    /// Folder to list
    pub path: PathBuf,

    /// Only show entries whose name contains this text
    #[arg(long)]
    pub filter: Option<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration file
    Validate,

    /// Display the effective configuration
    Show {
        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
