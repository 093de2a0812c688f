use clap::Parser;

use docfinder::cli::{Cli, Commands};
use docfinder::commands::{
    run_browse, run_config, run_coverage, run_init, run_missing, run_monthly, run_search,
};

fn main() {
    let cli = Cli::parse();
    docfinder::logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Search(args) => run_search(args, &cli),
        Commands::Coverage(args) => run_coverage(args, &cli),
        Commands::Monthly(args) => run_monthly(args, &cli),
        Commands::Missing(args) => run_missing(args, &cli),
        Commands::Browse(args) => run_browse(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
