use clap::Parser;

use tickscript_cli::cli::KmeansArgs;
use tickscript_cli::commands::kmeans;
use tickscript_cli::config::ClusterConfig;
use tickscript_cli::{finish, logging, CliError};

fn main() {
    logging::init();
    let args = KmeansArgs::parse();
    finish(run(args));
}

fn run(args: KmeansArgs) -> Result<(), CliError> {
    let config = ClusterConfig::from_args(args)?;
    let stdout = std::io::stdout();
    kmeans::run(&config, &mut stdout.lock())
}
