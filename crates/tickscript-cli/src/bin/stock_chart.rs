use clap::Parser;

use tickscript_cli::cli::ChartArgs;
use tickscript_cli::commands::chart;
use tickscript_cli::config::ChartConfig;
use tickscript_cli::{finish, logging, CliError};

fn main() {
    logging::init();
    let args = ChartArgs::parse();
    finish(run(args));
}

fn run(args: ChartArgs) -> Result<(), CliError> {
    let config = ChartConfig::from_args(args)?;
    let stdout = std::io::stdout();
    chart::run(&config, &mut stdout.lock())
}
