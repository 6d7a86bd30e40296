use clap::Parser;

use tickscript_cli::cli::EchoFileArgs;
use tickscript_cli::commands::echo_file;
use tickscript_cli::config::MarkerConfig;
use tickscript_cli::{finish, logging, CliError};

fn main() {
    logging::init();
    let args = EchoFileArgs::parse();
    finish(run(args));
}

fn run(args: EchoFileArgs) -> Result<(), CliError> {
    let config = MarkerConfig::from_args(args)?;
    let stdout = std::io::stdout();
    echo_file::run(&config, &mut stdout.lock())
}
