use clap::Parser;

use tickscript_cli::cli::EchoDelayArgs;
use tickscript_cli::commands::echo_delay;
use tickscript_cli::config::EchoConfig;
use tickscript_cli::{finish, logging, CliError};

fn main() {
    logging::init();
    let args = EchoDelayArgs::parse();
    finish(run(args));
}

fn run(args: EchoDelayArgs) -> Result<(), CliError> {
    let config = EchoConfig::from_args(args)?;
    let stdout = std::io::stdout();
    echo_delay::run(&config, &mut stdout.lock())
}
