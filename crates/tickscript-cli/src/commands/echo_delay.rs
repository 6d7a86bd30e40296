use std::io::Write;
use std::thread;

use tracing::info;

use crate::config::EchoConfig;
use crate::error::CliError;

pub fn run(config: &EchoConfig, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "Title:  {}", config.title)?;
    writeln!(out, "Arg1 (delay time in seconds):\n{}", config.delay)?;
    writeln!(out, "Arg2:\n{}", config.arg2)?;
    writeln!(out, "Arg3:\n{}", config.arg3)?;
    writeln!(out, "Script delay {} seconds is starting delay.", config.delay)?;
    out.flush()?;

    info!(seconds = config.delay.duration().as_secs_f64(), "sleeping");
    thread::sleep(config.delay.duration());

    writeln!(out, "Script delay {} seconds is finished.", config.delay)?;
    out.flush()?;
    Ok(())
}
