use std::io::Write;
use std::{env, thread};

use tickscript_core::{ensure_directory, write_marker, DirectoryState};
use tracing::info;

use crate::config::MarkerConfig;
use crate::error::CliError;

pub fn run(config: &MarkerConfig, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "Title: {}", config.title)?;
    writeln!(out, "Delay: {}", config.delay)?;
    writeln!(out, "FileOutputDir: {}", config.output_dir.display())?;
    writeln!(out, "Arg: {}", config.arg)?;
    writeln!(out, "Script is starting delay of {} seconds.", config.delay)?;
    out.flush()?;

    thread::sleep(config.delay.duration());

    writeln!(out, "Script continue after delay.")?;
    writeln!(
        out,
        "Current working directory is: {}",
        env::current_dir()?.display()
    )?;
    writeln!(
        out,
        "Writing file (and dir) at {}",
        config.output_dir.display()
    )?;

    match ensure_directory(&config.output_dir)? {
        DirectoryState::Created => writeln!(out, "Directory created.")?,
        DirectoryState::Existing => writeln!(out, "Directory exists.")?,
    }
    out.flush()?;

    let marker = write_marker(&config.output_dir)?;
    info!(path = %marker.path.display(), id = %marker.id, "marker written");
    writeln!(out, "File written.")?;
    writeln!(out, "Script finished.")?;
    out.flush()?;
    Ok(())
}
