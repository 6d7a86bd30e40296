//! Shared plumbing for the tickscript binaries.
//!
//! Each binary parses its positional arguments with [`cli`], validates them into a
//! [`config`] struct, runs the matching [`commands`] module against stdout and exits
//! through [`finish`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use error::CliError;

/// Print `error: <message>` to stderr and exit with the error's code; return on success.
pub fn finish(result: Result<(), CliError>) {
    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}
