//! Positional argument definitions, one parser per binary.
//!
//! | Binary | Arguments |
//! |--------|-----------|
//! | `arg-echo-delay` | `TITLE DELAY ARG2 ARG3` |
//! | `arg-echo-file` | `TITLE DELAY FILE_OUTPUT_DIR ARG` |
//! | `stock-chart` | `DB_PATH TICKERS START_DATE END_DATE` |
//! | `stock-kmeans` | `DB_PATH TICKERS CLUSTERS START_DATE END_DATE` |
//!
//! Every argument is required; a missing or extra one is a usage error (exit 2).
//! Values are kept as raw strings here and validated by the `config` module.

use std::path::PathBuf;

use clap::Parser;

/// Echo four arguments, then sleep for DELAY seconds.
#[derive(Debug, Clone, Parser)]
#[command(name = "arg-echo-delay", version, about = "Echo arguments and sleep")]
pub struct EchoDelayArgs {
    /// Free-form title echoed first.
    pub title: String,

    /// Delay in seconds (fractional values allowed).
    #[arg(allow_negative_numbers = true)]
    pub delay: String,

    pub arg2: String,

    pub arg3: String,
}

/// Echo arguments, sleep, then write a UUID marker file into FILE_OUTPUT_DIR.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "arg-echo-file",
    version,
    about = "Echo arguments, sleep, and write a marker file"
)]
pub struct EchoFileArgs {
    pub title: String,

    /// Delay in seconds (fractional values allowed).
    #[arg(allow_negative_numbers = true)]
    pub delay: String,

    /// Directory that receives `example.txt`; created if missing.
    pub file_output_dir: PathBuf,

    pub arg: String,
}

/// Render normalized closes of TICKERS as a base64 PNG line chart.
#[derive(Debug, Clone, Parser)]
#[command(name = "stock-chart", version, about = "Print a base64 PNG chart of stock prices")]
pub struct ChartArgs {
    /// Path to the DuckDB quote store.
    pub db_path: PathBuf,

    /// Comma-separated tickers, e.g. `AAPL,MSFT` or `'AAPL','MSFT'`.
    pub tickers: String,

    /// First date (inclusive), `YYYY-MM-DD`.
    pub start_date: String,

    /// Last date (inclusive), `YYYY-MM-DD`.
    pub end_date: String,
}

/// Cluster TICKERS by daily movement and print `cluster ticker r,g,b` lines.
#[derive(Debug, Clone, Parser)]
#[command(name = "stock-kmeans", version, about = "Cluster stocks by price movement")]
pub struct KmeansArgs {
    /// Path to the DuckDB quote store.
    pub db_path: PathBuf,

    /// Comma-separated tickers, e.g. `AAPL,MSFT` or `'AAPL','MSFT'`.
    pub tickers: String,

    /// Number of clusters, between 1 and the number of tickers.
    #[arg(allow_negative_numbers = true)]
    pub clusters: String,

    /// First date (inclusive), `YYYY-MM-DD`.
    pub start_date: String,

    /// Last date (inclusive), `YYYY-MM-DD`.
    pub end_date: String,
}
