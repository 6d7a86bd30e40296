pub mod chart;
pub mod echo_delay;
pub mod echo_file;
pub mod kmeans;

use tickscript_core::{group_by_ticker, QuoteRow, QuoteStore, TickerSeries};
use tracing::info;

use crate::config::QueryConfig;
use crate::error::CliError;

/// Read the requested rows and split them into one date-ordered series per ticker,
/// in ticker-list order. The store is opened read-only and closed before returning.
pub fn load_series(query: &QueryConfig) -> Result<Vec<TickerSeries>, CliError> {
    let store = QuoteStore::open(&query.store)?;
    let start = query.range.start().to_string();
    let end = query.range.end().to_string();
    let records = store.load_quotes(&query.tickers.as_strs(), &start, &end)?;

    let rows = records
        .iter()
        .map(QuoteRow::from_record)
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        store = %store.path().display(),
        rows = rows.len(),
        "loaded quote rows"
    );
    Ok(group_by_ticker(&query.tickers, rows))
}
