//! Behavior-driven tests for the read-only quote store
//!
//! These tests verify how rows are selected, ordered and converted before any
//! script sees them.

mod support;

use tempfile::tempdir;
use tickscript_core::{group_by_ticker, QuoteRow, TickerList, TradingDate};
use tickscript_warehouse::{QuoteRecord, QuoteStore, StoreConfig, WarehouseError};

fn record(ticker: &str, date: &str, open: f64, close: f64) -> QuoteRecord {
    QuoteRecord {
        ticker: ticker.to_string(),
        date: date.to_string(),
        open,
        close,
    }
}

#[test]
fn range_bounds_are_inclusive_on_both_ends() {
    // Given: Rows just outside, on, and inside the range boundaries
    let temp = tempdir().expect("tempdir");
    let path = support::seed_store(
        temp.path(),
        &[
            record("AAPL", "2023-12-31", 1.0, 1.0),
            record("AAPL", "2024-01-01", 1.0, 1.0),
            record("AAPL", "2024-01-15", 1.0, 1.0),
            record("AAPL", "2024-01-31", 1.0, 1.0),
            record("AAPL", "2024-02-01", 1.0, 1.0),
        ],
    );

    // When: January is queried
    let store = QuoteStore::open(&StoreConfig::new(path)).expect("open");
    let rows = store
        .load_quotes(&["AAPL"], "2024-01-01", "2024-01-31")
        .expect("query");

    // Then: Both boundary days are included and nothing else
    let dates = rows.iter().map(|row| row.date.as_str()).collect::<Vec<_>>();
    assert_eq!(dates, vec!["2024-01-01", "2024-01-15", "2024-01-31"]);
}

#[test]
fn rows_are_split_per_ticker_in_list_order_with_prices_rounded() {
    // Given: Interleaved rows for two tickers with sub-cent prices
    let temp = tempdir().expect("tempdir");
    let path = support::seed_store(
        temp.path(),
        &[
            record("MSFT", "2024-01-03", 10.004, 10.996),
            record("AAPL", "2024-01-02", 20.0, 21.0),
            record("MSFT", "2024-01-02", 9.5, 9.75),
            record("AAPL", "2024-01-03", 21.0, 22.0),
        ],
    );
    let tickers = TickerList::parse("MSFT,AAPL").expect("tickers");

    // When: Rows are loaded and grouped
    let store = QuoteStore::open(&StoreConfig::new(path)).expect("open");
    let records = store
        .load_quotes(&tickers.as_strs(), "2024-01-01", "2024-01-31")
        .expect("query");
    let rows = records
        .iter()
        .map(QuoteRow::from_record)
        .collect::<Result<Vec<_>, _>>()
        .expect("rows");
    let series = group_by_ticker(&tickers, rows);

    // Then: Series follow the ticker list, each ordered by date
    assert_eq!(series[0].ticker.as_str(), "MSFT");
    assert_eq!(series[1].ticker.as_str(), "AAPL");
    assert_eq!(
        series[0].rows[0].date,
        TradingDate::parse("2024-01-02").expect("date")
    );

    // And: Prices are rounded to cents
    assert_eq!(series[0].rows[1].open, 10.0);
    assert_eq!(series[0].rows[1].close, 11.0);
}

#[test]
fn opening_a_file_that_is_not_a_database_fails_as_a_store_error() {
    // Given: A text file where the store should be
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("quotes.duckdb");
    std::fs::write(&path, "not a database").expect("write");

    // When / Then: Opening or querying surfaces a DuckDB error
    let result = QuoteStore::open(&StoreConfig::new(&path))
        .and_then(|store| store.load_quotes(&["AAPL"], "2024-01-01", "2024-01-31"));
    assert!(matches!(result, Err(WarehouseError::DuckDb(_))));
}

#[test]
fn read_only_store_refuses_writes() {
    // Given: An existing store opened read-only
    let temp = tempdir().expect("tempdir");
    let path = support::seed_store(temp.path(), &[record("AAPL", "2024-01-02", 1.0, 2.0)]);
    let store = QuoteStore::open(&StoreConfig::new(path)).expect("open");

    // When / Then: Inserting through it fails
    let result = store.insert_quotes(&[record("AAPL", "2024-01-03", 1.0, 2.0)]);
    assert!(result.is_err());
}
