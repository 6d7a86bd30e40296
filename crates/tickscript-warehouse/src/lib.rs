//! # tickscript warehouse
//!
//! Read-only access to the local quote store the chart and clustering scripts are
//! pointed at.
//!
//! The store is a `DuckDB` database with a `Quotes` table holding one row per
//! `(Ticker, Date)`. Scripts only ever open it in [`AccessMode::ReadOnly`]; the write
//! path ([`QuoteStore::create`] and [`QuoteStore::insert_quotes`]) exists to build
//! fixture databases.
//!
//! ```rust,no_run
//! use tickscript_warehouse::{QuoteStore, StoreConfig};
//!
//! let store = QuoteStore::open(&StoreConfig::new("data/stocks.duckdb"))?;
//! let rows = store.load_quotes(&["AAPL", "MSFT"], "2024-01-01", "2024-06-30")?;
//! println!("{} rows", rows.len());
//! # Ok::<(), tickscript_warehouse::WarehouseError>(())
//! ```

pub mod connection;
pub mod schema;

use std::path::{Path, PathBuf};

use ::duckdb::{params, params_from_iter, Connection};
use thiserror::Error;
use tracing::debug;

pub use connection::AccessMode;

/// Errors that can occur while reading or building the quote store.
#[derive(Debug, Error)]
pub enum WarehouseError {
    /// `DuckDB` database error (unreadable store, malformed query, bad cast).
    #[error(transparent)]
    DuckDb(#[from] ::duckdb::Error),

    /// The store file does not exist; read-only opens never create it.
    #[error("quote store not found at '{}'", path.display())]
    StoreNotFound { path: PathBuf },

    /// Query was rejected before reaching the database.
    #[error("query rejected: {0}")]
    QueryRejected(String),
}

/// Location of the quote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the `DuckDB` database file.
    pub db_path: PathBuf,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

/// One `Quotes` row as stored; dates are `YYYY-MM-DD` text.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRecord {
    pub ticker: String,
    pub date: String,
    pub open: f64,
    pub close: f64,
}

/// Handle over a single open connection; the connection closes when the store drops.
pub struct QuoteStore {
    path: PathBuf,
    connection: Connection,
}

impl QuoteStore {
    /// Open an existing store read-only.
    ///
    /// # Errors
    /// Returns [`WarehouseError::StoreNotFound`] if the file is missing, or a `DuckDB`
    /// error if it cannot be opened.
    pub fn open(config: &StoreConfig) -> Result<Self, WarehouseError> {
        if !config.db_path.is_file() {
            return Err(WarehouseError::StoreNotFound {
                path: config.db_path.clone(),
            });
        }

        let connection =
            connection::open_connection(config.db_path.as_path(), AccessMode::ReadOnly)?;
        debug!(path = %config.db_path.display(), "opened quote store read-only");
        Ok(Self {
            path: config.db_path.clone(),
            connection,
        })
    }

    /// Create (or open) a writable store and make sure the `Quotes` table exists.
    pub fn create(config: &StoreConfig) -> Result<Self, WarehouseError> {
        let connection =
            connection::open_connection(config.db_path.as_path(), AccessMode::ReadWrite)?;
        schema::apply_schema(&connection)?;
        Ok(Self {
            path: config.db_path.clone(),
            connection,
        })
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Insert or replace quote rows inside one transaction.
    pub fn insert_quotes(&self, rows: &[QuoteRecord]) -> Result<usize, WarehouseError> {
        if rows.is_empty() {
            return Ok(0);
        }

        self.connection.execute_batch("BEGIN TRANSACTION")?;
        let result = (|| -> Result<usize, WarehouseError> {
            let mut statement = self.connection.prepare(
                r#"
INSERT OR REPLACE INTO Quotes ("Ticker", "Date", "Open", "Close")
VALUES (?, CAST(? AS DATE), ?, ?)
"#,
            )?;
            for row in rows {
                statement.execute(params![
                    row.ticker.as_str(),
                    row.date.as_str(),
                    row.open,
                    row.close
                ])?;
            }
            Ok(rows.len())
        })();

        finalize_transaction(&self.connection, result)
    }

    /// Load every row whose ticker is in `tickers` and whose date lies in the inclusive
    /// range `[start, end]`, ordered by date (ties by ticker).
    ///
    /// # Errors
    /// Rejects an empty ticker list; surfaces `DuckDB` errors for malformed dates or an
    /// unreadable table.
    pub fn load_quotes(
        &self,
        tickers: &[&str],
        start: &str,
        end: &str,
    ) -> Result<Vec<QuoteRecord>, WarehouseError> {
        if tickers.is_empty() {
            return Err(WarehouseError::QueryRejected(String::from(
                "ticker list must not be empty",
            )));
        }

        let sql = range_query(tickers.len());
        let mut statement = self.connection.prepare(sql.as_str())?;
        let bound = tickers
            .iter()
            .copied()
            .chain([start, end])
            .collect::<Vec<_>>();

        let records = statement
            .query_map(params_from_iter(bound), |row| {
                Ok(QuoteRecord {
                    ticker: row.get(0)?,
                    date: row.get(1)?,
                    open: row.get(2)?,
                    close: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            tickers = tickers.len(),
            rows = records.len(),
            start,
            end,
            "loaded quotes"
        );
        Ok(records)
    }
}

fn range_query(ticker_count: usize) -> String {
    let placeholders = vec!["?"; ticker_count].join(", ");
    format!(
        r#"
SELECT
    "Ticker",
    CAST(CAST("Date" AS DATE) AS VARCHAR),
    CAST("Open" AS DOUBLE),
    CAST("Close" AS DOUBLE)
FROM Quotes
WHERE "Ticker" IN ({placeholders})
  AND CAST("Date" AS DATE) >= CAST(? AS DATE)
  AND CAST("Date" AS DATE) <= CAST(? AS DATE)
ORDER BY CAST("Date" AS DATE), "Ticker"
"#
    )
}

fn finalize_transaction<T>(
    connection: &Connection,
    result: Result<T, WarehouseError>,
) -> Result<T, WarehouseError> {
    match result {
        Ok(value) => {
            connection.execute_batch("COMMIT")?;
            Ok(value)
        }
        Err(error) => {
            let _ = connection.execute_batch("ROLLBACK");
            Err(error)
        }
    }
}
