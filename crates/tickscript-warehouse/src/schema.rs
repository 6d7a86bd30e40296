use ::duckdb::Connection;

/// DDL for the quote table read by the chart and clustering scripts.
///
/// Only `Ticker`, `Date`, `Open` and `Close` are read; the remaining columns exist so
/// fixture databases look like the stores the scripts are pointed at.
pub const QUOTES_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS Quotes (
    "Ticker" TEXT NOT NULL,
    "Date" DATE NOT NULL,
    "Open" DOUBLE NOT NULL,
    "High" DOUBLE,
    "Low" DOUBLE,
    "Close" DOUBLE NOT NULL,
    "Volume" BIGINT,
    PRIMARY KEY("Ticker", "Date")
);
"#;

pub fn apply_schema(connection: &Connection) -> Result<(), ::duckdb::Error> {
    connection.execute_batch(QUOTES_DDL)
}
