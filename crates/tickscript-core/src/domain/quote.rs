use tickscript_warehouse::QuoteRecord;

use crate::domain::{Ticker, TickerList, TradingDate};
use crate::ValidationError;

/// One quote row as used by the scripts; other store columns are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRow {
    pub ticker: Ticker,
    pub date: TradingDate,
    pub open: f64,
    pub close: f64,
}

impl QuoteRow {
    /// Convert a stored record, rounding prices to cents.
    pub fn from_record(record: &QuoteRecord) -> Result<Self, ValidationError> {
        Ok(Self {
            ticker: Ticker::parse(&record.ticker)?,
            date: TradingDate::parse(&record.date)?,
            open: round_cents(record.open),
            close: round_cents(record.close),
        })
    }

    /// Daily price movement, `close - open`.
    pub fn movement(&self) -> f64 {
        self.close - self.open
    }
}

/// Date-ordered rows of a single ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerSeries {
    pub ticker: Ticker,
    pub rows: Vec<QuoteRow>,
}

impl TickerSeries {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Movement vector: `close - open` per row, in date order.
    pub fn movements(&self) -> Vec<f64> {
        self.rows.iter().map(QuoteRow::movement).collect()
    }
}

/// Split rows into one series per ticker, in ticker-list order.
///
/// Tickers without rows still get an (empty) series so callers can report them by name.
/// Rows are sorted by date within each series.
pub fn group_by_ticker(tickers: &TickerList, rows: Vec<QuoteRow>) -> Vec<TickerSeries> {
    let mut series = tickers
        .iter()
        .map(|ticker| TickerSeries {
            ticker: ticker.clone(),
            rows: Vec::new(),
        })
        .collect::<Vec<_>>();

    for row in rows {
        if let Some(index) = tickers.position(&row.ticker) {
            series[index].rows.push(row);
        }
    }

    for entry in &mut series {
        entry.rows.sort_by_key(|row| row.date);
    }

    series
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
