//! Quote store fixtures shared by the behaviour tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tickscript_warehouse::{QuoteRecord, QuoteStore, StoreConfig};

/// Trading dates used by every fixture: 30 days spread over January to March 2024.
pub fn trading_dates() -> Vec<String> {
    (1..=3)
        .flat_map(|month| (1..=28).step_by(3).map(move |day| format!("2024-{month:02}-{day:02}")))
        .collect()
}

/// Rows whose daily movement alternates `+step, -step, ...` starting with `sign`.
pub fn zigzag(ticker: &str, sign: f64, step: f64) -> Vec<QuoteRecord> {
    trading_dates()
        .into_iter()
        .enumerate()
        .map(|(index, date)| {
            let open = 100.0 + index as f64;
            let direction = if index % 2 == 0 { sign } else { -sign };
            QuoteRecord {
                ticker: ticker.to_string(),
                date,
                open,
                close: open + direction * step,
            }
        })
        .collect()
}

/// Build a store at `<dir>/quotes.duckdb` holding `rows`, then close it.
pub fn seed_store(dir: &Path, rows: &[QuoteRecord]) -> PathBuf {
    let path = dir.join("quotes.duckdb");
    let store = QuoteStore::create(&StoreConfig::new(&path)).expect("create store");
    store.insert_quotes(rows).expect("seed quotes");
    path
}

/// Two up-first tickers (AAPL, MSFT) and two down-first tickers (XOM, CVX).
pub fn two_group_store(dir: &Path) -> PathBuf {
    let mut rows = Vec::new();
    rows.extend(zigzag("AAPL", 1.0, 1.5));
    rows.extend(zigzag("XOM", -1.0, 2.0));
    rows.extend(zigzag("MSFT", 1.0, 3.0));
    rows.extend(zigzag("CVX", -1.0, 0.5));
    seed_store(dir, &rows)
}
