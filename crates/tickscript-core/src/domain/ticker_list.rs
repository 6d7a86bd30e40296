use std::collections::HashSet;

use crate::domain::Ticker;
use crate::ValidationError;

/// Ordered, duplicate-free list of tickers as given on the command line.
///
/// Position in the list is significant: it selects each ticker's palette color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerList(Vec<Ticker>);

impl TickerList {
    /// Parse a comma-separated list such as `AAPL,MSFT` or `'AAPL','MSFT'`.
    ///
    /// Quotes around individual entries are stripped, so the quoted form that hosts
    /// pass for SQL `IN (...)` clauses is accepted as well.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::EmptyTickerList);
        }

        let mut seen = HashSet::new();
        let mut tickers = Vec::new();
        for raw in input.split(',') {
            let unquoted = raw.trim().trim_matches(|ch| ch == '\'' || ch == '"');
            let ticker = Ticker::parse(unquoted)?;
            if !seen.insert(ticker.clone()) {
                return Err(ValidationError::DuplicateTicker {
                    ticker: ticker.to_string(),
                });
            }
            tickers.push(ticker);
        }

        Ok(Self(tickers))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ticker> {
        self.0.iter()
    }

    pub fn position(&self, ticker: &Ticker) -> Option<usize> {
        self.0.iter().position(|candidate| candidate == ticker)
    }

    pub fn as_strs(&self) -> Vec<&str> {
        self.0.iter().map(Ticker::as_str).collect()
    }
}

impl<'a> IntoIterator for &'a TickerList {
    type Item = &'a Ticker;
    type IntoIter = std::slice::Iter<'a, Ticker>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
