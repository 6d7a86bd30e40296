use thiserror::Error;

/// Input validation errors, raised before any side effect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker must start with an ASCII letter, digit or '^': '{ch}'")]
    TickerInvalidStart { ch: char },
    #[error("ticker contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },

    #[error("ticker list must contain at least one ticker")]
    EmptyTickerList,
    #[error("ticker '{ticker}' appears more than once in the ticker list")]
    DuplicateTicker { ticker: String },

    #[error("date must be formatted as YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("start date {start} is after end date {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("delay must be a non-negative number of seconds: '{value}'")]
    InvalidDelay { value: String },

    #[error("cluster count must be an integer: '{value}'")]
    InvalidClusterCount { value: String },
    #[error("cluster count {clusters} must be between 1 and the number of tickers ({tickers})")]
    ClusterCount { clusters: usize, tickers: usize },

    #[error("palette index {index} is out of range (palette has {size} colors)")]
    PaletteRange { index: usize, size: usize },
}

/// Failures while deriving series or clusters from loaded quotes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("no quotes found for '{ticker}' in the requested date range")]
    EmptySeries { ticker: String },

    #[error("first close of '{ticker}' is zero; cannot normalize against it")]
    ZeroBaseline { ticker: String },

    #[error("number of rows for '{ticker}' should be {expected}, but is actually {actual}")]
    LengthMismatch {
        ticker: String,
        expected: usize,
        actual: usize,
    },

    #[error("clustering failed: {0}")]
    Clustering(String),
}
