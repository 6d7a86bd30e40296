use crate::domain::{Ticker, TickerSeries, TradingDate};
use crate::AnalysisError;

/// Percent change of each close relative to the first close of the series.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries {
    pub ticker: Ticker,
    pub points: Vec<(TradingDate, f64)>,
}

impl NormalizedSeries {
    /// Normalize `(close - baseline) / baseline * 100` with the first close as baseline.
    ///
    /// # Errors
    /// [`AnalysisError::EmptySeries`] when there is no first row, and
    /// [`AnalysisError::ZeroBaseline`] when the first close is zero.
    pub fn from_series(series: &TickerSeries) -> Result<Self, AnalysisError> {
        let first = series
            .rows
            .first()
            .ok_or_else(|| AnalysisError::EmptySeries {
                ticker: series.ticker.to_string(),
            })?;

        let baseline = first.close;
        if baseline == 0.0 {
            return Err(AnalysisError::ZeroBaseline {
                ticker: series.ticker.to_string(),
            });
        }

        let points = series
            .rows
            .iter()
            .map(|row| (row.date, (row.close - baseline) / baseline * 100.0))
            .collect();

        Ok(Self {
            ticker: series.ticker.clone(),
            points,
        })
    }
}
