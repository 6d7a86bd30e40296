//! K-means clustering of tickers by the shape of their daily price movement.

use linfa::traits::{Fit, Predict};
use linfa::DatasetBase;
use linfa_clustering::KMeans;
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::domain::{Ticker, TickerSeries};
use crate::palette::{PaletteAssignment, PaletteColor};
use crate::{AnalysisError, ValidationError};

/// Seed used unless a caller overrides it, so repeated runs print the same clusters.
pub const DEFAULT_SEED: u64 = 42;

/// Parameters of one clustering run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KMeansConfig {
    pub clusters: usize,
    pub seed: u64,
    pub n_runs: usize,
    pub max_iterations: u64,
    pub tolerance: f64,
}

impl KMeansConfig {
    /// Validate `1 <= clusters <= ticker_count`.
    pub fn new(clusters: usize, ticker_count: usize) -> Result<Self, ValidationError> {
        if clusters == 0 || clusters > ticker_count {
            return Err(ValidationError::ClusterCount {
                clusters,
                tickers: ticker_count,
            });
        }

        Ok(Self {
            clusters,
            seed: DEFAULT_SEED,
            n_runs: 10,
            max_iterations: 300,
            tolerance: 1e-4,
        })
    }
}

/// Movement vectors of all tickers stacked as rows, on a common date axis.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementMatrix {
    tickers: Vec<Ticker>,
    values: Array2<f64>,
}

impl MovementMatrix {
    /// Stack `close - open` movements, one row per ticker.
    ///
    /// # Errors
    /// [`AnalysisError::EmptySeries`] if the first series has no rows, and
    /// [`AnalysisError::LengthMismatch`] naming the first ticker whose row count differs
    /// from the first ticker's.
    pub fn from_series(series: &[TickerSeries]) -> Result<Self, AnalysisError> {
        let Some(first) = series.first() else {
            return Err(AnalysisError::Clustering(String::from(
                "no series to cluster",
            )));
        };
        if first.is_empty() {
            return Err(AnalysisError::EmptySeries {
                ticker: first.ticker.to_string(),
            });
        }

        let width = first.len();
        let mut values = Array2::<f64>::zeros((series.len(), width));
        for (index, entry) in series.iter().enumerate() {
            if entry.len() != width {
                return Err(AnalysisError::LengthMismatch {
                    ticker: entry.ticker.to_string(),
                    expected: width,
                    actual: entry.len(),
                });
            }
            values
                .row_mut(index)
                .assign(&Array1::from(entry.movements()));
        }

        Ok(Self {
            tickers: series.iter().map(|entry| entry.ticker.clone()).collect(),
            values,
        })
    }

    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    /// Scale each row to unit Euclidean length; all-zero rows stay zero.
    pub fn normalized(&self) -> Array2<f64> {
        let mut normalized = self.values.clone();
        for mut row in normalized.axis_iter_mut(Axis(0)) {
            let norm = row.dot(&row).sqrt();
            if norm > 0.0 {
                row.mapv_inplace(|value| value / norm);
            }
        }
        normalized
    }
}

/// Assign a cluster label to every row of `matrix`.
///
/// Labels are renumbered by first appearance in ticker order, so the first ticker is
/// always in cluster 0 and a single cluster never runs the fit.
pub fn cluster_labels(
    matrix: &MovementMatrix,
    config: &KMeansConfig,
) -> Result<Vec<usize>, AnalysisError> {
    let rows = matrix.tickers.len();
    if config.clusters == 0 || config.clusters > rows {
        return Err(AnalysisError::Clustering(format!(
            "cannot form {} clusters from {rows} tickers",
            config.clusters
        )));
    }
    if config.clusters == 1 {
        return Ok(vec![0; rows]);
    }

    let records = matrix.normalized();
    let dataset = DatasetBase::from(records.clone());
    let rng = StdRng::seed_from_u64(config.seed);
    let model = KMeans::params_with_rng(config.clusters, rng)
        .n_runs(config.n_runs)
        .max_n_iterations(config.max_iterations)
        .tolerance(config.tolerance)
        .fit(&dataset)
        .map_err(|error| AnalysisError::Clustering(error.to_string()))?;
    let raw: Array1<usize> = model.predict(&records);

    debug!(
        tickers = rows,
        clusters = config.clusters,
        seed = config.seed,
        "fitted k-means"
    );
    Ok(renumber_by_first_appearance(raw.iter().copied()))
}

fn renumber_by_first_appearance(labels: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut seen: Vec<usize> = Vec::new();
    labels
        .map(|label| match seen.iter().position(|raw| *raw == label) {
            Some(renumbered) => renumbered,
            None => {
                seen.push(label);
                seen.len() - 1
            }
        })
        .collect()
}

/// One output line of the cluster report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterAssignment {
    pub cluster: usize,
    pub ticker: Ticker,
    pub color: PaletteColor,
}

/// Pair labels with tickers and colors, sorted by cluster; ties keep ticker order.
pub fn assign_clusters(
    tickers: &[Ticker],
    labels: &[usize],
    palette: &PaletteAssignment,
) -> Result<Vec<ClusterAssignment>, AnalysisError> {
    let mut assignments = tickers
        .iter()
        .zip(labels)
        .map(|(ticker, label)| -> Result<ClusterAssignment, AnalysisError> {
            let color = palette.color_of(ticker).ok_or_else(|| {
                AnalysisError::Clustering(format!("no palette color assigned to '{ticker}'"))
            })?;
            Ok(ClusterAssignment {
                cluster: *label,
                ticker: ticker.clone(),
                color,
            })
        })
        .collect::<Result<Vec<_>, AnalysisError>>()?;

    assignments.sort_by_key(|assignment| assignment.cluster);
    Ok(assignments)
}
