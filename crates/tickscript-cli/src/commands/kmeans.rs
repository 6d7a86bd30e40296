use std::io::Write;

use tickscript_core::{assign_clusters, cluster_labels, MovementMatrix};
use tracing::info;

use super::load_series;
use crate::config::ClusterConfig;
use crate::error::CliError;
use crate::output;

pub fn run(config: &ClusterConfig, out: &mut impl Write) -> Result<(), CliError> {
    let series = load_series(&config.query)?;
    let matrix = MovementMatrix::from_series(&series)?;
    let labels = cluster_labels(&matrix, &config.kmeans)?;
    let report = assign_clusters(matrix.tickers(), &labels, &config.palette)?;

    info!(
        tickers = report.len(),
        clusters = config.kmeans.clusters,
        "clustered tickers"
    );
    output::write_clusters(out, &report)?;
    Ok(())
}
