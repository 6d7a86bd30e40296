use std::io::Write;

use tickscript_core::{cycled_color, ChartLine, ChartRenderer, NormalizedSeries};
use tracing::info;

use super::load_series;
use crate::config::ChartConfig;
use crate::error::CliError;
use crate::output;

/// Load, normalize, render and print the chart. Nothing reaches `out` unless every
/// step succeeded. Line colors follow list position and wrap after the last palette
/// entry.
pub fn run(config: &ChartConfig, out: &mut impl Write) -> Result<(), CliError> {
    let series = load_series(&config.query)?;

    let lines = series
        .iter()
        .enumerate()
        .map(|(index, entry)| -> Result<ChartLine, CliError> {
            Ok(ChartLine {
                color: cycled_color(index),
                series: NormalizedSeries::from_series(entry)?,
            })
        })
        .collect::<Result<Vec<_>, CliError>>()?;

    let png = ChartRenderer::default().render_png(&lines)?;
    info!(bytes = png.len(), "encoded chart");
    output::write_chart(out, &png)?;
    Ok(())
}
