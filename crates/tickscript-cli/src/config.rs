//! Validated per-binary configuration.
//!
//! Every `from_args` constructor runs before the script prints, sleeps, writes or
//! queries anything, so a bad argument never leaves partial output behind.

use std::path::PathBuf;

use tickscript_core::{
    DateRange, Delay, KMeansConfig, PaletteAssignment, StoreConfig, TickerList, ValidationError,
};

use crate::cli::{ChartArgs, EchoDelayArgs, EchoFileArgs, KmeansArgs};

#[derive(Debug, Clone, PartialEq)]
pub struct EchoConfig {
    pub title: String,
    pub delay: Delay,
    pub arg2: String,
    pub arg3: String,
}

impl EchoConfig {
    pub fn from_args(args: EchoDelayArgs) -> Result<Self, ValidationError> {
        Ok(Self {
            delay: Delay::parse(&args.delay)?,
            title: args.title,
            arg2: args.arg2,
            arg3: args.arg3,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerConfig {
    pub title: String,
    pub delay: Delay,
    pub output_dir: PathBuf,
    pub arg: String,
}

impl MarkerConfig {
    pub fn from_args(args: EchoFileArgs) -> Result<Self, ValidationError> {
        Ok(Self {
            delay: Delay::parse(&args.delay)?,
            title: args.title,
            output_dir: args.file_output_dir,
            arg: args.arg,
        })
    }
}

/// Store location, tickers and range shared by the stock scripts.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    pub store: StoreConfig,
    pub tickers: TickerList,
    pub range: DateRange,
}

impl QueryConfig {
    fn parse(
        db_path: PathBuf,
        tickers: &str,
        start: &str,
        end: &str,
    ) -> Result<Self, ValidationError> {
        let tickers = TickerList::parse(tickers)?;
        let range = DateRange::parse(start, end)?;
        Ok(Self {
            store: StoreConfig::new(db_path),
            tickers,
            range,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub query: QueryConfig,
}

impl ChartConfig {
    pub fn from_args(args: ChartArgs) -> Result<Self, ValidationError> {
        Ok(Self {
            query: QueryConfig::parse(
                args.db_path,
                &args.tickers,
                &args.start_date,
                &args.end_date,
            )?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterConfig {
    pub query: QueryConfig,
    pub kmeans: KMeansConfig,
    /// Bounds-checked: the report prints one distinct color per ticker.
    pub palette: PaletteAssignment,
}

impl ClusterConfig {
    pub fn from_args(args: KmeansArgs) -> Result<Self, ValidationError> {
        let query = QueryConfig::parse(
            args.db_path,
            &args.tickers,
            &args.start_date,
            &args.end_date,
        )?;
        let clusters = args.clusters.trim().parse::<usize>().map_err(|_| {
            ValidationError::InvalidClusterCount {
                value: args.clusters.clone(),
            }
        })?;
        let kmeans = KMeansConfig::new(clusters, query.tickers.len())?;
        let palette = PaletteAssignment::for_tickers(&query.tickers)?;
        Ok(Self {
            query,
            kmeans,
            palette,
        })
    }
}
