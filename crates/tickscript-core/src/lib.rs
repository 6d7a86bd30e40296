//! Core building blocks for the tickscript programs.
//!
//! This crate contains:
//! - Ticker, ticker list and trading date validation
//! - Quote rows grouped into per-ticker series
//! - Percent-change normalization and movement clustering
//! - The fixed color palette shared by the chart and the cluster report
//! - PNG chart rendering and marker-file writing

pub mod chart;
pub mod clustering;
pub mod delay;
pub mod domain;
pub mod error;
pub mod marker;
pub mod palette;
pub mod series;

pub use chart::{ChartError, ChartLine, ChartRenderer};
pub use clustering::{
    assign_clusters, cluster_labels, ClusterAssignment, KMeansConfig, MovementMatrix,
    DEFAULT_SEED,
};
pub use delay::Delay;
pub use domain::{group_by_ticker, DateRange, QuoteRow, Ticker, TickerList, TickerSeries, TradingDate};
pub use error::{AnalysisError, ValidationError};
pub use marker::{ensure_directory, write_marker, DirectoryState, MarkerError, MarkerFile};
pub use palette::{color_at, cycled_color, PaletteAssignment, PaletteColor, PALETTE, PALETTE_SIZE};
pub use series::NormalizedSeries;
pub use tickscript_warehouse::{QuoteRecord, QuoteStore, StoreConfig, WarehouseError};
