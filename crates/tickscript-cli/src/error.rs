use thiserror::Error;

use tickscript_core::{AnalysisError, ChartError, MarkerError, ValidationError, WarehouseError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Warehouse(#[from] WarehouseError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Marker(#[from] MarkerError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Warehouse(_) => 3,
            Self::Analysis(_) => 4,
            Self::Chart(_) => 5,
            Self::Marker(_) | Self::Io(_) => 10,
        }
    }
}
