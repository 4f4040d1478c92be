//! Application errors.
//!
//! The statistics kernels report through `numr::error::Error`; a distribution
//! that cannot be built yields a NaN p-value instead of an error. Everything
//! that reaches the dashboard is a [`DashboardError`].

use std::path::PathBuf;

/// Result type for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors raised while loading data, analysing it or producing artifacts.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("{}: {}", .path.display(), .source)]
    DataAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{0}' in dataset header")]
    MissingColumn(String),

    #[error("Category '{category}' of {variable} has no salary observations")]
    EmptySample { variable: String, category: String },

    #[error("{test} requires at least {required} observations, got {got} for '{category}'")]
    InsufficientData {
        test: &'static str,
        required: usize,
        got: usize,
        category: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Numeric error: {0}")]
    Numeric(#[from] numr::error::Error),
}

impl DashboardError {
    /// Wrap an I/O failure on `path`.
    pub fn data_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DataAccess {
            path: path.into(),
            source,
        }
    }
}
