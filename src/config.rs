//! Dashboard configuration and the fixed statistical constants.

use std::path::PathBuf;

/// Significance level shared by every decision in the comparison pipeline.
pub const ALPHA: f64 = 0.05;

/// Two-sided 95% normal quantile used for the mean's interval.
pub const Z_95: f64 = 1.96;

/// Spacing of the horizontal reference lines on the boxplot, in R$.
pub const GRIDLINE_STEP: f64 = 5000.0;

/// Number of reference lines (5,000 up to 40,000).
pub const GRIDLINE_COUNT: usize = 8;

/// Default dataset file name, resolved against the working directory.
pub const DEFAULT_DATASET: &str = "base_final.csv";

/// Runtime options for a [`crate::Dashboard`].
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// CSV file with the survey records.
    pub dataset_path: PathBuf,
    /// Directory where plot artifacts are written.
    pub artifact_dir: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive for the shell.
    pub log_filter: String,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            artifact_dir: std::env::temp_dir().join("salary-insights"),
            log_filter: "info".to_string(),
        }
    }
}

impl DashboardOptions {
    /// Options reading `dataset_path` and writing artifacts into `artifact_dir`.
    pub fn new(dataset_path: impl Into<PathBuf>, artifact_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            artifact_dir: artifact_dir.into(),
            ..Self::default()
        }
    }

    /// Replace the log filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
