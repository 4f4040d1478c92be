//! Statistical algorithm traits.
//!
//! This module defines three focused trait groups:
//! - DescriptiveStatisticsAlgorithms - Summaries of a salary sample (mean, std, quartiles, CI)
//! - HypothesisTestingAlgorithms - Normality, variance homogeneity and mean comparison tests
//! - PowerTransformAlgorithms - Normalizing transforms (log, Box-Cox)

mod descriptive;
mod hypothesis;
mod transform;
mod types;

pub use descriptive::DescriptiveStatisticsAlgorithms;
pub use hypothesis::HypothesisTestingAlgorithms;
pub use transform::PowerTransformAlgorithms;
pub use types::{
    BoxCoxResult, ConfidenceInterval, TensorDescriptiveStats, TensorTestResult,
    VarianceAssumption, validate_stats_dtype,
};
