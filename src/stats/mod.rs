//! Statistical distributions, hypothesis tests, and descriptive statistics.
//!
//! Everything the salary dashboard computes about a sample lives here, built
//! on numr's runtime-generic tensor operations.
//!
//! # Runtime-Generic API
//!
//! Statistics algorithms are organized into three focused traits:
//! - [`DescriptiveStatisticsAlgorithms`] - Count, mean, std, quartiles and the mean's interval
//! - [`HypothesisTestingAlgorithms`] - Shapiro-Wilk, Bartlett and independent t-tests
//! - [`PowerTransformAlgorithms`] - Log and Box-Cox transforms
//!
//! All are generic over numr's `Runtime`; the crate ships the CPU backend.
//!
//! ```ignore
//! use salary_insights::stats::DescriptiveStatisticsAlgorithms;
//! use numr::runtime::cpu::{CpuClient, CpuDevice};
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//!
//! let data = Tensor::from_slice(&[5000.0, 6000.0, 5500.0, 5800.0], &[4], &device);
//! let stats = client.describe(&data)?;
//! let ci = client.mean_confidence_interval(&data, 1.96)?;
//! ```
//!
//! # Distributions
//!
//! Test statistics are referred to scalar distributions:
//!
//! ```ignore
//! use salary_insights::stats::{ContinuousDistribution, StudentT};
//!
//! let t = StudentT::new(6.0)?;
//! let p = t.two_sided_pvalue(2.447);
//! ```

// Backend implementations
mod cpu;

// Shared generic implementations
pub(crate) mod helpers;
mod impl_generic;

// Traits and types
mod traits;

// Core modules
mod continuous;
mod distribution;
mod error;

// Public API: Trait exports
pub use traits::{
    BoxCoxResult, ConfidenceInterval, DescriptiveStatisticsAlgorithms,
    HypothesisTestingAlgorithms, PowerTransformAlgorithms, TensorDescriptiveStats,
    TensorTestResult, VarianceAssumption, validate_stats_dtype,
};

// Public API: Distribution trait and types
pub use distribution::ContinuousDistribution;
pub use error::{StatsError, StatsResult};

// Public API: Continuous distributions
pub use continuous::{ChiSquared, StudentT};

// Public API: Host-side kernels
pub use impl_generic::{BOXCOX_LAMBDA_START, boxcox_llf, shapiro_wilk};
