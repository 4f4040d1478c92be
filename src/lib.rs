//! salary-insights - salary analysis for the Brazilian data-professional survey
//!
//! Loads the survey once and answers two questions about the salary-bracket
//! midpoint:
//!
//! 1. How does salary vary across the categories of a variable (role, career
//!    stage, gender, race, experience)? Per-category count, mean, std, 95%
//!    interval for the mean, five-number summary and a boxplot.
//! 2. Do two categories earn the same on average? An adaptive two-sample test:
//!    Shapiro-Wilk normality check, log or Box-Cox transform when needed,
//!    Bartlett's variance test, then a Student or Welch t-test.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Dashboard  (describe_narrative / compare_narrative)     │
//! ├──────────────┬───────────────┬────────────┬──────────────┤
//! │   dataset    │   analysis    │    plot    │    report    │
//! └──────────────┴───────┬───────┴────────────┴──────────────┘
//!                        │ uses
//! ┌──────────────────────▼───────────────────────────────────┐
//! │         stats  (traits, impl_generic, cpu)  + optimize    │
//! └──────────────────────┬───────────────────────────────────┘
//!                        │ uses
//! ┌──────────────────────▼───────────────────────────────────┐
//! │                 numr  (tensors, special fn)               │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`dataset`] - CSV loading, variables, category grouping
//! - [`analysis`] - Descriptive summaries and the mean comparison pipeline
//! - [`stats`] - Runtime-generic statistics on numr tensors
//! - [`optimize`] - Bracketing scalar minimization (Box-Cox λ)
//! - [`plot`] - SVG boxplots and content-addressed artifacts
//! - [`report`] - Markdown narratives
//!
//! # Example
//!
//! ```ignore
//! use salary_insights::{Dashboard, DashboardOptions, Variable};
//!
//! let dashboard = Dashboard::open(&DashboardOptions::default())?;
//! println!("{}", dashboard.describe_narrative(Variable::Gender));
//! println!("{}", dashboard.compare_narrative(Variable::Gender, "Feminino", "Masculino"));
//! ```

pub mod analysis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod optimize;
pub mod plot;
pub mod report;
pub mod stats;

mod dashboard;

// Re-export main types for convenience
pub use analysis::{
    CategorySummary, ComparisonResult, DescriptiveReport, TestOutcome, Transform, TransformKind,
    Verdict,
};
pub use config::{ALPHA, DashboardOptions, Z_95};
pub use dashboard::Dashboard;
pub use dataset::{CategoryGroup, Dataset, SurveyRecord, Variable};
pub use error::{DashboardError, Result};
pub use plot::{ArtifactRef, ArtifactStore};
pub use stats::{
    ConfidenceInterval, ContinuousDistribution, DescriptiveStatisticsAlgorithms,
    HypothesisTestingAlgorithms, PowerTransformAlgorithms, StatsError, StatsResult,
    VarianceAssumption,
};

// Re-export numr types that users will commonly need
pub use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
pub use numr::tensor::Tensor;
