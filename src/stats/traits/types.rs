//! Types for statistical algorithms.

use numr::dtype::DType;
use numr::error::Result;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Descriptive statistics computed from a tensor.
///
/// All numeric fields are returned as tensors to preserve dtype information
/// and enable further tensor operations on the results.
#[derive(Debug, Clone)]
pub struct TensorDescriptiveStats<R: Runtime> {
    /// Number of observations
    pub nobs: usize,
    /// Minimum value (scalar tensor)
    pub min: Tensor<R>,
    /// Maximum value (scalar tensor)
    pub max: Tensor<R>,
    /// Arithmetic mean (scalar tensor)
    pub mean: Tensor<R>,
    /// Variance with Bessel's correction (scalar tensor, NaN when nobs < 2)
    pub variance: Tensor<R>,
    /// Standard deviation (scalar tensor, NaN when nobs < 2)
    pub std: Tensor<R>,
}

/// Result of a statistical hypothesis test.
#[derive(Debug, Clone)]
pub struct TensorTestResult<R: Runtime> {
    /// Test statistic value (scalar tensor)
    pub statistic: Tensor<R>,
    /// P-value: probability of obtaining result at least as extreme (scalar tensor)
    pub pvalue: Tensor<R>,
}

/// Normal-approximation confidence interval for a mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound: mean - z · std / √n
    pub lower: f64,
    /// Upper bound: mean + z · std / √n
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Interval whose bounds are both NaN.
    pub fn undefined() -> Self {
        Self {
            lower: f64::NAN,
            upper: f64::NAN,
        }
    }

    /// Whether `value` lies inside the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Variance assumption for the independent two-sample t-test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceAssumption {
    /// Pooled-variance Student t-test with n₁ + n₂ - 2 degrees of freedom.
    Equal,
    /// Welch's t-test with Welch-Satterthwaite degrees of freedom.
    Unequal,
}

/// Result of a Box-Cox power transform.
#[derive(Debug, Clone)]
pub struct BoxCoxResult<R: Runtime> {
    /// Transformed sample
    pub transformed: Tensor<R>,
    /// Maximum-likelihood λ used for the transform
    pub lambda: f64,
}

/// Validate that dtype is suitable for statistics operations.
pub fn validate_stats_dtype(dtype: DType) -> Result<()> {
    use numr::error::Error;

    match dtype {
        DType::F32 | DType::F64 => Ok(()),
        _ => Err(Error::UnsupportedDType {
            dtype,
            op: "statistics (requires F32 or F64)",
        }),
    }
}
