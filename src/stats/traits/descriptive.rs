//! Descriptive statistics algorithms.

use super::{ConfidenceInterval, TensorDescriptiveStats};
use numr::error::Result;
use numr::ops::TensorOps;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Descriptive statistics algorithms for tensors.
///
/// Provides the summaries shown per salary category: count, central tendency,
/// dispersion, quartiles and a normal-approximation interval for the mean.
pub trait DescriptiveStatisticsAlgorithms<R: Runtime>: TensorOps<R> {
    /// Compute count, min, max, mean, variance and std for a 1D tensor.
    ///
    /// Variance and std use Bessel's correction and are NaN for a single
    /// observation.
    fn describe(&self, x: &Tensor<R>) -> Result<TensorDescriptiveStats<R>>;

    /// Compute the p-th percentile (0-100) with linear interpolation.
    fn percentile(&self, x: &Tensor<R>, p: f64) -> Result<Tensor<R>>;

    /// Compute the median (50th percentile).
    fn median(&self, x: &Tensor<R>) -> Result<Tensor<R>> {
        DescriptiveStatisticsAlgorithms::percentile(self, x, 50.0)
    }

    /// Interval `mean ± z · std / √n` for the population mean.
    ///
    /// No small-sample correction is applied; the bounds are NaN when the
    /// sample has fewer than two observations.
    fn mean_confidence_interval(&self, x: &Tensor<R>, z: f64) -> Result<ConfidenceInterval>;
}
