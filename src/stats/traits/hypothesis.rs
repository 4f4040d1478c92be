//! Hypothesis testing algorithms.

use super::{TensorTestResult, VarianceAssumption};
use numr::error::Result;
use numr::ops::TensorOps;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Hypothesis testing algorithms for tensors.
///
/// Covers the tests the salary comparison chains together: a normality test,
/// a variance homogeneity test and the independent two-sample t-test.
pub trait HypothesisTestingAlgorithms<R: Runtime>: TensorOps<R> {
    /// Independent two-sample t-test.
    ///
    /// Tests whether two independent samples have different means.
    /// `VarianceAssumption::Equal` pools the variances (Student);
    /// `VarianceAssumption::Unequal` applies Welch's correction.
    /// Returns the t statistic and the two-sided p-value.
    fn ttest_ind(
        &self,
        a: &Tensor<R>,
        b: &Tensor<R>,
        variance: VarianceAssumption,
    ) -> Result<TensorTestResult<R>>;

    /// Shapiro-Wilk test for normality.
    ///
    /// Tests whether a sample comes from a normal distribution.
    /// Requires n >= 3. Returns W and its p-value.
    fn shapiro(&self, x: &Tensor<R>) -> Result<TensorTestResult<R>>;

    /// Bartlett's test for equality of variances.
    ///
    /// Tests whether two or more groups have equal variances.
    /// Assumes normal data. Each group needs at least 2 observations.
    fn bartlett(&self, groups: &[&Tensor<R>]) -> Result<TensorTestResult<R>>;
}
