//! CPU implementation of hypothesis testing algorithms.

use crate::stats::impl_generic::{bartlett_impl, shapiro_impl, ttest_ind_impl};
use crate::stats::traits::HypothesisTestingAlgorithms;
use crate::stats::{TensorTestResult, VarianceAssumption};
use numr::error::Result;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl HypothesisTestingAlgorithms<CpuRuntime> for CpuClient {
    fn ttest_ind(
        &self,
        a: &Tensor<CpuRuntime>,
        b: &Tensor<CpuRuntime>,
        variance: VarianceAssumption,
    ) -> Result<TensorTestResult<CpuRuntime>> {
        ttest_ind_impl(self, a, b, variance)
    }

    fn shapiro(&self, x: &Tensor<CpuRuntime>) -> Result<TensorTestResult<CpuRuntime>> {
        shapiro_impl(self, x)
    }

    fn bartlett(&self, groups: &[&Tensor<CpuRuntime>]) -> Result<TensorTestResult<CpuRuntime>> {
        bartlett_impl(self, groups)
    }
}
