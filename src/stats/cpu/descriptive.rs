//! CPU implementation of descriptive statistics algorithms.

use crate::stats::impl_generic::{describe_impl, mean_confidence_interval_impl, percentile_impl};
use crate::stats::traits::DescriptiveStatisticsAlgorithms;
use crate::stats::{ConfidenceInterval, TensorDescriptiveStats};
use numr::error::Result;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl DescriptiveStatisticsAlgorithms<CpuRuntime> for CpuClient {
    fn describe(&self, x: &Tensor<CpuRuntime>) -> Result<TensorDescriptiveStats<CpuRuntime>> {
        describe_impl(self, x)
    }

    fn percentile(&self, x: &Tensor<CpuRuntime>, p: f64) -> Result<Tensor<CpuRuntime>> {
        percentile_impl(self, x, p)
    }

    fn mean_confidence_interval(
        &self,
        x: &Tensor<CpuRuntime>,
        z: f64,
    ) -> Result<ConfidenceInterval> {
        mean_confidence_interval_impl(self, x, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::helpers::extract_scalar;
    use numr::runtime::cpu::CpuDevice;

    fn setup() -> (CpuClient, CpuDevice) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (client, device)
    }

    #[test]
    fn test_describe() {
        let (client, device) = setup();
        let data = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 2.0, 3.0, 4.0, 5.0], &[5], &device);

        let stats = client.describe(&data).unwrap();

        assert_eq!(stats.nobs, 5);
        assert!((extract_scalar(&stats.min).unwrap() - 1.0).abs() < 1e-10);
        assert!((extract_scalar(&stats.max).unwrap() - 5.0).abs() < 1e-10);
        assert!((extract_scalar(&stats.mean).unwrap() - 3.0).abs() < 1e-10);
        // Sample variance of 1..5 is 2.5
        assert!((extract_scalar(&stats.variance).unwrap() - 2.5).abs() < 1e-10);
        assert!((extract_scalar(&stats.std).unwrap() - 2.5f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_describe_single_observation() {
        let (client, device) = setup();
        let data = Tensor::<CpuRuntime>::from_slice(&[4200.0f64], &[1], &device);

        let stats = client.describe(&data).unwrap();

        assert_eq!(stats.nobs, 1);
        assert!((extract_scalar(&stats.mean).unwrap() - 4200.0).abs() < 1e-10);
        assert!(extract_scalar(&stats.std).unwrap().is_nan());
        assert!(extract_scalar(&stats.variance).unwrap().is_nan());
    }

    #[test]
    fn test_describe_empty_is_error() {
        let (client, device) = setup();
        let data = Tensor::<CpuRuntime>::from_slice(&[] as &[f64], &[0], &device);
        assert!(client.describe(&data).is_err());
    }

    #[test]
    fn test_percentile_quartiles() {
        let (client, device) = setup();
        let data = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 2.0, 3.0, 4.0, 5.0], &[5], &device);

        let q1 = DescriptiveStatisticsAlgorithms::percentile(&client, &data, 25.0).unwrap();
        let q2 = DescriptiveStatisticsAlgorithms::median(&client, &data).unwrap();
        let q3 = DescriptiveStatisticsAlgorithms::percentile(&client, &data, 75.0).unwrap();

        assert!((extract_scalar(&q1).unwrap() - 2.0).abs() < 1e-10);
        assert!((extract_scalar(&q2).unwrap() - 3.0).abs() < 1e-10);
        assert!((extract_scalar(&q3).unwrap() - 4.0).abs() < 1e-10);

        assert!(DescriptiveStatisticsAlgorithms::percentile(&client, &data, 101.0).is_err());
    }

    #[test]
    fn test_mean_confidence_interval() {
        let (client, device) = setup();
        let data = Tensor::<CpuRuntime>::from_slice(
            &[5000.0f64, 6000.0, 5500.0, 5800.0],
            &[4],
            &device,
        );

        let ci = client.mean_confidence_interval(&data, 1.96).unwrap();

        // mean 5575, s² = 567500 / 3
        let half = 1.96 * ((567500.0f64 / 3.0).sqrt() / 2.0);
        assert!((ci.lower - (5575.0 - half)).abs() < 1e-6);
        assert!((ci.upper - (5575.0 + half)).abs() < 1e-6);
        assert!(ci.contains(5575.0));
    }

    #[test]
    fn test_mean_confidence_interval_single_is_nan() {
        let (client, device) = setup();
        let data = Tensor::<CpuRuntime>::from_slice(&[3000.0f64], &[1], &device);

        let ci = client.mean_confidence_interval(&data, 1.96).unwrap();
        assert!(ci.lower.is_nan());
        assert!(ci.upper.is_nan());
        assert!(!ci.contains(3000.0));
    }
}
