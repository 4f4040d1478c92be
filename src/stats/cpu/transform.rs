//! CPU implementation of power transforms.

use crate::stats::BoxCoxResult;
use crate::stats::impl_generic::{boxcox_impl, boxcox_with_lambda_impl, log_transform_impl};
use crate::stats::traits::PowerTransformAlgorithms;
use numr::error::Result;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl PowerTransformAlgorithms<CpuRuntime> for CpuClient {
    fn log_transform(&self, x: &Tensor<CpuRuntime>) -> Result<Tensor<CpuRuntime>> {
        log_transform_impl(self, x)
    }

    fn boxcox(&self, x: &Tensor<CpuRuntime>) -> Result<BoxCoxResult<CpuRuntime>> {
        boxcox_impl(self, x)
    }

    fn boxcox_with_lambda(
        &self,
        x: &Tensor<CpuRuntime>,
        lambda: f64,
    ) -> Result<Tensor<CpuRuntime>> {
        boxcox_with_lambda_impl(self, x, lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::boxcox_llf;
    use numr::runtime::cpu::CpuDevice;

    fn setup() -> (CpuClient, CpuDevice) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (client, device)
    }

    #[test]
    fn test_log_transform() {
        let (client, device) = setup();
        let data = Tensor::<CpuRuntime>::from_slice(&[1.0f64, std::f64::consts::E, 100.0], &[3], &device);

        let logged: Vec<f64> = client.log_transform(&data).unwrap().to_vec();
        assert!((logged[0] - 0.0).abs() < 1e-12);
        assert!((logged[1] - 1.0).abs() < 1e-12);
        assert!((logged[2] - 100.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_log_transform_rejects_zero() {
        let (client, device) = setup();
        let data = Tensor::<CpuRuntime>::from_slice(&[0.0f64, 1.0, 2.0], &[3], &device);
        assert!(client.log_transform(&data).is_err());
    }

    #[test]
    fn test_boxcox_with_lambda() {
        let (client, device) = setup();
        let data = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 4.0, 9.0], &[3], &device);

        // λ = 0.5: (√x - 1) / 0.5
        let y: Vec<f64> = client.boxcox_with_lambda(&data, 0.5).unwrap().to_vec();
        assert!((y[0] - 0.0).abs() < 1e-10);
        assert!((y[1] - 2.0).abs() < 1e-10);
        assert!((y[2] - 4.0).abs() < 1e-10);

        // λ = 0 is the log limit
        let y0: Vec<f64> = client.boxcox_with_lambda(&data, 0.0).unwrap().to_vec();
        assert!((y0[1] - 4.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_boxcox_fits_maximum_likelihood() {
        let (client, device) = setup();
        let values = [1200.0f64, 1500.0, 1800.0, 2500.0, 3900.0, 7000.0, 15000.0, 32000.0];
        let data = Tensor::<CpuRuntime>::from_slice(&values, &[values.len()], &device);

        let result = client.boxcox(&data).unwrap();
        assert_eq!(result.transformed.numel(), values.len());

        let best = boxcox_llf(&values, result.lambda);
        for lambda in [-1.0, 0.0, 0.5, 1.0] {
            assert!(best >= boxcox_llf(&values, lambda) - 1e-9);
        }
    }

    #[test]
    fn test_boxcox_rejects_non_positive() {
        let (client, device) = setup();
        let data = Tensor::<CpuRuntime>::from_slice(&[-10.0f64, 5.0, 7.0], &[3], &device);
        assert!(client.boxcox(&data).is_err());
    }
}
