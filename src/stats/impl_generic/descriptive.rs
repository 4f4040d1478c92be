//! Generic descriptive statistics implementations.

use crate::stats::helpers::extract_scalar;
use crate::stats::{ConfidenceInterval, TensorDescriptiveStats, validate_stats_dtype};
use numr::error::{Error, Result};
use numr::ops::{StatisticalOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Generic implementation of `describe` for any Runtime.
pub fn describe_impl<R, C>(client: &C, x: &Tensor<R>) -> Result<TensorDescriptiveStats<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    validate_stats_dtype(x.dtype())?;

    if x.numel() == 0 {
        return Err(Error::InvalidArgument {
            arg: "x",
            reason: "cannot compute statistics on empty tensor".to_string(),
        });
    }

    let x_contig = x.contiguous();
    let n = x_contig.numel();

    let all_dims: Vec<usize> = (0..x_contig.ndim()).collect();

    let mean_tensor = client.mean(&x_contig, &all_dims, false)?;
    let min_tensor = client.min(&x_contig, &all_dims, false)?;
    let max_tensor = client.max(&x_contig, &all_dims, false)?;

    // Bessel's correction divides by n - 1, undefined for one observation
    let (var_tensor, std_tensor) = if n > 1 {
        (
            client.var(&x_contig, &all_dims, false, 1)?,
            client.std(&x_contig, &all_dims, false, 1)?,
        )
    } else {
        (
            Tensor::<R>::full_scalar(&[], x.dtype(), f64::NAN, client.device()),
            Tensor::<R>::full_scalar(&[], x.dtype(), f64::NAN, client.device()),
        )
    };

    Ok(TensorDescriptiveStats {
        nobs: n,
        min: min_tensor,
        max: max_tensor,
        mean: mean_tensor,
        variance: var_tensor,
        std: std_tensor,
    })
}

/// Generic implementation of `percentile` for any Runtime.
pub fn percentile_impl<R, C>(client: &C, x: &Tensor<R>, p: f64) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    validate_stats_dtype(x.dtype())?;

    if !(0.0..=100.0).contains(&p) {
        return Err(Error::InvalidArgument {
            arg: "p",
            reason: format!("percentile must be in [0, 100], got {}", p),
        });
    }
    if x.numel() == 0 {
        return Err(Error::InvalidArgument {
            arg: "x",
            reason: "cannot compute percentile of empty tensor".to_string(),
        });
    }

    StatisticalOps::percentile(client, x, p, None, false)
}

/// Generic implementation of the normal-approximation interval for the mean.
///
/// ```text
/// mean ± z · s / √n
/// ```
pub fn mean_confidence_interval_impl<R, C>(
    client: &C,
    x: &Tensor<R>,
    z: f64,
) -> Result<ConfidenceInterval>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    if x.numel() < 2 {
        return Ok(ConfidenceInterval::undefined());
    }

    let stats = describe_impl(client, x)?;
    let mean = extract_scalar(&stats.mean)?;
    let std = extract_scalar(&stats.std)?;
    let half_width = z * (std / (stats.nobs as f64).sqrt());

    Ok(ConfidenceInterval {
        lower: mean - half_width,
        upper: mean + half_width,
    })
}
