//! Generic power transform implementations.
//!
//! The Box-Cox family is
//!
//! ```text
//! y(λ) = (x^λ - 1) / λ    λ ≠ 0
//! y(0) = ln x
//! ```
//!
//! and λ is chosen to maximize the profile log-likelihood
//!
//! ```text
//! llf(λ) = (λ - 1) Σ ln xᵢ - n/2 · ln σ̂²(y(λ))
//! ```
//!
//! where σ̂² is the population variance. Since `σ̂²(y) = σ̂²(x^λ) / λ²`, the
//! variance is taken on `x^λ` directly so that large negative λ does not
//! cancel against the `- 1`. The powers are scaled by the extreme `x^λ`
//! before squaring, so |λ| in the tens stays finite.
//!
//! λ is unbounded: the search grows a bracket from [`BOXCOX_LAMBDA_START`]
//! until the likelihood turns down, then narrows it.

use crate::optimize::scalar::{ScalarOptions, minimize_scalar_brent};
use crate::stats::helpers::{extract_values, require_positive};
use crate::stats::{BoxCoxResult, validate_stats_dtype};
use numr::error::{Error, Result};
use numr::ops::{ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Starting pair for the Box-Cox λ bracket search.
pub const BOXCOX_LAMBDA_START: (f64, f64) = (-2.0, 2.0);

/// |λ| below this is treated as the logarithmic limit.
const LAMBDA_ZERO_TOL: f64 = 1e-12;

/// Generic implementation of the natural-log transform.
pub fn log_transform_impl<R, C>(client: &C, x: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    validate_stats_dtype(x.dtype())?;
    require_positive(client, x, "log transform")?;
    client.log(&x.contiguous())
}

/// Generic implementation of Box-Cox with a fixed λ.
pub fn boxcox_with_lambda_impl<R, C>(client: &C, x: &Tensor<R>, lambda: f64) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    validate_stats_dtype(x.dtype())?;
    require_positive(client, x, "Box-Cox transform")?;

    let log_x = client.log(&x.contiguous())?;
    if lambda.abs() < LAMBDA_ZERO_TOL {
        return Ok(log_x);
    }

    // (exp(λ ln x) - 1) / λ
    let scaled = client.mul_scalar(&log_x, lambda)?;
    let powered = client.exp(&scaled)?;
    let shifted = client.sub_scalar(&powered, 1.0)?;
    client.mul_scalar(&shifted, 1.0 / lambda)
}

/// Generic implementation of Box-Cox with maximum-likelihood λ.
pub fn boxcox_impl<R, C>(client: &C, x: &Tensor<R>) -> Result<BoxCoxResult<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    validate_stats_dtype(x.dtype())?;
    require_positive(client, x, "Box-Cox transform")?;

    let values = extract_values(x)?;
    let lambda = fit_boxcox_lambda(&values, &ScalarOptions::default())?;
    let transformed = boxcox_with_lambda_impl(client, x, lambda)?;

    Ok(BoxCoxResult {
        transformed,
        lambda,
    })
}

/// Maximum-likelihood λ, searched outward from [`BOXCOX_LAMBDA_START`].
fn fit_boxcox_lambda(values: &[f64], options: &ScalarOptions) -> Result<f64> {
    if values.len() < 2 {
        return Err(Error::InvalidArgument {
            arg: "x",
            reason: "Box-Cox fit requires at least 2 samples".to_string(),
        });
    }
    let first = values[0];
    if values.iter().all(|&v| v == first) {
        return Err(Error::InvalidArgument {
            arg: "x",
            reason: "Box-Cox requires non-constant data".to_string(),
        });
    }

    let result = minimize_scalar_brent(
        |lambda| -boxcox_llf(values, lambda),
        Some(BOXCOX_LAMBDA_START),
        options,
    )
    .map_err(|e| Error::InvalidArgument {
        arg: "x",
        reason: format!("Box-Cox lambda search failed: {}", e),
    })?;

    Ok(result.x)
}

/// Box-Cox profile log-likelihood of strictly positive `values` at `lambda`.
///
/// Constant terms are dropped, so only differences between λ values are
/// meaningful.
pub fn boxcox_llf(values: &[f64], lambda: f64) -> f64 {
    let n = values.len() as f64;
    let logs: Vec<f64> = values.iter().map(|v| v.ln()).collect();
    let log_sum: f64 = logs.iter().sum();

    let log_variance = if lambda.abs() < LAMBDA_ZERO_TOL {
        population_variance(&logs).ln()
    } else {
        // σ̂²(x^λ) = e^(2λ·shift) σ̂²(e^(λ(ln x - shift)))
        let shift = if lambda > 0.0 {
            logs.iter().copied().fold(f64::NEG_INFINITY, f64::max)
        } else {
            logs.iter().copied().fold(f64::INFINITY, f64::min)
        };
        let powered: Vec<f64> = logs.iter().map(|l| (lambda * (l - shift)).exp()).collect();
        population_variance(&powered).ln() + 2.0 * lambda * shift - 2.0 * lambda.abs().ln()
    };

    (lambda - 1.0) * log_sum - n / 2.0 * log_variance
}

fn population_variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}
