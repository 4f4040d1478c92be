//! Shapiro-Wilk normality test.
//!
//! Coefficients and the p-value follow Royston's approximation (Applied
//! Statistics algorithm AS R94, 1995), valid for 3 <= n <= 5000:
//!
//! - expected normal order statistics `mᵢ = Φ⁻¹((i - 3/8) / (n + 1/4))`
//! - the two outermost weights are polynomial corrections in `u = 1/√n`
//! - the remaining weights are `mᵢ` rescaled so that `Σ aᵢ² = 1`
//!
//! `W` is the squared correlation between the weights and the ordered sample.
//! For n = 3 the p-value is exact; otherwise `ln(1 - W)` (after a further
//! transform when n <= 11) is standardized and referred to the upper normal tail.

use crate::stats::continuous::special;
use crate::stats::helpers::extract_values;
use crate::stats::{TensorTestResult, validate_stats_dtype};
use numr::error::{Error, Result};
use numr::ops::TensorOps;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;
use std::f64::consts::FRAC_1_SQRT_2;

const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const G: [f64; 2] = [-2.273, 0.459];
const C3: [f64; 4] = [0.5440, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];

/// Generic implementation of the Shapiro-Wilk test.
pub fn shapiro_impl<R, C>(client: &C, x: &Tensor<R>) -> Result<TensorTestResult<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    validate_stats_dtype(x.dtype())?;

    let n = x.numel();
    if n < 3 {
        return Err(Error::InvalidArgument {
            arg: "x",
            reason: "Shapiro-Wilk test requires at least 3 samples".to_string(),
        });
    }

    let sorted = client.sort(&x.contiguous(), 0, false)?;
    let values = extract_values(&sorted)?;
    let (w, pvalue) = shapiro_wilk(&values);

    Ok(TensorTestResult {
        statistic: Tensor::<R>::full_scalar(&[], x.dtype(), w, client.device()),
        pvalue: Tensor::<R>::full_scalar(&[], x.dtype(), pvalue, client.device()),
    })
}

/// Shapiro-Wilk `(W, p-value)` for an ascending sample of length >= 3.
///
/// A sample with zero range is reported as `(1.0, 1.0)`.
pub fn shapiro_wilk(sorted: &[f64]) -> (f64, f64) {
    let n = sorted.len();
    debug_assert!(n >= 3, "shapiro_wilk needs at least 3 values");

    let range = sorted[n - 1] - sorted[0];
    if range == 0.0 {
        return (1.0, 1.0);
    }

    let weights = shapiro_weights(n);
    let mean = sorted.iter().sum::<f64>() / n as f64;

    let mut sum_ax = 0.0;
    let mut sum_aa = 0.0;
    let mut sum_xx = 0.0;
    for (a, x) in weights.iter().zip(sorted) {
        // Scaling by the range keeps the sums well conditioned for salaries
        let centered = (x - mean) / range;
        sum_ax += a * centered;
        sum_aa += a * a;
        sum_xx += centered * centered;
    }

    let w = ((sum_ax * sum_ax) / (sum_aa * sum_xx)).min(1.0);
    (w, shapiro_pvalue(w, n))
}

/// Antisymmetric Shapiro-Wilk weights for ascending order statistics.
fn shapiro_weights(n: usize) -> Vec<f64> {
    if n == 3 {
        return vec![-FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2];
    }

    let n_f = n as f64;
    let m: Vec<f64> = (1..=n)
        .map(|i| special::norm_ppf((i as f64 - 0.375) / (n_f + 0.25)))
        .collect();
    let summ2: f64 = m.iter().map(|v| v * v).sum();
    let ssumm2 = summ2.sqrt();
    let u = 1.0 / n_f.sqrt();

    let mut a = vec![0.0; n];
    let a_n = poly(&C1, u) + m[n - 1] / ssumm2;

    let (phi, first_middle) = if n > 5 {
        let a_n1 = poly(&C2, u) + m[n - 2] / ssumm2;
        a[n - 2] = a_n1;
        a[1] = -a_n1;
        let phi = (summ2 - 2.0 * m[n - 1].powi(2) - 2.0 * m[n - 2].powi(2))
            / (1.0 - 2.0 * a_n.powi(2) - 2.0 * a_n1.powi(2));
        (phi, 2)
    } else {
        let phi = (summ2 - 2.0 * m[n - 1].powi(2)) / (1.0 - 2.0 * a_n.powi(2));
        (phi, 1)
    };
    a[n - 1] = a_n;
    a[0] = -a_n;

    let scale = phi.sqrt();
    for i in first_middle..(n - first_middle) {
        a[i] = m[i] / scale;
    }
    a
}

/// Royston's normalizing approximation for the null distribution of W.
fn shapiro_pvalue(w: f64, n: usize) -> f64 {
    if n == 3 {
        // Exact: 6/π (asin √W - asin √(3/4))
        let p = 6.0 / std::f64::consts::PI
            * (w.sqrt().asin() - (0.75_f64).sqrt().asin());
        return p.clamp(0.0, 1.0);
    }

    let n_f = n as f64;
    let y = (1.0 - w).ln();

    let (z_input, mu, sigma) = if n <= 11 {
        let gamma = poly(&G, n_f);
        if y >= gamma {
            return 1e-99;
        }
        (-(gamma - y).ln(), poly(&C3, n_f), poly(&C4, n_f).exp())
    } else {
        let ln_n = n_f.ln();
        (y, poly(&C5, ln_n), poly(&C6, ln_n).exp())
    };

    let z = (z_input - mu) / sigma;
    special::norm_cdf(-z)
}

/// Evaluate `c[0] + c[1] x + c[2] x² + ...` by Horner's rule.
fn poly(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
