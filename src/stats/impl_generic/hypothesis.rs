//! Generic hypothesis testing implementations.
//!
//! # Implemented Tests
//!
//! ## Independent two-sample t-test (`ttest_ind_impl`)
//!
//! With [`VarianceAssumption::Equal`] the variances are pooled:
//!
//! ```text
//! s_p² = ((n₁-1)s₁² + (n₂-1)s₂²) / (n₁ + n₂ - 2)
//! t    = (x̄₁ - x̄₂) / √(s_p² (1/n₁ + 1/n₂))        df = n₁ + n₂ - 2
//! ```
//!
//! With [`VarianceAssumption::Unequal`] (Welch):
//!
//! ```text
//! t  = (x̄₁ - x̄₂) / √(s₁²/n₁ + s₂²/n₂)
//! df = (s₁²/n₁ + s₂²/n₂)² / [(s₁²/n₁)²/(n₁-1) + (s₂²/n₂)²/(n₂-1)]
//! ```
//!
//! The df is evaluated through the variance shares `wᵢ = (sᵢ²/nᵢ) / Σ sⱼ²/nⱼ`
//! as `1 / Σ wᵢ²/(nᵢ-1)`, which stays finite for Box-Cox outputs near 1e100.
//!
//! ## Bartlett's test (`bartlett_impl`)
//!
//! ```text
//! T = [(N-k) ln s_p² - Σ (nᵢ-1) ln sᵢ²] / [1 + (Σ 1/(nᵢ-1) - 1/(N-k)) / (3(k-1))]
//! ```
//!
//! referred to χ²(k - 1).
//!
//! # Degenerate samples
//!
//! Zero-variance groups make the statistics undefined. Instead of failing, the
//! tests return NaN (or the limiting value when it exists) so callers can show
//! the degenerate result.

use crate::stats::helpers::extract_scalar;
use crate::stats::{
    ChiSquared, ContinuousDistribution, StudentT, TensorTestResult, VarianceAssumption,
    validate_stats_dtype,
};
use numr::error::{Error, Result};
use numr::ops::TensorOps;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Generic implementation of the independent two-sample t-test.
pub fn ttest_ind_impl<R, C>(
    client: &C,
    a: &Tensor<R>,
    b: &Tensor<R>,
    variance: VarianceAssumption,
) -> Result<TensorTestResult<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    validate_stats_dtype(a.dtype())?;
    validate_stats_dtype(b.dtype())?;

    let a_contig = a.contiguous();
    let b_contig = b.contiguous();

    let n1 = a_contig.numel();
    let n2 = b_contig.numel();

    if n1 < 2 || n2 < 2 {
        return Err(Error::InvalidArgument {
            arg: "a/b",
            reason: "t-test requires at least 2 samples per group".to_string(),
        });
    }

    let all_dims_a: Vec<usize> = (0..a_contig.ndim()).collect();
    let all_dims_b: Vec<usize> = (0..b_contig.ndim()).collect();

    let mean1 = extract_scalar(&client.mean(&a_contig, &all_dims_a, false)?)?;
    let mean2 = extract_scalar(&client.mean(&b_contig, &all_dims_b, false)?)?;
    let var1 = extract_scalar(&client.var(&a_contig, &all_dims_a, false, 1)?)?;
    let var2 = extract_scalar(&client.var(&b_contig, &all_dims_b, false, 1)?)?;

    let n1_f = n1 as f64;
    let n2_f = n2 as f64;

    let (t_stat, df) = match variance {
        VarianceAssumption::Equal => {
            let df = n1_f + n2_f - 2.0;
            let pooled = ((n1_f - 1.0) * var1 + (n2_f - 1.0) * var2) / df;
            let se = (pooled * (1.0 / n1_f + 1.0 / n2_f)).sqrt();
            ((mean1 - mean2) / se, df)
        }
        VarianceAssumption::Unequal => {
            let total = var1 / n1_f + var2 / n2_f;
            let w1 = var1 / n1_f / total;
            let w2 = var2 / n2_f / total;
            let df = 1.0 / (w1 * w1 / (n1_f - 1.0) + w2 * w2 / (n2_f - 1.0));
            ((mean1 - mean2) / total.sqrt(), df)
        }
    };

    let pvalue = if t_stat.is_nan() {
        f64::NAN
    } else {
        match StudentT::new(df) {
            Ok(t_dist) => t_dist.two_sided_pvalue(t_stat),
            // Both groups constant: Welch's df is 0/0
            Err(_) => f64::NAN,
        }
    };

    Ok(TensorTestResult {
        statistic: Tensor::<R>::full_scalar(&[], a.dtype(), t_stat, client.device()),
        pvalue: Tensor::<R>::full_scalar(&[], a.dtype(), pvalue, client.device()),
    })
}

/// Generic implementation of Bartlett's test for equal variances.
pub fn bartlett_impl<R, C>(client: &C, groups: &[&Tensor<R>]) -> Result<TensorTestResult<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    let k = groups.len();
    if k < 2 {
        return Err(Error::InvalidArgument {
            arg: "groups",
            reason: "Bartlett's test requires at least 2 groups".to_string(),
        });
    }

    let mut sizes = Vec::with_capacity(k);
    let mut variances = Vec::with_capacity(k);
    for group in groups {
        validate_stats_dtype(group.dtype())?;
        let g = group.contiguous();
        let n = g.numel();
        if n < 2 {
            return Err(Error::InvalidArgument {
                arg: "groups",
                reason: "each group needs at least 2 observations".to_string(),
            });
        }
        let dims: Vec<usize> = (0..g.ndim()).collect();
        variances.push(extract_scalar(&client.var(&g, &dims, false, 1)?)?);
        sizes.push(n as f64);
    }

    let total: f64 = sizes.iter().sum();
    let k_f = k as f64;
    let dof_within = total - k_f;

    let pooled = sizes
        .iter()
        .zip(&variances)
        .map(|(n, v)| (n - 1.0) * v)
        .sum::<f64>()
        / dof_within;

    let numerator = dof_within * pooled.ln()
        - sizes
            .iter()
            .zip(&variances)
            .map(|(n, v)| (n - 1.0) * v.ln())
            .sum::<f64>();
    let correction = 1.0
        + (sizes.iter().map(|n| 1.0 / (n - 1.0)).sum::<f64>() - 1.0 / dof_within)
            / (3.0 * (k_f - 1.0));
    let mut statistic = numerator / correction;
    // Rounding can push the statistic of equal-spread groups just below zero
    if statistic < 0.0 {
        statistic = 0.0;
    }

    let pvalue = if statistic.is_nan() {
        f64::NAN
    } else {
        ChiSquared::new((k - 1) as u64)
            .map(|chi2| chi2.sf(statistic))
            .map_err(|e| Error::InvalidArgument {
                arg: "groups",
                reason: format!("failed to create chi-squared distribution: {}", e),
            })?
    };

    let dtype = groups[0].dtype();
    Ok(TensorTestResult {
        statistic: Tensor::<R>::full_scalar(&[], dtype, statistic, client.device()),
        pvalue: Tensor::<R>::full_scalar(&[], dtype, pvalue, client.device()),
    })
}
