//! Adaptive two-sample comparison of mean salary.
//!
//! Pipeline: Shapiro-Wilk on both samples; if either rejects normality,
//! transform both (log when both are right-skewed, Box-Cox otherwise);
//! Bartlett for equal variances; Student or Welch t-test accordingly.
//! Every decision is taken at [`ALPHA`].

use numr::ops::TensorOps;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;
use tracing::{debug, info};

use crate::config::ALPHA;
use crate::dataset::{Dataset, Variable};
use crate::error::{DashboardError, Result};
use crate::stats::helpers::{extract_scalar, sample_tensor};
use crate::stats::{
    DescriptiveStatisticsAlgorithms, HypothesisTestingAlgorithms, PowerTransformAlgorithms,
    TensorTestResult, VarianceAssumption,
};

/// Smallest sample the normality test accepts.
const MIN_SHAPIRO: usize = 3;

/// Statistic and p-value of one test, copied to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestOutcome {
    pub statistic: f64,
    pub pvalue: f64,
}

impl TestOutcome {
    fn from_tensors<R: Runtime>(result: &TensorTestResult<R>) -> Result<Self> {
        Ok(Self {
            statistic: extract_scalar(&result.statistic)?,
            pvalue: extract_scalar(&result.pvalue)?,
        })
    }
}

/// Normalizing transform applied to both samples before the variance test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    None,
    Log,
    /// Box-Cox with λ fitted separately for each sample.
    BoxCox { lambda_a: f64, lambda_b: f64 },
}

/// Which family [`choose_transform`] picked for two non-normal samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Log,
    BoxCox,
}

/// Outcome of the mean comparison at [`ALPHA`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// p < α: the means differ.
    Different,
    /// p ≥ α (or undefined): no evidence the means differ.
    Equal,
}

impl Verdict {
    /// Strict comparison; p exactly α and NaN both give [`Verdict::Equal`].
    pub fn from_pvalue(pvalue: f64) -> Self {
        if pvalue < ALPHA {
            Verdict::Different
        } else {
            Verdict::Equal
        }
    }

    /// How the p-value relates to α: "menor" or "maior".
    pub fn relation(&self) -> &'static str {
        match self {
            Verdict::Different => "menor",
            Verdict::Equal => "maior",
        }
    }

    /// What that says about the means: "diferentes" or "iguais".
    pub fn conclusion(&self) -> &'static str {
        match self {
            Verdict::Different => "diferentes",
            Verdict::Equal => "iguais",
        }
    }
}

/// Everything the comparison decided, in pipeline order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub variable: Variable,
    pub category_a: String,
    pub category_b: String,
    pub n_a: usize,
    pub n_b: usize,
    pub normality_a: TestOutcome,
    pub normality_b: TestOutcome,
    pub transform: Transform,
    pub bartlett: TestOutcome,
    pub variance: VarianceAssumption,
    pub ttest: TestOutcome,
    pub verdict: Verdict,
}

impl ComparisonResult {
    /// Whether both samples passed the normality test.
    pub fn normal(&self) -> bool {
        !needs_transform(self.normality_a.pvalue, self.normality_b.pvalue)
    }
}

/// A transform is needed when either normality p-value is below [`ALPHA`].
pub fn needs_transform(pvalue_a: f64, pvalue_b: f64) -> bool {
    pvalue_a < ALPHA || pvalue_b < ALPHA
}

/// Pick the transform for two non-normal samples.
///
/// Both right-skewed (mean > median) → log; anything else → Box-Cox.
pub fn choose_transform<R, C>(client: &C, a: &Tensor<R>, b: &Tensor<R>) -> Result<TransformKind>
where
    R: Runtime,
    C: DescriptiveStatisticsAlgorithms<R> + RuntimeClient<R>,
{
    let right_skewed = |x: &Tensor<R>| -> Result<bool> {
        let mean = extract_scalar(&client.describe(x)?.mean)?;
        let median = extract_scalar(&DescriptiveStatisticsAlgorithms::median(client, x)?)?;
        Ok(mean > median)
    };

    if right_skewed(a)? && right_skewed(b)? {
        Ok(TransformKind::Log)
    } else {
        Ok(TransformKind::BoxCox)
    }
}

/// Compare mean salary of `category_a` and `category_b` of `variable`.
///
/// # Errors
/// * `InvalidInput` if the categories are equal or a transform meets a
///   non-positive salary
/// * `EmptySample` if either category has no salaries; no test runs
/// * `InsufficientData` if either sample is smaller than three
pub fn compare<R, C>(
    client: &C,
    dataset: &Dataset,
    variable: Variable,
    category_a: &str,
    category_b: &str,
) -> Result<ComparisonResult>
where
    R: Runtime,
    C: DescriptiveStatisticsAlgorithms<R>
        + HypothesisTestingAlgorithms<R>
        + PowerTransformAlgorithms<R>
        + TensorOps<R>
        + RuntimeClient<R>,
{
    info!(variable = %variable, a = category_a, b = category_b, "comparing mean salary");

    if category_a == category_b {
        return Err(DashboardError::InvalidInput(format!(
            "categories to compare must differ, got '{}' twice",
            category_a
        )));
    }

    let sample_a = dataset.salaries(variable, category_a);
    let sample_b = dataset.salaries(variable, category_b);
    for (category, sample) in [(category_a, &sample_a), (category_b, &sample_b)] {
        if sample.is_empty() {
            return Err(DashboardError::EmptySample {
                variable: variable.label().to_string(),
                category: category.to_string(),
            });
        }
        if sample.len() < MIN_SHAPIRO {
            return Err(DashboardError::InsufficientData {
                test: "Shapiro-Wilk",
                required: MIN_SHAPIRO,
                got: sample.len(),
                category: category.to_string(),
            });
        }
    }

    let a = sample_tensor(client, &sample_a);
    let b = sample_tensor(client, &sample_b);

    let normality_a = TestOutcome::from_tensors(&client.shapiro(&a)?)?;
    let normality_b = TestOutcome::from_tensors(&client.shapiro(&b)?)?;
    debug!(
        p_a = normality_a.pvalue,
        p_b = normality_b.pvalue,
        "Shapiro-Wilk normality"
    );

    let (transform, a, b) = if needs_transform(normality_a.pvalue, normality_b.pvalue) {
        match choose_transform(client, &a, &b)? {
            TransformKind::Log => {
                require_positive(category_a, &sample_a, "log")?;
                require_positive(category_b, &sample_b, "log")?;
                (Transform::Log, client.log_transform(&a)?, client.log_transform(&b)?)
            }
            TransformKind::BoxCox => {
                require_positive(category_a, &sample_a, "Box-Cox")?;
                require_positive(category_b, &sample_b, "Box-Cox")?;
                let fit_a = client.boxcox(&a)?;
                let fit_b = client.boxcox(&b)?;
                (
                    Transform::BoxCox {
                        lambda_a: fit_a.lambda,
                        lambda_b: fit_b.lambda,
                    },
                    fit_a.transformed,
                    fit_b.transformed,
                )
            }
        }
    } else {
        (Transform::None, a, b)
    };
    debug!(transform = ?transform, "transform applied");

    let bartlett = TestOutcome::from_tensors(&client.bartlett(&[&a, &b])?)?;
    let variance = if bartlett.pvalue > ALPHA {
        VarianceAssumption::Equal
    } else {
        VarianceAssumption::Unequal
    };
    debug!(p_var = bartlett.pvalue, variance = ?variance, "Bartlett variance homogeneity");

    let ttest = TestOutcome::from_tensors(&client.ttest_ind(&a, &b, variance)?)?;
    let verdict = Verdict::from_pvalue(ttest.pvalue);
    debug!(t = ttest.statistic, p = ttest.pvalue, verdict = ?verdict, "mean comparison");

    Ok(ComparisonResult {
        variable,
        category_a: category_a.to_string(),
        category_b: category_b.to_string(),
        n_a: sample_a.len(),
        n_b: sample_b.len(),
        normality_a,
        normality_b,
        transform,
        bartlett,
        variance,
        ttest,
        verdict,
    })
}

fn require_positive(category: &str, sample: &[f64], transform: &str) -> Result<()> {
    match sample.iter().copied().find(|v| *v <= 0.0) {
        Some(value) => Err(DashboardError::InvalidInput(format!(
            "{} transform requires strictly positive salaries, '{}' contains {}",
            transform, category, value
        ))),
        None => Ok(()),
    }
}
