//! Per-category salary summaries and the boxplot artifact.

use numr::runtime::{Runtime, RuntimeClient};
use tracing::{debug, info, warn};

use crate::config::Z_95;
use crate::dataset::{Dataset, Variable};
use crate::error::Result;
use crate::plot::{ArtifactRef, ArtifactStore, BoxSummary, render_boxplot};
use crate::stats::helpers::{extract_scalar, sample_tensor};
use crate::stats::{ConfidenceInterval, DescriptiveStatisticsAlgorithms};

/// Salary statistics of one category.
///
/// `n` counts non-null salaries. With `n == 0` every statistic is NaN; with
/// `n == 1` the std and interval bounds are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    pub n: usize,
    pub mean: f64,
    pub std: f64,
    pub ci: ConfidenceInterval,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl CategorySummary {
    fn empty(category: &str) -> Self {
        Self {
            category: category.to_string(),
            n: 0,
            mean: f64::NAN,
            std: f64::NAN,
            ci: ConfidenceInterval::undefined(),
            min: f64::NAN,
            q1: f64::NAN,
            median: f64::NAN,
            q3: f64::NAN,
            max: f64::NAN,
        }
    }

    fn box_summary(&self) -> BoxSummary {
        BoxSummary {
            label: self.category.clone(),
            min: self.min,
            q1: self.q1,
            median: self.median,
            q3: self.q3,
            max: self.max,
            mean: self.mean,
        }
    }
}

/// Result of the descriptive analysis of one variable.
#[derive(Debug, Clone)]
pub struct DescriptiveReport {
    pub variable: Variable,
    /// One row per category, first-encounter order.
    pub summaries: Vec<CategorySummary>,
    /// The saved boxplot, or why it could not be written.
    pub plot: std::result::Result<ArtifactRef, String>,
}

/// Summarize one category's non-null salaries.
pub fn summarize_category<R, C>(client: &C, category: &str, salaries: &[f64]) -> Result<CategorySummary>
where
    R: Runtime,
    C: DescriptiveStatisticsAlgorithms<R> + RuntimeClient<R>,
{
    if salaries.is_empty() {
        return Ok(CategorySummary::empty(category));
    }

    let x = sample_tensor(client, salaries);
    let stats = client.describe(&x)?;
    let ci = client.mean_confidence_interval(&x, Z_95)?;

    Ok(CategorySummary {
        category: category.to_string(),
        n: stats.nobs,
        mean: extract_scalar(&stats.mean)?,
        std: extract_scalar(&stats.std)?,
        ci,
        min: extract_scalar(&stats.min)?,
        q1: extract_scalar(&DescriptiveStatisticsAlgorithms::percentile(client, &x, 25.0)?)?,
        median: extract_scalar(&DescriptiveStatisticsAlgorithms::median(client, &x)?)?,
        q3: extract_scalar(&DescriptiveStatisticsAlgorithms::percentile(client, &x, 75.0)?)?,
        max: extract_scalar(&stats.max)?,
    })
}

/// Summarize salary by every category of `variable` and persist a boxplot.
///
/// A boxplot that cannot be written is recorded in the report; only the
/// statistics can fail the analysis.
pub fn describe<R, C>(
    client: &C,
    dataset: &Dataset,
    variable: Variable,
    store: &ArtifactStore,
) -> Result<DescriptiveReport>
where
    R: Runtime,
    C: DescriptiveStatisticsAlgorithms<R> + RuntimeClient<R>,
{
    info!(variable = %variable, "describing salary by category");

    let summaries = dataset
        .groups(variable)
        .iter()
        .map(|group| summarize_category::<R, C>(client, &group.category, &group.salaries))
        .collect::<Result<Vec<_>>>()?;

    for s in &summaries {
        debug!(category = %s.category, n = s.n, mean = s.mean, std = s.std, "category summary");
    }

    let boxes: Vec<BoxSummary> = summaries.iter().map(CategorySummary::box_summary).collect();
    let svg = render_boxplot(variable.label(), &boxes);
    let plot = store.save("boxplot", "svg", svg.as_bytes()).map_err(|e| {
        warn!(error = %e, "boxplot not saved");
        e.to_string()
    });

    Ok(DescriptiveReport {
        variable,
        summaries,
        plot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};

    fn setup() -> CpuClient {
        let device = CpuDevice::new();
        CpuClient::new(device)
    }

    #[test]
    fn test_summarize_category() {
        let client = setup();
        let s = summarize_category::<CpuRuntime, _>(&client, "Analista", &[5000.0, 6000.0, 5500.0, 5800.0]).unwrap();

        assert_eq!(s.n, 4);
        assert!((s.mean - 5575.0).abs() < 1e-9);
        assert!((s.std - (567500.0f64 / 3.0).sqrt()).abs() < 1e-9);
        assert_eq!(s.min, 5000.0);
        assert_eq!(s.max, 6000.0);
        // linear interpolation on 5000, 5500, 5800, 6000
        assert!((s.q1 - 5375.0).abs() < 1e-9);
        assert!((s.median - 5650.0).abs() < 1e-9);
        assert!((s.q3 - 5850.0).abs() < 1e-9);
        assert!(s.ci.lower < s.mean && s.mean < s.ci.upper);
    }

    #[test]
    fn test_summarize_single_value() {
        let client = setup();
        let s = summarize_category::<CpuRuntime, _>(&client, "Diretor", &[30000.0]).unwrap();

        assert_eq!(s.n, 1);
        assert_eq!(s.mean, 30000.0);
        assert!(s.std.is_nan());
        assert!(s.ci.lower.is_nan() && s.ci.upper.is_nan());
        assert_eq!(s.median, 30000.0);
    }

    #[test]
    fn test_summarize_empty() {
        let client = setup();
        let s = summarize_category::<CpuRuntime, _>(&client, "Sem salário", &[]).unwrap();

        assert_eq!(s.n, 0);
        assert!(s.mean.is_nan());
        assert!(s.ci.lower.is_nan());
        assert!(s.max.is_nan());
    }

    #[test]
    fn test_describe_writes_plot() {
        let client = setup();
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let csv = "Cargo,Carreira,Genero,Raça,Experiencia,Faixa salarial\n\
                   Analista,Junior,F,Parda,1,5000\n\
                   Cientista,Senior,M,Branca,9,9000\n\
                   Analista,Pleno,M,Branca,3,6000\n\
                   Gerente,Senior,F,Preta,9,\n";
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

        let report = describe::<CpuRuntime, _>(&client, &dataset, Variable::Role, &store).unwrap();

        let names: Vec<&str> = report.summaries.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Analista", "Cientista", "Gerente"]);
        assert_eq!(report.summaries[2].n, 0);
        let plot = report.plot.as_ref().unwrap();
        assert!(plot.path.is_file());
        assert!(plot.id.starts_with("boxplot-"));
    }

    #[test]
    fn test_describe_keeps_statistics_when_plot_cannot_be_saved() {
        let client = setup();
        // A regular file where the artifact directory should be
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let store = ArtifactStore::new(blocker.path());
        let csv = "Cargo,Carreira,Genero,Raça,Experiencia,Faixa salarial\n\
                   Analista,Junior,F,Parda,1,5000\n\
                   Analista,Pleno,M,Branca,3,6000\n";
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

        let report = describe::<CpuRuntime, _>(&client, &dataset, Variable::Role, &store).unwrap();

        assert_eq!(report.summaries.len(), 1);
        assert_eq!(report.summaries[0].n, 2);
        assert!(report.plot.is_err());
    }
}
