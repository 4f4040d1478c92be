//! The dashboard facade: one dataset, one CPU client, one artifact store.
//!
//! Typed methods return [`Result`]; the `*_narrative` methods are the
//! boundary where every error becomes text.

use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
use tracing::warn;

use crate::analysis::{self, ComparisonResult, DescriptiveReport};
use crate::config::DashboardOptions;
use crate::dataset::{Dataset, Variable};
use crate::error::Result;
use crate::plot::ArtifactStore;
use crate::report::{render_comparison, render_descriptive, render_error};

pub struct Dashboard {
    client: CpuClient,
    dataset: Dataset,
    store: ArtifactStore,
}

impl Dashboard {
    /// Load the dataset named by `options`.
    pub fn open(options: &DashboardOptions) -> Result<Self> {
        let dataset = Dataset::from_path(&options.dataset_path)?;
        Ok(Self::new(dataset, ArtifactStore::new(&options.artifact_dir)))
    }

    pub fn new(dataset: Dataset, store: ArtifactStore) -> Self {
        let device = CpuDevice::new();
        Self {
            client: CpuClient::new(device),
            dataset,
            store,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Selectable categories of `variable`, first-encounter order.
    pub fn categories(&self, variable: Variable) -> Vec<String> {
        self.dataset.categories(variable)
    }

    /// Categories that can be compared against `category_a`.
    pub fn comparison_choices(&self, variable: Variable, category_a: &str) -> Vec<String> {
        self.dataset
            .categories(variable)
            .into_iter()
            .filter(|c| c != category_a)
            .collect()
    }

    pub fn describe(&self, variable: Variable) -> Result<DescriptiveReport> {
        analysis::describe::<CpuRuntime, _>(&self.client, &self.dataset, variable, &self.store)
    }

    pub fn compare(
        &self,
        variable: Variable,
        category_a: &str,
        category_b: &str,
    ) -> Result<ComparisonResult> {
        analysis::compare::<CpuRuntime, _>(&self.client, &self.dataset, variable, category_a, category_b)
    }

    /// Descriptive narrative; errors are rendered, never returned.
    pub fn describe_narrative(&self, variable: Variable) -> String {
        match self.describe(variable) {
            Ok(report) => render_descriptive(&report),
            Err(e) => {
                warn!(variable = %variable, error = %e, "descriptive analysis failed");
                render_error(&e)
            }
        }
    }

    /// Comparison narrative; errors are rendered, never returned.
    pub fn compare_narrative(&self, variable: Variable, category_a: &str, category_b: &str) -> String {
        match self.compare(variable, category_a, category_b) {
            Ok(result) => render_comparison(&result),
            Err(e) => {
                warn!(
                    variable = %variable,
                    a = category_a,
                    b = category_b,
                    error = %e,
                    "comparison failed"
                );
                render_error(&e)
            }
        }
    }
}
