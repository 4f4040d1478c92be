//! Plot rendering and artifact persistence.
//!
//! Plots are rendered to SVG text, written to disk under a content-derived
//! name, and embedded into reports as data URIs.

mod artifact;
mod boxplot;

pub use artifact::{ArtifactRef, ArtifactStore, embed_data_uri};
pub use boxplot::{BoxSummary, render_boxplot};
