//! Markdown narratives for the dashboard.
//!
//! Rendering is separate from analysis: these functions only format typed
//! results. Text is in Portuguese, matching the survey.

mod markdown;

pub use markdown::{render_comparison, render_descriptive, render_error};
