//! The two dashboard analyses.
//!
//! - [`describe`] summarizes salary per category and renders a boxplot.
//! - [`compare`] runs the adaptive two-sample mean comparison between two
//!   categories.
//!
//! Both are generic over the numr runtime and return typed results;
//! rendering to text happens in [`crate::report`].

mod descriptive;
mod hypothesis;

pub use descriptive::{CategorySummary, DescriptiveReport, describe, summarize_category};
pub use hypothesis::{
    ComparisonResult, TestOutcome, Transform, TransformKind, Verdict, choose_transform, compare,
    needs_transform,
};
