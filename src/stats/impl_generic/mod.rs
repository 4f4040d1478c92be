//! Runtime-generic implementations shared by every backend.

mod descriptive;
mod hypothesis;
mod normality;
mod transform;

pub use descriptive::{describe_impl, mean_confidence_interval_impl, percentile_impl};
pub use hypothesis::{bartlett_impl, ttest_ind_impl};
pub use normality::{shapiro_impl, shapiro_wilk};
pub use transform::{
    BOXCOX_LAMBDA_START, boxcox_impl, boxcox_llf, boxcox_with_lambda_impl, log_transform_impl,
};
