pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, runner::RunnerConfig, CliConfig};
pub use core::{ols::LinearRegression, pipeline::ComparablesPipeline, runner::RegressionRunner};
pub use domain::model::{FittedModel, RegressionReport};
pub use utils::error::{RegressError, Result};
