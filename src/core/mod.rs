pub mod loader;
pub mod ols;
pub mod pipeline;
pub mod runner;

pub use crate::domain::model::{
    ComparableRecord, Dataset, FittedModel, RawRow, RegressionReport, TrainingSet,
};
pub use crate::domain::ports::{Pipeline, Storage};
pub use crate::utils::error::Result;
