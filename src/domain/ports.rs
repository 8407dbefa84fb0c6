use crate::domain::model::{Dataset, TrainingSet};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

/// Extract 讀入原始資料，transform 清理並算出每平方公尺價格
pub trait Pipeline {
    fn extract(&self) -> Result<Dataset>;
    fn transform(&self, data: Dataset) -> Result<TrainingSet>;
}
