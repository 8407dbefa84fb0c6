use crate::config::runner::RunnerConfig;
use crate::core::loader;
use crate::core::{ComparableRecord, Dataset, Pipeline, Storage, TrainingSet};
use crate::utils::error::{RegressError, Result};

pub struct ComparablesPipeline<S: Storage> {
    storage: S,
    csv_path: String,
    config: RunnerConfig,
}

impl<S: Storage> ComparablesPipeline<S> {
    pub fn new(storage: S, csv_path: impl Into<String>) -> Self {
        Self::with_config(storage, csv_path, RunnerConfig::default())
    }

    pub fn with_config(storage: S, csv_path: impl Into<String>, config: RunnerConfig) -> Self {
        Self {
            storage,
            csv_path: csv_path.into(),
            config,
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }
}

impl<S: Storage> Pipeline for ComparablesPipeline<S> {
    fn extract(&self) -> Result<Dataset> {
        tracing::debug!("Reading comparables from: {}", self.csv_path);
        let bytes = self.storage.read_file(&self.csv_path)?;
        tracing::debug!("Read {} bytes", bytes.len());

        loader::parse_dataset(&bytes, &self.config)
    }

    fn transform(&self, data: Dataset) -> Result<TrainingSet> {
        let total = data.len();
        let mut records = Vec::with_capacity(total);

        for row in data.rows {
            // 只丟掉面積或價格缺值的列
            let (area_sqm, price) = match (row.area_sqm, row.price) {
                (Some(area), Some(price)) => (area, price),
                _ => {
                    tracing::debug!("Dropping line {}: missing area or price", row.line);
                    continue;
                }
            };

            if area_sqm == 0.0 {
                return Err(RegressError::ZeroAreaError { line: row.line });
            }

            let pps = price / area_sqm;
            if !pps.is_finite() {
                return Err(RegressError::NonFinitePpsError { line: row.line });
            }

            records.push(ComparableRecord {
                line: row.line,
                area_sqm,
                price,
                pps,
            });
        }

        let dropped = total - records.len();
        if dropped > 0 {
            tracing::warn!("Dropped {} of {} rows with missing area or price", dropped, total);
        }

        Ok(TrainingSet { records, dropped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RawRow;
    use std::collections::HashMap;

    struct MockStorage {
        files: HashMap<String, Vec<u8>>,
    }

    impl MockStorage {
        fn with_file(path: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), content.as_bytes().to_vec());
            Self { files }
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.get(path).cloned().ok_or_else(|| {
                RegressError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }
    }

    fn row(line: u64, area_sqm: Option<f64>, price: Option<f64>) -> RawRow {
        RawRow {
            line,
            area_sqm,
            price,
        }
    }

    #[test]
    fn test_extract_reads_through_storage() {
        let storage = MockStorage::with_file("comps.csv", "area_sqm,price\n100,300\n200,500\n");
        let pipeline = ComparablesPipeline::new(storage, "comps.csv");

        let data = pipeline.extract().unwrap();
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_extract_missing_file() {
        let storage = MockStorage::with_file("comps.csv", "area_sqm,price\n");
        let pipeline = ComparablesPipeline::new(storage, "other.csv");

        assert!(matches!(pipeline.extract(), Err(RegressError::IoError(_))));
    }

    #[test]
    fn test_transform_derives_pps() {
        let pipeline = ComparablesPipeline::new(MockStorage::with_file("x", ""), "x");
        let data = Dataset {
            rows: vec![row(2, Some(100.0), Some(300.0)), row(3, Some(200.0), Some(500.0))],
        };

        let set = pipeline.transform(data).unwrap();
        assert_eq!(set.pps(), vec![3.0, 2.5]);
        assert_eq!(set.areas(), vec![100.0, 200.0]);
        assert_eq!(set.dropped, 0);
    }

    #[test]
    fn test_transform_drops_incomplete_rows_in_order() {
        let pipeline = ComparablesPipeline::new(MockStorage::with_file("x", ""), "x");
        let data = Dataset {
            rows: vec![
                row(2, Some(100.0), None),
                row(3, Some(200.0), Some(500.0)),
                row(4, None, Some(100.0)),
                row(5, Some(50.0), Some(200.0)),
            ],
        };

        let set = pipeline.transform(data).unwrap();
        assert_eq!(set.dropped, 2);
        let lines: Vec<u64> = set.records.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![3, 5]);
    }

    #[test]
    fn test_transform_rejects_zero_area() {
        let pipeline = ComparablesPipeline::new(MockStorage::with_file("x", ""), "x");
        let data = Dataset {
            rows: vec![row(2, Some(100.0), Some(300.0)), row(3, Some(0.0), Some(500.0))],
        };

        assert!(matches!(
            pipeline.transform(data),
            Err(RegressError::ZeroAreaError { line: 3 })
        ));
    }

    #[test]
    fn test_transform_rejects_overflowing_pps() {
        let pipeline = ComparablesPipeline::new(MockStorage::with_file("x", ""), "x");
        let data = Dataset {
            rows: vec![row(2, Some(1e-300), Some(1e10)), row(3, Some(2.0), Some(4.0))],
        };

        assert!(matches!(
            pipeline.transform(data),
            Err(RegressError::NonFinitePpsError { line: 2 })
        ));
    }

    #[test]
    fn test_zero_area_with_missing_price_is_dropped_not_rejected() {
        let pipeline = ComparablesPipeline::new(MockStorage::with_file("x", ""), "x");
        let data = Dataset {
            rows: vec![row(2, Some(0.0), None), row(3, Some(100.0), Some(300.0))],
        };

        let set = pipeline.transform(data).unwrap();
        assert_eq!(set.records.len(), 1);
        assert_eq!(set.dropped, 1);
    }
}
