use crate::config::runner::{RunnerConfig, DEFAULT_PROBE_AREA};
use crate::core::ols::LinearRegression;
use crate::core::pipeline::ComparablesPipeline;
use crate::core::{Pipeline, RegressionReport, Storage};
use crate::utils::error::Result;
use crate::utils::stats;

pub struct RegressionRunner<P: Pipeline> {
    pipeline: P,
    probe_area: f64,
}

impl<P: Pipeline> RegressionRunner<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            probe_area: DEFAULT_PROBE_AREA,
        }
    }

    pub fn with_probe_area(mut self, probe_area: f64) -> Self {
        self.probe_area = probe_area;
        self
    }

    pub fn run(&self) -> Result<RegressionReport> {
        tracing::debug!("Extracting comparables...");
        let dataset = self.pipeline.extract()?;
        tracing::debug!("Extracted {} rows", dataset.len());

        tracing::debug!("Transforming comparables...");
        let training = self.pipeline.transform(dataset)?;
        tracing::debug!("Kept {} rows for fitting", training.records.len());

        let x = training.areas();
        let y = training.pps();

        let mut regression = LinearRegression::new();
        let model = regression.fit(&x, &y)?;

        // fit 成功代表至少兩筆資料，以下統計值必定存在
        let r_squared = regression.score(&x, &y).unwrap_or(f64::NAN);
        let median_pps = stats::median(&y).unwrap_or(f64::NAN);
        let mean_pps = stats::mean(&y).unwrap_or(f64::NAN);

        let report = RegressionReport {
            model,
            probe_area: self.probe_area,
            prediction: model.predict(self.probe_area),
            sample_size: training.records.len(),
            dropped_rows: training.dropped,
            r_squared,
            median_pps,
            mean_pps,
        };

        tracing::info!(
            "Fitted {} comparables (dropped {}): R²={:.4}, median pps={}, mean pps={}",
            report.sample_size,
            report.dropped_rows,
            report.r_squared,
            report.median_pps,
            report.mean_pps
        );

        Ok(report)
    }
}

impl<S: Storage> RegressionRunner<ComparablesPipeline<S>> {
    pub fn from_config(storage: S, csv_path: impl Into<String>, config: RunnerConfig) -> Self {
        let probe_area = config.probe_area;
        Self::new(ComparablesPipeline::with_config(storage, csv_path, config))
            .with_probe_area(probe_area)
    }
}
