use crate::domain::model::FittedModel;
use crate::utils::error::{RegressError, Result};

/// Ordinary least squares with a single predictor and an intercept.
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    model: Option<FittedModel>,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self { model: None }
    }

    pub fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<FittedModel> {
        if x.len() != y.len() {
            return Err(RegressError::ConfigError {
                message: format!(
                    "Number of samples in x ({}) and y ({}) must match",
                    x.len(),
                    y.len()
                ),
            });
        }
        if x.len() < 2 {
            return Err(RegressError::InsufficientDataError { usable: x.len() });
        }

        // 所有 x 相同時斜率無定義
        let first = x[0];
        if x.iter().all(|&v| v == first) {
            return Err(RegressError::DegeneratePredictorError { area_sqm: first });
        }

        let n = x.len() as f64;
        let x_mean = x.iter().sum::<f64>() / n;
        let y_mean = y.iter().sum::<f64>() / n;

        let (sxx, sxy) = x
            .iter()
            .zip(y)
            .fold((0.0, 0.0), |(sxx, sxy), (&xi, &yi)| {
                let dx = xi - x_mean;
                (sxx + dx * dx, sxy + dx * (yi - y_mean))
            });

        if !sxx.is_finite() || !sxy.is_finite() {
            return Err(RegressError::NumericRangeError {
                message: format!("centered sums are not finite (sxx={}, sxy={})", sxx, sxy),
            });
        }
        if sxx == 0.0 {
            return Err(RegressError::DegeneratePredictorError { area_sqm: first });
        }

        let slope = sxy / sxx;
        let model = FittedModel {
            slope,
            intercept: y_mean - slope * x_mean,
        };
        if !model.slope.is_finite() || !model.intercept.is_finite() {
            return Err(RegressError::NumericRangeError {
                message: format!(
                    "coefficients are not finite (slope={}, intercept={})",
                    model.slope, model.intercept
                ),
            });
        }
        tracing::debug!(
            "OLS fit over {} samples: sxx={}, sxy={}, slope={}, intercept={}",
            x.len(),
            sxx,
            sxy,
            model.slope,
            model.intercept
        );

        self.model = Some(model);
        Ok(model)
    }

    pub fn model(&self) -> Option<FittedModel> {
        self.model
    }

    pub fn predict(&self, x: f64) -> Option<f64> {
        self.model.map(|m| m.predict(x))
    }

    /// Coefficient of determination on the given samples.
    pub fn score(&self, x: &[f64], y: &[f64]) -> Option<f64> {
        let model = self.model?;
        if x.len() != y.len() || y.is_empty() {
            return None;
        }

        let y_mean = y.iter().sum::<f64>() / y.len() as f64;
        let ss_res: f64 = x
            .iter()
            .zip(y)
            .map(|(&xi, &yi)| (yi - model.predict(xi)).powi(2))
            .sum();
        let ss_tot: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();

        if ss_tot == 0.0 {
            return Some(1.0);
        }
        Some(1.0 - ss_res / ss_tot)
    }
}
