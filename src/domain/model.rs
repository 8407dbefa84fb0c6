use std::fmt;

/// One data row as read from the CSV; `line` is the 1-based source line.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub line: u64,
    pub area_sqm: Option<f64>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub rows: Vec<RawRow>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparableRecord {
    pub line: u64,
    pub area_sqm: f64,
    pub price: f64,
    pub pps: f64,
}

#[derive(Debug, Clone, Default)]
pub struct TrainingSet {
    pub records: Vec<ComparableRecord>,
    pub dropped: usize,
}

impl TrainingSet {
    pub fn areas(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.area_sqm).collect()
    }

    pub fn pps(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.pps).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedModel {
    pub slope: f64,
    pub intercept: f64,
}

impl FittedModel {
    pub fn predict(&self, area_sqm: f64) -> f64 {
        self.slope * area_sqm + self.intercept
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegressionReport {
    pub model: FittedModel,
    pub probe_area: f64,
    pub prediction: f64,
    pub sample_size: usize,
    pub dropped_rows: usize,
    pub r_squared: f64,
    pub median_pps: f64,
    pub mean_pps: f64,
}

// 輸出格式固定為兩行，下游以欄位標籤比對
impl fmt::Display for RegressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Coef: {} Intercept: {}",
            self.model.slope, self.model.intercept
        )?;
        write!(
            f,
            "Sample prediction for area {}: {}",
            self.probe_area, self.prediction
        )
    }
}
