use crate::utils::error::{RegressError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_AREA_COLUMN: &str = "area_sqm";
pub const DEFAULT_PRICE_COLUMN: &str = "price";
pub const DEFAULT_PROBE_AREA: f64 = 150.0;

/// Cells treated as missing, in addition to an absent cell.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "null", "NULL", "None", "#N/A", "<NA>",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub area_column: String,
    pub price_column: String,
    pub probe_area: f64,
    pub delimiter: char,
    pub na_values: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            area_column: DEFAULT_AREA_COLUMN.to_string(),
            price_column: DEFAULT_PRICE_COLUMN.to_string(),
            probe_area: DEFAULT_PROBE_AREA,
            delimiter: ',',
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RunnerConfig {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定，未指定的欄位沿用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| RegressError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn is_na(&self, cell: &str) -> bool {
        let cell = cell.trim();
        self.na_values.iter().any(|na| na == cell)
    }
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("area_column", &self.area_column)?;
        validation::validate_non_empty_string("price_column", &self.price_column)?;
        if self.area_column == self.price_column {
            return Err(RegressError::InvalidConfigValueError {
                field: "price_column".to_string(),
                value: self.price_column.clone(),
                reason: "Must differ from area_column".to_string(),
            });
        }
        validation::validate_positive_finite("probe_area", self.probe_area)?;
        validation::validate_ascii_delimiter("delimiter", self.delimiter)?;
        Ok(())
    }
}
