use crate::config::runner::RunnerConfig;
use crate::domain::model::{Dataset, RawRow};
use crate::utils::error::{RegressError, Result};
use crate::utils::validation::Validate;
use csv::{ReaderBuilder, StringRecord};

/// Parse delimited text into a [`Dataset`], keeping row order.
///
/// Only the area and price columns are read. Other columns may hold anything,
/// including missing values, and rows may be ragged.
pub fn parse_dataset(bytes: &[u8], config: &RunnerConfig) -> Result<Dataset> {
    config.validate()?;
    let delimiter =
        u8::try_from(config.delimiter).map_err(|_| RegressError::InvalidConfigValueError {
            field: "delimiter".to_string(),
            value: config.delimiter.to_string(),
            reason: "Delimiter must be a single ASCII character".to_string(),
        })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let area_idx = column_index(&headers, &config.area_column)?;
    let price_idx = column_index(&headers, &config.price_column)?;
    tracing::debug!(
        "Columns resolved: {}={}, {}={}",
        config.area_column,
        area_idx,
        config.price_column,
        price_idx
    );

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // 完全空白的行不算資料
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        rows.push(RawRow {
            line,
            area_sqm: parse_cell(&record, area_idx, line, &config.area_column, config)?,
            price: parse_cell(&record, price_idx, line, &config.price_column, config)?,
        });
    }

    Ok(Dataset { rows })
}

fn column_index(headers: &StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == column)
        .ok_or_else(|| RegressError::MissingColumnError {
            column: column.to_string(),
        })
}

fn parse_cell(
    record: &StringRecord,
    idx: usize,
    line: u64,
    column: &str,
    config: &RunnerConfig,
) -> Result<Option<f64>> {
    let cell = match record.get(idx) {
        Some(cell) => cell,
        None => return Ok(None),
    };
    if config.is_na(cell) {
        return Ok(None);
    }

    let trimmed = cell.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(RegressError::InvalidValueError {
            line,
            column: column.to_string(),
            value: trimmed.to_string(),
        }),
    }
}
