use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegressError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing required column: {column}")]
    MissingColumnError { column: String },

    #[error("Invalid value '{value}' in column '{column}' at line {line}")]
    InvalidValueError {
        line: u64,
        column: String,
        value: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Insufficient data: {usable} usable row(s), at least 2 are required")]
    InsufficientDataError { usable: usize },

    #[error("Degenerate predictor: every row has area_sqm = {area_sqm}")]
    DegeneratePredictorError { area_sqm: f64 },

    #[error("Division by zero: area_sqm is 0 at line {line}")]
    ZeroAreaError { line: u64 },

    #[error("Price per sqm is not finite at line {line}")]
    NonFinitePpsError { line: u64 },

    #[error("Numeric range error: {message}")]
    NumericRangeError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    DataSufficiency,
    Arithmetic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RegressError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegressError::IoError(_)
            | RegressError::CsvError(_)
            | RegressError::MissingColumnError { .. }
            | RegressError::InvalidValueError { .. } => ErrorCategory::Input,
            RegressError::ConfigError { .. } | RegressError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            RegressError::InsufficientDataError { .. }
            | RegressError::DegeneratePredictorError { .. } => ErrorCategory::DataSufficiency,
            RegressError::ZeroAreaError { .. }
            | RegressError::NonFinitePpsError { .. }
            | RegressError::NumericRangeError { .. } => ErrorCategory::Arithmetic,
        }
    }

    /// 每種錯誤對本次執行都是致命的，嚴重度只影響日誌
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::DataSufficiency => ErrorSeverity::Medium,
            ErrorCategory::Arithmetic => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::DataSufficiency => 2,
            ErrorCategory::Arithmetic => 3,
            ErrorCategory::Configuration => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RegressError::IoError(e) => format!("Could not read the input file: {}", e),
            RegressError::CsvError(e) => format!("The input file is not valid CSV: {}", e),
            RegressError::MissingColumnError { column } => {
                format!("The input file has no '{}' column", column)
            }
            RegressError::InvalidValueError { line, column, value } => format!(
                "Line {}: '{}' is not a number (column '{}')",
                line, value, column
            ),
            RegressError::ConfigError { message } => format!("Invalid settings: {}", message),
            RegressError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            RegressError::InsufficientDataError { usable } => format!(
                "Only {} usable row(s) after dropping incomplete rows; a fit needs at least 2",
                usable
            ),
            RegressError::DegeneratePredictorError { area_sqm } => format!(
                "All usable rows share area_sqm = {}; the slope is undefined",
                area_sqm
            ),
            RegressError::ZeroAreaError { line } => {
                format!("Line {} has area_sqm = 0, price per sqm is undefined", line)
            }
            RegressError::NonFinitePpsError { line } => format!(
                "Line {}: price / area_sqm is too large to represent",
                line
            ),
            RegressError::NumericRangeError { message } => {
                format!("The fit overflowed: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RegressError::IoError(_) => "Check that the path exists and is readable",
            RegressError::CsvError(_) => "Check the delimiter and quoting of the file",
            RegressError::MissingColumnError { .. } => {
                "Add a header row containing both area_sqm and price"
            }
            RegressError::InvalidValueError { .. } => {
                "Fix the value or leave the cell empty so the row is dropped"
            }
            RegressError::ConfigError { .. } | RegressError::InvalidConfigValueError { .. } => {
                "Review the runner settings"
            }
            RegressError::InsufficientDataError { .. } => {
                "Provide at least two rows with both area_sqm and price"
            }
            RegressError::DegeneratePredictorError { .. } => {
                "Provide comparables with at least two distinct areas"
            }
            RegressError::ZeroAreaError { .. } => "Remove or correct rows with zero area",
            RegressError::NonFinitePpsError { .. } | RegressError::NumericRangeError { .. } => {
                "Check the area and price values for unit or scale mistakes"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RegressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_map_to_distinct_exit_codes() {
        let input = RegressError::MissingColumnError {
            column: "price".to_string(),
        };
        let data = RegressError::InsufficientDataError { usable: 1 };
        let arith = RegressError::ZeroAreaError { line: 3 };
        let config = RegressError::ConfigError {
            message: "bad".to_string(),
        };

        assert_eq!(input.category(), ErrorCategory::Input);
        assert_eq!(data.category(), ErrorCategory::DataSufficiency);
        assert_eq!(arith.category(), ErrorCategory::Arithmetic);
        assert_eq!(input.exit_code(), 1);
        assert_eq!(data.exit_code(), 2);
        assert_eq!(arith.exit_code(), 3);
        assert_eq!(config.exit_code(), 4);
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: RegressError = io.into();
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.user_friendly_message().contains("gone"));
    }

    #[test]
    fn test_zero_area_message_names_line() {
        let err = RegressError::ZeroAreaError { line: 7 };
        assert!(err.to_string().contains("line 7"));
        assert!(err.user_friendly_message().contains("Line 7"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_overflow_errors_are_arithmetic() {
        let pps = RegressError::NonFinitePpsError { line: 2 };
        let range = RegressError::NumericRangeError {
            message: "sxx overflowed".to_string(),
        };
        assert_eq!(pps.category(), ErrorCategory::Arithmetic);
        assert_eq!(range.exit_code(), 3);
        assert!(pps.user_friendly_message().contains("Line 2"));
        assert!(!range.to_string().contains("Degenerate"));
    }
}
