pub mod cli;
pub mod runner;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "comps-regress", version))]
#[cfg_attr(
    feature = "cli",
    command(about = "Fit price per square meter against area from a comparables CSV")
)]
pub struct CliConfig {
    /// Path to a CSV file with `area_sqm` and `price` columns
    pub csv_path: String,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("csv_path", &self.csv_path)
    }
}
