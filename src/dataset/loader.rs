//! CSV Loader
//!
//! Reads the economic table from a CSV file with a header row.
//! Columns are located by header name, so column order and extra
//! columns do not matter.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::table::Dataset;
use super::types::EconomicRecord;

/// Header names of the required columns
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnNames {
    pub country: String,
    pub code: String,
    pub year: String,
    pub gdp: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            country: "Country".to_string(),
            code: "Code".to_string(),
            year: "Year".to_string(),
            gdp: "GDP (USD)".to_string(),
        }
    }
}

/// Column positions resolved from a header row
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    country: usize,
    code: usize,
    year: usize,
    gdp: usize,
}

impl ColumnLayout {
    fn locate(headers: &csv::StringRecord, names: &ColumnNames) -> DatasetResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            country: find(&names.country)?,
            code: find(&names.code)?,
            year: find(&names.year)?,
            gdp: find(&names.gdp)?,
        })
    }
}

/// Loads a `Dataset` from CSV input
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    columns: ColumnNames,
}

impl DatasetLoader {
    /// Create a loader expecting the default column names
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the expected column names
    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    /// Load the dataset from a file
    pub fn load(&self, path: &Path) -> DatasetResult<Dataset> {
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = self.load_reader(file)?;

        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            years = %dataset.year_range(),
            "Dataset loaded"
        );

        Ok(dataset)
    }

    /// Load the dataset from any reader (files, in-memory buffers)
    pub fn load_reader<R: Read>(&self, input: R) -> DatasetResult<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        let headers = reader.headers()?.clone();
        let layout = ColumnLayout::locate(&headers, &self.columns)?;

        let mut records = Vec::new();
        let mut missing_gdp = 0usize;

        for (row_num, result) in reader.records().enumerate() {
            let row = result?;
            let line = row
                .position()
                .map(|p| p.line())
                .unwrap_or(row_num as u64 + 2);

            let cell = |idx: usize| row.get(idx).unwrap_or("");

            let year_str = cell(layout.year);
            let year: i32 = year_str.parse().map_err(|_| DatasetError::Parse {
                line,
                column: self.columns.year.clone(),
                value: year_str.to_string(),
            })?;

            let gdp_str = cell(layout.gdp);
            let gdp_usd = if gdp_str.is_empty() {
                missing_gdp += 1;
                f64::NAN
            } else {
                gdp_str.parse::<f64>().map_err(|_| DatasetError::Parse {
                    line,
                    column: self.columns.gdp.clone(),
                    value: gdp_str.to_string(),
                })?
            };

            records.push(EconomicRecord::new(
                cell(layout.country),
                cell(layout.code),
                year,
                gdp_usd,
            ));
        }

        if missing_gdp > 0 {
            tracing::warn!(rows = missing_gdp, "Rows with missing GDP loaded as NaN");
        }

        Dataset::new(records)
    }
}
