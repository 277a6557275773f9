//! Core data types for the economic dataset
//!
//! - `EconomicRecord`: one country's GDP for one year
//! - `YearRange`: the inclusive span of years present in the table

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::RangeInclusive;

/// A single country-year GDP observation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EconomicRecord {
    /// Country display name
    pub country: String,
    /// ISO3-like country code, used as the map location key
    pub code: String,
    /// Calendar year of the observation
    pub year: i32,
    /// GDP in US dollars. NaN when the source cell was blank.
    pub gdp_usd: f64,
}

impl EconomicRecord {
    /// Create a new record
    pub fn new(country: impl Into<String>, code: impl Into<String>, year: i32, gdp_usd: f64) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            year,
            gdp_usd,
        }
    }

    /// Whether the GDP value is missing
    pub fn gdp_missing(&self) -> bool {
        self.gdp_usd.is_nan()
    }
}

/// Order records by GDP, largest first, missing values last.
pub fn cmp_gdp_desc(a: &EconomicRecord, b: &EconomicRecord) -> Ordering {
    match (a.gdp_missing(), b.gdp_missing()) {
        (false, false) => b.gdp_usd.total_cmp(&a.gdp_usd),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    }
}

/// Inclusive range of years covered by a dataset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    /// Create a range; bounds are swapped if given out of order
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Check if a year falls within the range
    pub fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }

    /// Every integer year in the range, in order
    pub fn iter(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    /// Number of integer years in the range. Computed in `i64` so the full
    /// `i32` range does not overflow.
    pub fn span(&self) -> u64 {
        (i64::from(self.max) - i64::from(self.min) + 1).max(0) as u64
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
