//! In-memory economic table
//!
//! Records are kept in source order. A year index maps each year to the
//! positions of its rows so the per-update filter never scans the table.

use std::collections::BTreeMap;

use super::error::{DatasetError, DatasetResult};
use super::types::{EconomicRecord, YearRange};

/// Immutable, non-empty table of economic records
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<EconomicRecord>,
    by_year: BTreeMap<i32, Vec<usize>>,
    range: YearRange,
}

impl Dataset {
    /// Build a dataset from loaded records
    pub fn new(records: Vec<EconomicRecord>) -> DatasetResult<Self> {
        let mut by_year: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        for (idx, record) in records.iter().enumerate() {
            by_year.entry(record.year).or_default().push(idx);
        }

        let (min, max) = match (by_year.keys().next(), by_year.keys().next_back()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => return Err(DatasetError::Empty),
        };

        Ok(Self {
            records,
            by_year,
            range: YearRange::new(min, max),
        })
    }

    /// All records, in source order
    pub fn records(&self) -> &[EconomicRecord] {
        &self.records
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed dataset
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows whose year equals `year`, in source order.
    ///
    /// A year with no rows yields an empty vector.
    pub fn filter_year(&self, year: i32) -> Vec<&EconomicRecord> {
        self.by_year
            .get(&year)
            .map(|indices| indices.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    /// Span from the smallest to the largest year present
    pub fn year_range(&self) -> YearRange {
        self.range
    }

    pub fn min_year(&self) -> i32 {
        self.range.min
    }

    pub fn max_year(&self) -> i32 {
        self.range.max
    }

    /// Years that actually have rows (may be sparser than `year_range`)
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.by_year.keys().copied()
    }

    /// Number of rows for a given year
    pub fn count_for_year(&self, year: i32) -> usize {
        self.by_year.get(&year).map(Vec::len).unwrap_or(0)
    }
}
