//! Per-date daily aggregate cache
//!
//! An entry is computed once for a date and reused as-is on every
//! later run, even if the raw logs for that date change afterwards.
//! Staleness is accepted; entries are never recomputed or deleted.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::types::{AggregateRow, DailyAggregate, Result, RollupError};

/// Cache of per-day aggregates, one CSV file per date
pub struct DailyCacheService {
    cache_dir: PathBuf,
}

impl DailyCacheService {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_path(&self, date: NaiveDate) -> PathBuf {
        self.cache_dir.join(format!("{date}.csv"))
    }

    /// Load the entry for a date, or `None` when no entry exists.
    /// A present but empty entry is a valid hit for a zero-activity
    /// day, not a recompute trigger.
    pub fn load(&self, date: NaiveDate) -> Result<Option<DailyAggregate>> {
        let path = self.cache_path(date);
        if !path.exists() {
            return Ok(None);
        }

        let mut reader = csv::Reader::from_path(&path)?;
        let mut rows = Vec::new();
        for result in reader.deserialize::<AggregateRow>() {
            rows.push(result?);
        }
        Ok(Some(DailyAggregate::from_rows(rows)))
    }

    /// Persist a freshly computed entry for a date.
    /// Failure here is fatal to the run; callers do not retry.
    pub fn store(&self, date: NaiveDate, aggregate: &DailyAggregate) -> Result<()> {
        fs::create_dir_all(&self.cache_dir)
            .map_err(|e| RollupError::Cache(format!("failed to create cache dir: {e}")))?;
        super::write_aggregate(&self.cache_path(date), aggregate)
            .map_err(|e| RollupError::Cache(format!("failed to store entry for {date}: {e}")))
    }
}
