//! Raw action-log reading
//!
//! Raw logs are headerless CSV files, one per day, with columns
//! email,action,dt.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::types::{ActionEvent, ActionKind, Result, RollupError};

/// One headerless raw row. Fields bind positionally because the raw
/// format carries no header; action strings are validated by name
/// immediately after.
#[derive(Debug, Deserialize)]
struct RawRow {
    email: String,
    action: String,
    dt: String,
}

/// Reads per-day raw action logs from `<input_dir>/<YYYY-MM-DD>.csv`
pub struct ActionLogReader {
    input_dir: PathBuf,
}

impl ActionLogReader {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    pub fn day_path(&self, date: NaiveDate) -> PathBuf {
        self.input_dir.join(format!("{date}.csv"))
    }

    /// Read all events for one day.
    ///
    /// A missing log file means zero activity for that day: logged at
    /// error level, never fatal. An unrecognized action string is a
    /// hard error; dropping or miscounting the row would break the
    /// per-user count invariant.
    pub fn read_day(&self, date: NaiveDate) -> Result<Vec<ActionEvent>> {
        let path = self.day_path(date);
        if !path.exists() {
            tracing::error!("no action logs for {date}");
            return Ok(Vec::new());
        }
        Self::read_file(&path)
    }

    fn read_file(path: &Path) -> Result<Vec<ActionEvent>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)?;

        let mut events = Vec::new();
        for result in reader.deserialize::<RawRow>() {
            let row = result?;
            let action = ActionKind::parse(&row.action).ok_or_else(|| {
                RollupError::UnknownAction {
                    action: row.action.clone(),
                    email: row.email.clone(),
                }
            })?;
            events.push(ActionEvent {
                email: row.email,
                action,
                timestamp: row.dt,
            });
        }
        Ok(events)
    }
}
