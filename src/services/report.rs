//! Window report sink

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::types::{DailyAggregate, Result, RollupError};

/// Writes window reports, one CSV file per target date
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn report_path(&self, date: NaiveDate) -> PathBuf {
        self.output_dir.join(format!("{date}.csv"))
    }

    /// Write the report for a target date, replacing any prior report
    /// for that date. Failure here is fatal to the run.
    pub fn write(&self, date: NaiveDate, report: &DailyAggregate) -> Result<()> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| RollupError::Report(format!("failed to create output dir: {e}")))?;
        super::write_aggregate(&self.report_path(date), report)
            .map_err(|e| RollupError::Report(format!("failed to write report for {date}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActionKind;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_write_report_content() {
        let temp = TempDir::new().unwrap();
        let writer = ReportWriter::new(temp.path());

        let mut report = DailyAggregate::default();
        report.record("a@x", ActionKind::Update);

        writer.write(date("2024-03-10"), &report).unwrap();

        let content = fs::read_to_string(writer.report_path(date("2024-03-10"))).unwrap();
        assert_eq!(
            content,
            "email,create_count,read_count,update_count,delete_count\n\
             a@x,0,0,1,0\n"
        );
    }

    #[test]
    fn test_write_overwrites_prior_report() {
        let temp = TempDir::new().unwrap();
        let writer = ReportWriter::new(temp.path());
        let target = date("2024-03-10");

        let mut first = DailyAggregate::default();
        first.record("old@x", ActionKind::Create);
        writer.write(target, &first).unwrap();

        let mut second = DailyAggregate::default();
        second.record("new@x", ActionKind::Read);
        writer.write(target, &second).unwrap();

        let content = fs::read_to_string(writer.report_path(target)).unwrap();
        assert!(content.contains("new@x"));
        assert!(!content.contains("old@x"));
    }
}
