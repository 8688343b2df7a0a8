//! Window accumulation: the 7-day cache-or-compute pipeline
//!
//! For a target date, each of the 7 preceding days resolves to a daily
//! aggregate (cache hit, or computed from raw logs and cached), and
//! the 7 aggregates merge into one per-user report.

use chrono::{Duration, NaiveDate};

use crate::config::RollupConfig;
use crate::parsers::ActionLogReader;
use crate::services::{Aggregator, DailyCacheService, ReportWriter};
use crate::types::{DailyAggregate, Result};

/// Days feeding one report: the week strictly before the target date
const WINDOW_DAYS: i64 = 7;

/// Drives the whole pipeline for one target date
pub struct WindowProcessor {
    logs: ActionLogReader,
    cache: DailyCacheService,
    reports: ReportWriter,
}

impl WindowProcessor {
    pub fn new(config: &RollupConfig) -> Self {
        Self {
            logs: ActionLogReader::new(&config.input_dir),
            cache: DailyCacheService::new(&config.cache_dir),
            reports: ReportWriter::new(&config.output_dir),
        }
    }

    /// Dates covered by a target date's report: target−1 through
    /// target−7, excluding the target date itself.
    pub fn window_dates(target: NaiveDate) -> Vec<NaiveDate> {
        (1..=WINDOW_DAYS)
            .map(|offset| target - Duration::days(offset))
            .collect()
    }

    /// Build and persist the report for `target`.
    pub fn process(&self, target: NaiveDate) -> Result<()> {
        let mut report = DailyAggregate::default();
        for day in Self::window_dates(target) {
            let daily = self.daily_aggregate(day)?;
            report.merge(&daily);
        }
        self.reports.write(target, &report)
    }

    /// Cache-or-compute for one day. A present entry is used as-is,
    /// even when the raw logs for that day have since changed.
    fn daily_aggregate(&self, day: NaiveDate) -> Result<DailyAggregate> {
        if let Some(cached) = self.cache.load(day)? {
            return Ok(cached);
        }

        let events = self.logs.read_day(day)?;
        let aggregate = Aggregator::daily(&events);
        self.cache.store(day, &aggregate)?;
        Ok(aggregate)
    }
}
