//! Services for aggregation, caching and report output

pub mod aggregator;
pub mod cache;
pub mod report;
pub mod window;

pub use aggregator::Aggregator;
pub use cache::DailyCacheService;
pub use report::ReportWriter;
pub use window::WindowProcessor;

use std::fs;
use std::path::Path;

use crate::types::{DailyAggregate, Result};

/// Column order shared by cache entries and window reports
const AGGREGATE_HEADER: [&str; 5] = [
    "email",
    "create_count",
    "read_count",
    "update_count",
    "delete_count",
];

/// Write an aggregate as CSV via temp file + rename, so a failed run
/// never leaves a half-written file behind. The header row is always
/// present: an empty aggregate round-trips as an empty entry, not an
/// absent one.
pub(crate) fn write_aggregate(path: &Path, aggregate: &DailyAggregate) -> Result<()> {
    let temp_path = path.with_extension("csv.tmp");
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&temp_path)?;
        writer.write_record(AGGREGATE_HEADER)?;
        for row in aggregate.rows() {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    fs::rename(&temp_path, path)?;
    Ok(())
}
