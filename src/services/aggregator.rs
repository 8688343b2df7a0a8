//! Daily aggregation of raw action events

use crate::types::{ActionEvent, DailyAggregate};

/// Aggregator for per-day action counts
pub struct Aggregator;

impl Aggregator {
    /// Count actions per user for one day of events.
    ///
    /// Pure transform: one output entry per distinct email, each count
    /// equal to the number of raw occurrences of that action kind.
    pub fn daily(events: &[ActionEvent]) -> DailyAggregate {
        let mut aggregate = DailyAggregate::default();
        for event in events {
            aggregate.record(&event.email, event.action);
        }
        aggregate
    }
}
