//! Action-log types: raw events, per-user counts, daily aggregates

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The four tracked action kinds.
///
/// Raw logs carry these as lowercase strings. Kinds are always bound
/// by name, never by column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Create,
    Read,
    Update,
    Delete,
}

impl ActionKind {
    /// Parse a raw action string. Returns `None` for anything outside
    /// the four known kinds; the caller decides how to surface that.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "create" => Some(Self::Create),
            "read" => Some(Self::Read),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// One raw action-log row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionEvent {
    pub email: String,
    pub action: ActionKind,
    /// Carried opaquely from the raw row; day membership comes from
    /// the dated file the event was read from, not from this value.
    #[allow(dead_code)] // only inspected in tests
    pub timestamp: String,
}

/// Per-user counters for the four action kinds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionCounts {
    pub create: u64,
    pub read: u64,
    pub update: u64,
    pub delete: u64,
}

impl ActionCounts {
    /// Count one occurrence of an action
    pub fn record(&mut self, kind: ActionKind) {
        match kind {
            ActionKind::Create => self.create = self.create.saturating_add(1),
            ActionKind::Read => self.read = self.read.saturating_add(1),
            ActionKind::Update => self.update = self.update.saturating_add(1),
            ActionKind::Delete => self.delete = self.delete.saturating_add(1),
        }
    }

    /// Field-wise sum with another counter set
    pub fn add(&mut self, other: &ActionCounts) {
        self.create = self.create.saturating_add(other.create);
        self.read = self.read.saturating_add(other.read);
        self.update = self.update.saturating_add(other.update);
        self.delete = self.delete.saturating_add(other.delete);
    }
}

/// CSV row shape shared by cache entries and window reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRow {
    pub email: String,
    pub create_count: u64,
    pub read_count: u64,
    pub update_count: u64,
    pub delete_count: u64,
}

/// Per-user action counts for a single calendar day, keyed by email.
///
/// Backed by a `BTreeMap` so serialized output is ordered by email and
/// a cache round trip is byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyAggregate {
    counts: BTreeMap<String, ActionCounts>,
}

impl DailyAggregate {
    /// Count one event occurrence for a user
    pub fn record(&mut self, email: &str, kind: ActionKind) {
        self.counts.entry(email.to_string()).or_default().record(kind);
    }

    /// Fold another aggregate into this one: union of emails, counts
    /// summed field-wise, users absent on one side contribute zero.
    pub fn merge(&mut self, other: &DailyAggregate) {
        for (email, counts) in &other.counts {
            self.counts.entry(email.clone()).or_default().add(counts);
        }
    }

    /// Rows in email order, ready for CSV serialization
    pub fn rows(&self) -> impl Iterator<Item = AggregateRow> + '_ {
        self.counts.iter().map(|(email, c)| AggregateRow {
            email: email.clone(),
            create_count: c.create,
            read_count: c.read,
            update_count: c.update,
            delete_count: c.delete,
        })
    }

    /// Rebuild an aggregate from deserialized CSV rows
    pub fn from_rows<I: IntoIterator<Item = AggregateRow>>(rows: I) -> Self {
        let counts = rows
            .into_iter()
            .map(|row| {
                (
                    row.email,
                    ActionCounts {
                        create: row.create_count,
                        read: row.read_count,
                        update: row.update_count,
                        delete: row.delete_count,
                    },
                )
            })
            .collect();
        Self { counts }
    }
}
