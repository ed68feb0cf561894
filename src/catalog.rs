//! Input boundary types.
//!
//! The engine is fed by external collaborators: a capability catalog
//! (worker id → tags, supplied by a directory service) and raw shift rows
//! in the fixed textual timestamp format. File parsing lives with the
//! caller; these types only carry already-structured records into the
//! validation pass.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Read-only mapping of worker id → capability tag set.
///
/// Consumed once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityCatalog {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl CapabilityCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a worker with capability tags.
    pub fn with_worker<I, S>(mut self, id: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(id.into(), tags.into_iter().map(Into::into).collect());
        self
    }

    /// Capability tags for a worker, if known.
    pub fn capabilities_for(&self, id: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(id)
    }

    /// Whether a worker id is known.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of catalogued workers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One raw shift row: worker id plus textual start/end timestamps in
/// `YYYY-MM-DD HH:MM` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRow {
    /// Worker identifier; must resolve in the capability catalog.
    pub worker_id: String,
    /// Shift start timestamp, fixed textual format.
    pub start: String,
    /// Shift end timestamp, fixed textual format.
    pub end: String,
}

impl ShiftRow {
    /// Creates a shift row.
    pub fn new(
        worker_id: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            worker_id: worker_id.into(),
            start: start.into(),
            end: end.into(),
        }
    }
}
