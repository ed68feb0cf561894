//! Roster (output) model and diagnostics.
//!
//! The roster is the engine's result: for each zone, a time-sorted sequence
//! of `(formatted time, worker id or placeholder)` pairs, plus the soft
//! diagnostics accumulated during the sweep. Shaping it from the zones is a
//! read-only projection with no business logic; any presentation adapter
//! (JSON, table, image) can render it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Zone, HOUR_FORMAT};

/// A soft condition recorded during the sweep.
///
/// Diagnostics never abort a run; they ride alongside the otherwise
/// complete table so the caller can decide how to present them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Condition category.
    pub kind: DiagnosticKind,
    /// Affected zone name.
    pub zone: String,
    /// Affected time unit.
    pub time: NaiveDateTime,
    /// Worker involved, when the condition concerns a specific candidate.
    pub worker: Option<String>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of soft conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// No eligible worker was available for a zone/time.
    UnfilledSlot,
    /// A candidate already held that exact zone at that exact time and
    /// was skipped in favor of the next eligible one.
    DoubleBooking,
}

impl Diagnostic {
    /// Creates an unfilled-slot diagnostic.
    pub fn unfilled(zone: impl Into<String>, time: NaiveDateTime) -> Self {
        let zone = zone.into();
        let message = format!(
            "no eligible worker for zone '{zone}' at {}",
            time.format(HOUR_FORMAT)
        );
        Self {
            kind: DiagnosticKind::UnfilledSlot,
            zone,
            time,
            worker: None,
            message,
        }
    }

    /// Creates a double-booking diagnostic.
    pub fn double_booking(
        zone: impl Into<String>,
        time: NaiveDateTime,
        worker: impl Into<String>,
    ) -> Self {
        let zone = zone.into();
        let worker = worker.into();
        let message = format!(
            "worker '{worker}' already holds zone '{zone}' at {}",
            time.format(HOUR_FORMAT)
        );
        Self {
            kind: DiagnosticKind::DoubleBooking,
            zone,
            time,
            worker: Some(worker),
            message,
        }
    }
}

/// One `(formatted time, worker id or placeholder)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Time unit rendered as `HH:MM`.
    pub time: String,
    /// Assigned worker id, or the configured placeholder.
    pub worker_id: String,
}

/// All entries for one zone, in time order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRoster {
    /// Zone display name.
    pub zone: String,
    /// Time-sorted occupancy entries.
    pub entries: Vec<RosterEntry>,
}

/// The complete result of a scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Per-zone occupancy in zone declaration order.
    pub zones: Vec<ZoneRoster>,
    /// Soft conditions recorded during the sweep.
    pub diagnostics: Vec<Diagnostic>,
}

impl Roster {
    /// Projects zones into the presentation shape.
    ///
    /// Zone order follows the input slice; entries within a zone follow
    /// occupancy-map time order.
    pub fn from_zones(zones: &[Zone], diagnostics: Vec<Diagnostic>) -> Self {
        let zones = zones
            .iter()
            .map(|z| ZoneRoster {
                zone: z.name.clone(),
                entries: z
                    .occupancy
                    .iter()
                    .map(|(time, worker_id)| RosterEntry {
                        time: time.format(HOUR_FORMAT).to_string(),
                        worker_id: worker_id.clone(),
                    })
                    .collect(),
            })
            .collect();
        Self { zones, diagnostics }
    }

    /// Entries for a zone by name.
    pub fn entries_for(&self, zone: &str) -> Option<&[RosterEntry]> {
        self.zones
            .iter()
            .find(|z| z.zone == zone)
            .map(|z| z.entries.as_slice())
    }

    /// Whether no soft conditions were recorded.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Unfilled-slot diagnostics only.
    pub fn unfilled_slots(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::UnfilledSlot)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_timestamp;

    fn ts(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    fn sample_zones() -> Vec<Zone> {
        let mut entrance = Zone::new("Entrance", "ENT");
        entrance.assign(ts("2024-03-01 10:00"), "brook");
        entrance.assign(ts("2024-03-01 09:00"), "wren");

        let cashier = Zone::new("Cashier", "CSH");
        vec![entrance, cashier]
    }

    #[test]
    fn test_projection_preserves_zone_order() {
        let roster = Roster::from_zones(&sample_zones(), Vec::new());
        assert_eq!(roster.zones[0].zone, "Entrance");
        assert_eq!(roster.zones[1].zone, "Cashier");
    }

    #[test]
    fn test_entries_time_sorted_and_formatted() {
        let roster = Roster::from_zones(&sample_zones(), Vec::new());
        let entries = roster.entries_for("Entrance").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].time, "09:00");
        assert_eq!(entries[0].worker_id, "wren");
        assert_eq!(entries[1].time, "10:00");
        assert_eq!(entries[1].worker_id, "brook");
    }

    #[test]
    fn test_empty_zone_has_no_entries() {
        let roster = Roster::from_zones(&sample_zones(), Vec::new());
        assert!(roster.entries_for("Cashier").unwrap().is_empty());
        assert!(roster.entries_for("Missing").is_none());
    }

    #[test]
    fn test_diagnostic_filters() {
        let t = ts("2024-03-01 09:00");
        let diags = vec![
            Diagnostic::unfilled("Cashier", t),
            Diagnostic::double_booking("Entrance", t, "wren"),
        ];
        let roster = Roster::from_zones(&sample_zones(), diags);
        assert!(!roster.is_clean());
        assert_eq!(roster.unfilled_slots().len(), 1);
        assert_eq!(roster.unfilled_slots()[0].zone, "Cashier");
    }

    #[test]
    fn test_diagnostic_messages() {
        let t = ts("2024-03-01 14:00");
        let u = Diagnostic::unfilled("ACO", t);
        assert!(u.message.contains("ACO"));
        assert!(u.message.contains("14:00"));
        assert_eq!(u.worker, None);

        let d = Diagnostic::double_booking("ACO", t, "wren");
        assert_eq!(d.worker.as_deref(), Some("wren"));
        assert!(d.message.contains("wren"));
    }

    #[test]
    fn test_roster_serializes() {
        let roster = Roster::from_zones(&sample_zones(), Vec::new());
        let json = serde_json::to_string(&roster).unwrap();
        assert!(json.contains("\"Entrance\""));
        assert!(json.contains("\"09:00\""));
    }
}
