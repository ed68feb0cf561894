//! Zone model.
//!
//! A zone is a named post requiring exactly one capability tag and holding
//! at most one worker per time unit. Capacity is not a counter: a time unit
//! is occupied iff the occupancy map has an entry for it, which removes the
//! copied-and-decremented capacity bug class outright.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A work zone with per-time-unit occupancy.
///
/// Constructed empty; mutated only by the assignment engine during a run,
/// read-only afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    /// Unique display name.
    pub name: String,
    /// The single capability tag a worker must hold to staff this zone.
    pub required_capability: String,
    /// Time unit → worker id (or the configured placeholder).
    pub occupancy: BTreeMap<NaiveDateTime, String>,
}

impl Zone {
    /// Creates an empty zone.
    pub fn new(name: impl Into<String>, required_capability: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required_capability: required_capability.into(),
            occupancy: BTreeMap::new(),
        }
    }

    /// Worker id occupying this zone at `time`, if any.
    pub fn occupant_at(&self, time: NaiveDateTime) -> Option<&str> {
        self.occupancy.get(&time).map(String::as_str)
    }

    /// Whether no occupancy entry exists at `time`.
    pub fn is_open_at(&self, time: NaiveDateTime) -> bool {
        !self.occupancy.contains_key(&time)
    }

    /// Records an occupancy entry.
    pub fn assign(&mut self, time: NaiveDateTime, worker_id: impl Into<String>) {
        self.occupancy.insert(time, worker_id.into());
    }

    /// Removes the occupancy entry at `time`, if present.
    pub fn release(&mut self, time: NaiveDateTime) {
        self.occupancy.remove(&time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_timestamp;

    fn ts(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn test_zone_starts_empty() {
        let z = Zone::new("Cashier", "CSH");
        assert!(z.occupancy.is_empty());
        assert!(z.is_open_at(ts("2024-03-01 09:00")));
        assert_eq!(z.occupant_at(ts("2024-03-01 09:00")), None);
    }

    #[test]
    fn test_assign_and_release() {
        let mut z = Zone::new("Entrance", "ENT");
        let t = ts("2024-03-01 10:00");
        z.assign(t, "wren");
        assert_eq!(z.occupant_at(t), Some("wren"));
        assert!(!z.is_open_at(t));

        z.release(t);
        assert!(z.is_open_at(t));
    }

    #[test]
    fn test_occupancy_is_time_sorted() {
        let mut z = Zone::new("Cashier", "CSH");
        z.assign(ts("2024-03-01 11:00"), "b");
        z.assign(ts("2024-03-01 09:00"), "a");
        z.assign(ts("2024-03-01 10:00"), "c");

        let times: Vec<_> = z.occupancy.keys().copied().collect();
        assert_eq!(
            times,
            vec![
                ts("2024-03-01 09:00"),
                ts("2024-03-01 10:00"),
                ts("2024-03-01 11:00"),
            ]
        );
    }
}
