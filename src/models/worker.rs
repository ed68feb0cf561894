//! Worker record model.
//!
//! A worker is one person on the operating day: a shift window, a set of
//! capability tags, and the break/lunch windows carved out of the shift.
//! Records are built only through the validation pass and are immutable
//! afterward; each scheduling run owns its own workers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::TimeWindow;
use chrono::NaiveDateTime;

/// A validated worker record for one operating day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Capability tags this worker holds. Empty is legal but makes the
    /// worker unassignable.
    pub capabilities: BTreeSet<String>,
    /// Shift window; always `start < end`.
    pub shift: TimeWindow,
    /// Short-break window, fully inside the shift if present.
    pub break_window: Option<TimeWindow>,
    /// Lunch window, fully inside the shift and disjoint from the
    /// short break if present.
    pub lunch_window: Option<TimeWindow>,
}

impl Worker {
    /// Creates a worker with no break windows.
    pub fn new(id: impl Into<String>, capabilities: BTreeSet<String>, shift: TimeWindow) -> Self {
        Self {
            id: id.into(),
            capabilities,
            shift,
            break_window: None,
            lunch_window: None,
        }
    }

    /// Sets the short-break window.
    pub fn with_break(mut self, window: TimeWindow) -> Self {
        self.break_window = Some(window);
        self
    }

    /// Sets the lunch window.
    pub fn with_lunch(mut self, window: TimeWindow) -> Self {
        self.lunch_window = Some(window);
        self
    }

    /// Whether this worker holds a capability tag.
    pub fn has_capability(&self, tag: &str) -> bool {
        self.capabilities.contains(tag)
    }

    /// Whether the worker is on a break or at lunch at `time`.
    pub fn is_on_break(&self, time: NaiveDateTime) -> bool {
        self.break_window.as_ref().is_some_and(|w| w.contains(time))
            || self.lunch_window.as_ref().is_some_and(|w| w.contains(time))
    }

    /// Whether the worker is on shift and not on break at `time`.
    pub fn is_available_at(&self, time: NaiveDateTime) -> bool {
        self.shift.contains(time) && !self.is_on_break(time)
    }

    /// Whether the worker can cover an entire bucket: the whole window
    /// lies inside the shift and touches no break or lunch window.
    pub fn covers(&self, bucket: &TimeWindow) -> bool {
        self.shift.encloses(bucket)
            && !self.break_window.as_ref().is_some_and(|w| w.overlaps(bucket))
            && !self.lunch_window.as_ref().is_some_and(|w| w.overlaps(bucket))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_timestamp;

    fn ts(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    fn caps(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn eight_hour_worker() -> Worker {
        Worker::new(
            "wren",
            caps(&["CSH", "ENT"]),
            TimeWindow::new(ts("2024-03-01 09:00"), ts("2024-03-01 17:00")),
        )
        .with_break(TimeWindow::new(
            ts("2024-03-01 11:00"),
            ts("2024-03-01 11:15"),
        ))
        .with_lunch(TimeWindow::new(
            ts("2024-03-01 12:45"),
            ts("2024-03-01 13:15"),
        ))
    }

    #[test]
    fn test_has_capability() {
        let w = eight_hour_worker();
        assert!(w.has_capability("CSH"));
        assert!(!w.has_capability("ACO"));
    }

    #[test]
    fn test_is_on_break() {
        let w = eight_hour_worker();
        assert!(w.is_on_break(ts("2024-03-01 11:05")));
        assert!(w.is_on_break(ts("2024-03-01 13:00")));
        assert!(!w.is_on_break(ts("2024-03-01 11:15"))); // exclusive end
        assert!(!w.is_on_break(ts("2024-03-01 10:00")));
    }

    #[test]
    fn test_is_available_at() {
        let w = eight_hour_worker();
        assert!(w.is_available_at(ts("2024-03-01 09:00")));
        assert!(!w.is_available_at(ts("2024-03-01 08:59"))); // before shift
        assert!(!w.is_available_at(ts("2024-03-01 17:00"))); // shift end exclusive
        assert!(!w.is_available_at(ts("2024-03-01 11:10"))); // on break
    }

    #[test]
    fn test_covers_whole_bucket() {
        let w = eight_hour_worker();
        let clear = TimeWindow::new(ts("2024-03-01 09:00"), ts("2024-03-01 10:00"));
        let over_break = TimeWindow::new(ts("2024-03-01 11:00"), ts("2024-03-01 12:00"));
        let over_lunch = TimeWindow::new(ts("2024-03-01 13:00"), ts("2024-03-01 14:00"));
        let past_end = TimeWindow::new(ts("2024-03-01 16:30"), ts("2024-03-01 17:30"));
        assert!(w.covers(&clear));
        assert!(!w.covers(&over_break));
        assert!(!w.covers(&over_lunch));
        assert!(!w.covers(&past_end));
    }

    #[test]
    fn test_empty_capability_set_is_legal() {
        let w = Worker::new(
            "idle",
            BTreeSet::new(),
            TimeWindow::new(ts("2024-03-01 09:00"), ts("2024-03-01 13:00")),
        );
        assert!(!w.has_capability("CSH"));
        assert!(w.is_available_at(ts("2024-03-01 10:00")));
    }
}
