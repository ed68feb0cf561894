//! Assignment events for the continuous sweep.
//!
//! Each worker contributes at most six events: shift start/end and the
//! optional break/lunch boundaries. Events exist only for the duration of
//! the sweep and are never persisted.
//!
//! # Ordering
//! Total and deterministic: by time, then kind (releases before
//! acquisitions, so a zone freed at an instant is re-fillable within the
//! same instant), then worker id.

use chrono::NaiveDateTime;

use crate::models::Worker;

/// What happens to a worker at an event time.
///
/// Variant order is load-bearing: releases sort before acquisitions at
/// equal times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventKind {
    /// Shift is over; the worker leaves for good.
    ShiftEnd,
    /// Short break begins; the worker steps out.
    BreakStart,
    /// Lunch begins; the worker steps out.
    LunchStart,
    /// Shift begins; the worker becomes available.
    ShiftStart,
    /// Short break ends; the worker returns.
    BreakEnd,
    /// Lunch ends; the worker returns.
    LunchEnd,
}

impl EventKind {
    /// Whether this event removes the worker from availability.
    pub fn is_release(self) -> bool {
        matches!(
            self,
            EventKind::ShiftEnd | EventKind::BreakStart | EventKind::LunchStart
        )
    }
}

/// One `(time, kind, worker)` tuple in the sweep's event stream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AssignmentEvent {
    /// When the event fires.
    pub time: NaiveDateTime,
    /// What it does.
    pub kind: EventKind,
    /// Whom it concerns.
    pub worker_id: String,
}

impl AssignmentEvent {
    fn new(time: NaiveDateTime, kind: EventKind, worker_id: &str) -> Self {
        Self {
            time,
            kind,
            worker_id: worker_id.to_string(),
        }
    }
}

/// Builds the sorted event stream for a worker set.
pub fn build_events(workers: &[Worker]) -> Vec<AssignmentEvent> {
    let mut events = Vec::with_capacity(workers.len() * 6);
    for w in workers {
        events.push(AssignmentEvent::new(w.shift.start, EventKind::ShiftStart, &w.id));
        events.push(AssignmentEvent::new(w.shift.end, EventKind::ShiftEnd, &w.id));
        if let Some(b) = &w.break_window {
            events.push(AssignmentEvent::new(b.start, EventKind::BreakStart, &w.id));
            events.push(AssignmentEvent::new(b.end, EventKind::BreakEnd, &w.id));
        }
        if let Some(l) = &w.lunch_window {
            events.push(AssignmentEvent::new(l.start, EventKind::LunchStart, &w.id));
            events.push(AssignmentEvent::new(l.end, EventKind::LunchEnd, &w.id));
        }
    }
    events.sort();
    events
}
