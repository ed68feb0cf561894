//! Continuous event sweep.
//!
//! Processes the sorted assignment-event stream and keeps every zone
//! staffed with the first capable available worker. No fairness weighting
//! here: that belongs to the hourly engine. A worker placed in a zone
//! holds it until a break, lunch, or shift end releases them.
//!
//! Per-worker state machine across the day:
//! not-yet-started → available ↔ (on-break | on-lunch) → finished,
//! where "available" may co-occur with holding a zone and finished is
//! terminal.

use std::collections::{BTreeMap, BTreeSet};

use log::{info, warn};

use super::events::{build_events, EventKind};
use crate::models::{Diagnostic, Worker, Zone};

/// Event-driven assignment engine.
///
/// Stateless between runs; all mutable state lives on the stack of
/// [`EventSweep::run`].
#[derive(Debug, Clone, Default)]
pub struct EventSweep;

impl EventSweep {
    /// Creates a sweep engine.
    pub fn new() -> Self {
        Self
    }

    /// Runs the sweep, writing occupancy into `zones`.
    ///
    /// Returns the soft diagnostics accumulated along the way; staffing
    /// gaps never abort the run.
    pub fn run(&self, workers: &[Worker], zones: &mut [Zone]) -> Vec<Diagnostic> {
        let by_id: BTreeMap<&str, &Worker> = workers.iter().map(|w| (w.id.as_str(), w)).collect();
        let events = build_events(workers);

        let mut diagnostics = Vec::new();
        let mut available: BTreeSet<String> = BTreeSet::new();
        // worker id → zone index currently held
        let mut current_zone: BTreeMap<String, usize> = BTreeMap::new();
        // zone index → current holder
        let mut holder: Vec<Option<String>> = vec![None; zones.len()];
        // workers whose shift has ended; finished is terminal, so a
        // break or lunch ending at the same instant cannot re-add them
        let mut finished: BTreeSet<String> = BTreeSet::new();

        let mut i = 0;
        while i < events.len() {
            let t = events[i].time;

            // Apply every event at this instant before placing anyone.
            while i < events.len() && events[i].time == t {
                let ev = &events[i];
                if ev.kind.is_release() {
                    if let Some(zi) = current_zone.remove(&ev.worker_id) {
                        zones[zi].release(t);
                        holder[zi] = None;
                    }
                    available.remove(&ev.worker_id);
                    if ev.kind == EventKind::ShiftEnd {
                        finished.insert(ev.worker_id.clone());
                    }
                } else if !finished.contains(&ev.worker_id) {
                    available.insert(ev.worker_id.clone());
                }
                i += 1;
            }

            // Place every available worker not currently holding a zone.
            for id in available.iter() {
                if current_zone.contains_key(id) {
                    continue;
                }
                let Some(worker) = by_id.get(id.as_str()) else {
                    continue;
                };
                for (zi, zone) in zones.iter_mut().enumerate() {
                    if holder[zi].is_none() && worker.has_capability(&zone.required_capability) {
                        zone.assign(t, id.clone());
                        holder[zi] = Some(id.clone());
                        current_zone.insert(id.clone(), zi);
                        info!("assigned {id} to {} at {t}", zone.name);
                        break;
                    }
                }
            }

            // Whatever is still vacant at this instant goes on the report.
            // The last event instant closes the day and is not a slot.
            if i < events.len() {
                for (zi, zone) in zones.iter().enumerate() {
                    if holder[zi].is_none() {
                        warn!("no worker for {} at {t}", zone.name);
                        diagnostics.push(Diagnostic::unfilled(&zone.name, t));
                    }
                }
            }
        }

        diagnostics
    }
}
