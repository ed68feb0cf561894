//! Discretized-hour engine with fairness.
//!
//! Walks the operating day in whole-hour buckets and fills every zone
//! each hour. When several workers compete for a zone the engine prefers
//! the one with the fewest total assigned hours, then the lowest
//! consecutive-hours penalty, then the earliest shift start, then the
//! smallest worker id. Slots nobody can take get the configured
//! placeholder id and a single resolution pass afterwards retries them
//! against later-starting workers that hold the required capability.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDateTime};
use log::{info, warn};

use crate::config::ScheduleConfig;
use crate::models::{Diagnostic, TimeWindow, Worker, Zone};

/// Fairness cost for holding one zone `consecutive_hours` in a row.
///
/// Zero at or below the threshold, then grows by 1 per extra hour.
pub fn penalty(consecutive_hours: i64, threshold: i64) -> i64 {
    (consecutive_hours - threshold).max(0)
}

/// Per-worker bookkeeping across the day.
#[derive(Debug, Clone, Default)]
pub struct WorkerUsage {
    /// Total hours assigned so far.
    pub hours_used: i64,
    /// Zone held in the previous hour, if any.
    pub current_zone: Option<String>,
    /// Consecutive hours spent in `current_zone` up to now.
    pub consecutive_in_zone: i64,
    /// Hour → zone name for every assignment this run.
    pub assigned: BTreeMap<NaiveDateTime, String>,
}

/// Hour-bucket assignment engine.
#[derive(Debug, Clone)]
pub struct HourlyEngine {
    config: ScheduleConfig,
}

impl HourlyEngine {
    /// Creates an engine for one run configuration.
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// Runs the hourly sweep, writing occupancy into `zones`.
    ///
    /// Every zone receives exactly one entry per hour bucket: a worker id
    /// or the placeholder. Soft conditions are returned as diagnostics;
    /// nothing here aborts.
    pub fn run(&self, workers: &[Worker], zones: &mut [Zone]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut usage: BTreeMap<String, WorkerUsage> = workers
            .iter()
            .map(|w| (w.id.clone(), WorkerUsage::default()))
            .collect();

        let hours = self.config.day.hours();
        for &hour in &hours {
            let bucket = TimeWindow::new(hour, hour + Duration::hours(1));

            for zone in zones.iter_mut() {
                let pick = find_best_worker(
                    workers,
                    &usage,
                    &bucket,
                    &zone.name,
                    &zone.required_capability,
                    self.config.penalty_threshold,
                    &mut diagnostics,
                );
                match pick {
                    Some(id) => {
                        info!("assigned {id} to {} at {hour}", zone.name);
                        zone.assign(hour, &id);
                        let entry = usage.entry(id).or_default();
                        entry.hours_used += 1;
                        entry.assigned.insert(hour, zone.name.clone());
                    }
                    None => {
                        warn!("no worker for {} at {hour}", zone.name);
                        diagnostics.push(Diagnostic::unfilled(&zone.name, hour));
                        zone.assign(hour, &self.config.placeholder);
                    }
                }
            }

            // Close out the hour: advance or reset each streak.
            for entry in usage.values_mut() {
                match entry.assigned.get(&hour) {
                    Some(z) if Some(z) == entry.current_zone.as_ref() => {
                        entry.consecutive_in_zone += 1;
                    }
                    Some(z) => {
                        entry.current_zone = Some(z.clone());
                        entry.consecutive_in_zone = 1;
                    }
                    None => {
                        entry.current_zone = None;
                        entry.consecutive_in_zone = 0;
                    }
                }
            }
        }

        self.resolve_placeholders(workers, zones, &mut usage, &mut diagnostics);
        diagnostics
    }

    /// Second chance for placeholder slots.
    ///
    /// A placeholder may be replaced by a worker whose shift starts
    /// strictly after the unfilled hour, who holds the zone's required
    /// capability, and who is not committed anywhere at that hour. If no
    /// such worker exists, the placeholder stands.
    fn resolve_placeholders(
        &self,
        workers: &[Worker],
        zones: &mut [Zone],
        usage: &mut BTreeMap<String, WorkerUsage>,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for zone in zones.iter_mut() {
            let unfilled: Vec<NaiveDateTime> = zone
                .occupancy
                .iter()
                .filter(|(_, id)| **id == self.config.placeholder)
                .map(|(t, _)| *t)
                .collect();

            for hour in unfilled {
                let mut best: Option<(SelectionKey, &Worker)> = None;
                for worker in workers {
                    if worker.shift.start <= hour {
                        continue;
                    }
                    if !worker.has_capability(&zone.required_capability) {
                        continue;
                    }
                    let entry = usage.get(&worker.id);
                    match entry.and_then(|u| u.assigned.get(&hour)) {
                        Some(z) if *z == zone.name => {
                            warn!("skipping {}: already holds {} at {hour}", worker.id, zone.name);
                            diagnostics.push(Diagnostic::double_booking(&zone.name, hour, &worker.id));
                            continue;
                        }
                        Some(_) => continue,
                        None => {}
                    }
                    let key = SelectionKey {
                        hours_used: entry.map_or(0, |u| u.hours_used),
                        penalty: 0,
                        shift_start: worker.shift.start,
                        id: worker.id.clone(),
                    };
                    if best.as_ref().is_none_or(|(k, _)| key < *k) {
                        best = Some((key, worker));
                    }
                }

                if let Some((_, worker)) = best {
                    info!("resolved {} at {hour} with {}", zone.name, worker.id);
                    zone.assign(hour, &worker.id);
                    let entry = usage.entry(worker.id.clone()).or_default();
                    entry.hours_used += 1;
                    entry.assigned.insert(hour, zone.name.clone());
                }
            }
        }
    }
}

/// Ordering key for candidate selection; smaller wins.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SelectionKey {
    hours_used: i64,
    penalty: i64,
    shift_start: NaiveDateTime,
    id: String,
}

/// Picks the best eligible worker for one zone/hour.
///
/// Eligible means: the worker covers the whole bucket (on shift, no break
/// or lunch overlap), holds the capability, and is not committed anywhere
/// this hour. A candidate already holding this exact zone this hour is
/// rejected with a double-booking diagnostic rather than an error.
fn find_best_worker(
    workers: &[Worker],
    usage: &BTreeMap<String, WorkerUsage>,
    bucket: &TimeWindow,
    zone_name: &str,
    required_capability: &str,
    penalty_threshold: i64,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<String> {
    let hour = bucket.start;
    let mut best: Option<SelectionKey> = None;

    for worker in workers {
        if !worker.covers(bucket) || !worker.has_capability(required_capability) {
            continue;
        }
        let entry = usage.get(&worker.id);
        match entry.and_then(|u| u.assigned.get(&hour)) {
            Some(z) if z == zone_name => {
                warn!("skipping {}: already holds {zone_name} at {hour}", worker.id);
                diagnostics.push(Diagnostic::double_booking(zone_name, hour, &worker.id));
                continue;
            }
            Some(_) => continue, // busy in another zone this hour
            None => {}
        }

        let streak = match entry {
            Some(u) if u.current_zone.as_deref() == Some(zone_name) => u.consecutive_in_zone + 1,
            _ => 1,
        };
        let key = SelectionKey {
            hours_used: entry.map_or(0, |u| u.hours_used),
            penalty: penalty(streak, penalty_threshold),
            shift_start: worker.shift.start,
            id: worker.id.clone(),
        };
        if best.as_ref().is_none_or(|k| key < *k) {
            best = Some(key);
        }
    }

    best.map(|k| k.id)
}
