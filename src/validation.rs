//! Hard input validation.
//!
//! Everything fatal is caught here, before any assignment happens: the
//! engine refuses to run on bad data and never produces a partial table.
//! Soft conditions (staffing gaps, double-booking skips) are not errors —
//! they accumulate as [`Diagnostic`](crate::models::Diagnostic)s during
//! the sweep instead.
//!
//! Checks, per shift row:
//! - the worker id resolves in the capability catalog
//! - both timestamps parse in the fixed `YYYY-MM-DD HH:MM` format
//! - `start < end`
//! - every catalogued capability tag belongs to the valid set
//!
//! Per zone declaration: the required capability is valid and zone names
//! are unique. Derived break windows are re-checked against the shift
//! bounds even though the calculator cannot produce bad ones.

use thiserror::Error;

use crate::breaks::compute_breaks;
use crate::catalog::{CapabilityCatalog, ShiftRow};
use crate::config::ScheduleConfig;
use crate::models::{parse_timestamp, TimeWindow, Worker, Zone};

/// A fatal input error. Aborts the run; nothing is assigned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    /// A shift row names a worker absent from the capability catalog.
    #[error("shift row {row}: unknown worker id '{id}'")]
    UnknownWorker {
        /// Zero-based row index.
        row: usize,
        /// The unresolvable id.
        id: String,
    },

    /// A timestamp field does not parse in the fixed format.
    #[error("shift row {row}: invalid timestamp '{value}' in field '{field}' for worker '{id}'")]
    InvalidTimestamp {
        /// Zero-based row index.
        row: usize,
        /// Worker id on the row.
        id: String,
        /// Field name (`start` or `end`).
        field: &'static str,
        /// The unparsable text.
        value: String,
    },

    /// A shift does not start before it ends.
    #[error("shift row {row}: shift for '{id}' must start before it ends ({start} >= {end})")]
    InvalidShift {
        /// Zero-based row index.
        row: usize,
        /// Worker id on the row.
        id: String,
        /// Offending start text.
        start: String,
        /// Offending end text.
        end: String,
    },

    /// A worker carries a capability tag outside the valid set.
    #[error("worker '{id}' has invalid capability tag '{tag}'")]
    InvalidCapability {
        /// Worker id.
        id: String,
        /// The invalid tag.
        tag: String,
    },

    /// A zone requires a capability tag outside the valid set.
    #[error("zone '{zone}' requires invalid capability tag '{tag}'")]
    InvalidZoneCapability {
        /// Zone name.
        zone: String,
        /// The invalid tag.
        tag: String,
    },

    /// Two zone declarations share a name.
    #[error("duplicate zone name '{zone}'")]
    DuplicateZone {
        /// The repeated name.
        zone: String,
    },

    /// A break or lunch window lies outside its shift.
    #[error("worker '{id}': {which} window lies outside the shift")]
    BreakOutsideShift {
        /// Worker id.
        id: String,
        /// `break` or `lunch`.
        which: &'static str,
    },

    /// Break and lunch windows overlap.
    #[error("worker '{id}': break and lunch windows overlap")]
    OverlappingBreaks {
        /// Worker id.
        id: String,
    },
}

/// Builds zones from the configured declarations.
pub fn build_zones(config: &ScheduleConfig) -> Result<Vec<Zone>, RosterError> {
    let mut seen = std::collections::BTreeSet::new();
    let mut zones = Vec::with_capacity(config.zones.len());
    for spec in &config.zones {
        if !config.is_valid_capability(&spec.required_capability) {
            return Err(RosterError::InvalidZoneCapability {
                zone: spec.name.clone(),
                tag: spec.required_capability.clone(),
            });
        }
        if !seen.insert(spec.name.as_str()) {
            return Err(RosterError::DuplicateZone {
                zone: spec.name.clone(),
            });
        }
        zones.push(Zone::new(&spec.name, &spec.required_capability));
    }
    Ok(zones)
}

/// Builds validated worker records from the catalog and raw shift rows.
///
/// Break and lunch windows are derived here via the break calculator and
/// attached to the record. Row order is preserved; the first offending
/// row aborts.
pub fn build_workers(
    catalog: &CapabilityCatalog,
    rows: &[ShiftRow],
    config: &ScheduleConfig,
) -> Result<Vec<Worker>, RosterError> {
    let mut workers = Vec::with_capacity(rows.len());

    for (row, shift_row) in rows.iter().enumerate() {
        let capabilities = catalog
            .capabilities_for(&shift_row.worker_id)
            .ok_or_else(|| RosterError::UnknownWorker {
                row,
                id: shift_row.worker_id.clone(),
            })?
            .clone();

        for tag in &capabilities {
            if !config.is_valid_capability(tag) {
                return Err(RosterError::InvalidCapability {
                    id: shift_row.worker_id.clone(),
                    tag: tag.clone(),
                });
            }
        }

        let start = parse_timestamp(&shift_row.start).map_err(|_| {
            RosterError::InvalidTimestamp {
                row,
                id: shift_row.worker_id.clone(),
                field: "start",
                value: shift_row.start.clone(),
            }
        })?;
        let end = parse_timestamp(&shift_row.end).map_err(|_| RosterError::InvalidTimestamp {
            row,
            id: shift_row.worker_id.clone(),
            field: "end",
            value: shift_row.end.clone(),
        })?;

        if start >= end {
            return Err(RosterError::InvalidShift {
                row,
                id: shift_row.worker_id.clone(),
                start: shift_row.start.clone(),
                end: shift_row.end.clone(),
            });
        }

        let shift = TimeWindow::new(start, end);
        let plan = compute_breaks(&shift, &config.breaks);
        check_break_plan(&shift_row.worker_id, &shift, plan.break_window, plan.lunch_window)?;

        let mut worker = Worker::new(&shift_row.worker_id, capabilities, shift);
        if let Some(b) = plan.break_window {
            worker = worker.with_break(b);
        }
        if let Some(l) = plan.lunch_window {
            worker = worker.with_lunch(l);
        }
        workers.push(worker);
    }

    Ok(workers)
}

fn check_break_plan(
    id: &str,
    shift: &TimeWindow,
    break_window: Option<TimeWindow>,
    lunch_window: Option<TimeWindow>,
) -> Result<(), RosterError> {
    if let Some(b) = &break_window {
        if !shift.encloses(b) || b.start >= b.end {
            return Err(RosterError::BreakOutsideShift {
                id: id.to_string(),
                which: "break",
            });
        }
    }
    if let Some(l) = &lunch_window {
        if !shift.encloses(l) || l.start >= l.end {
            return Err(RosterError::BreakOutsideShift {
                id: id.to_string(),
                which: "lunch",
            });
        }
    }
    if let (Some(b), Some(l)) = (&break_window, &lunch_window) {
        if b.overlaps(l) {
            return Err(RosterError::OverlappingBreaks { id: id.to_string() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScheduleConfig;
    use chrono::NaiveDate;

    fn config() -> ScheduleConfig {
        ScheduleConfig::for_day(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    fn catalog() -> CapabilityCatalog {
        CapabilityCatalog::new()
            .with_worker("wren", ["CSH", "ENT"])
            .with_worker("brook", ["ACO"])
    }

    #[test]
    fn test_valid_rows_build_workers() {
        let rows = vec![
            ShiftRow::new("wren", "2024-03-01 09:00", "2024-03-01 17:00"),
            ShiftRow::new("brook", "2024-03-01 10:00", "2024-03-01 13:00"),
        ];
        let workers = build_workers(&catalog(), &rows, &config()).unwrap();
        assert_eq!(workers.len(), 2);

        // 8 h shift earns both windows, 3 h shift only the short break
        assert!(workers[0].break_window.is_some());
        assert!(workers[0].lunch_window.is_some());
        assert!(workers[1].break_window.is_some());
        assert!(workers[1].lunch_window.is_none());
    }

    #[test]
    fn test_unknown_worker_aborts() {
        let rows = vec![ShiftRow::new("sage", "2024-03-01 09:00", "2024-03-01 13:00")];
        let err = build_workers(&catalog(), &rows, &config()).unwrap_err();
        assert_eq!(
            err,
            RosterError::UnknownWorker {
                row: 0,
                id: "sage".to_string()
            }
        );
    }

    #[test]
    fn test_unparsable_timestamp_aborts() {
        let rows = vec![ShiftRow::new("wren", "09:00", "2024-03-01 13:00")];
        let err = build_workers(&catalog(), &rows, &config()).unwrap_err();
        assert!(matches!(
            err,
            RosterError::InvalidTimestamp { row: 0, field: "start", .. }
        ));
    }

    #[test]
    fn test_inverted_shift_aborts() {
        let rows = vec![ShiftRow::new("wren", "2024-03-01 13:00", "2024-03-01 09:00")];
        let err = build_workers(&catalog(), &rows, &config()).unwrap_err();
        assert!(matches!(err, RosterError::InvalidShift { .. }));
    }

    #[test]
    fn test_invalid_capability_tag_aborts() {
        let catalog = CapabilityCatalog::new().with_worker("wren", ["CSH", "LAS"]);
        let rows = vec![ShiftRow::new("wren", "2024-03-01 09:00", "2024-03-01 13:00")];
        let err = build_workers(&catalog, &rows, &config()).unwrap_err();
        assert_eq!(
            err,
            RosterError::InvalidCapability {
                id: "wren".to_string(),
                tag: "LAS".to_string()
            }
        );
    }

    #[test]
    fn test_zone_with_invalid_capability_aborts() {
        // with_zone whitelists its tag, so strip it back out
        let mut cfg = config().with_zone("Bakery", "BAK");
        cfg.valid_capabilities.remove("BAK");
        let err = build_zones(&cfg).unwrap_err();
        assert!(matches!(err, RosterError::InvalidZoneCapability { .. }));
    }

    #[test]
    fn test_duplicate_zone_name_aborts() {
        let cfg = config().with_zone("Cashier", "CSH");
        let err = build_zones(&cfg).unwrap_err();
        assert_eq!(
            err,
            RosterError::DuplicateZone {
                zone: "Cashier".to_string()
            }
        );
    }

    #[test]
    fn test_build_zones_declaration_order() {
        let zones = build_zones(&config()).unwrap();
        let names: Vec<_> = zones.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, vec!["Entrance", "Cashier", "Customer Service", "ACO"]);
    }

    #[test]
    fn test_error_messages_name_the_row() {
        let rows = vec![
            ShiftRow::new("wren", "2024-03-01 09:00", "2024-03-01 13:00"),
            ShiftRow::new("sage", "2024-03-01 09:00", "2024-03-01 13:00"),
        ];
        let err = build_workers(&catalog(), &rows, &config()).unwrap_err();
        assert!(err.to_string().contains("row 1"));
        assert!(err.to_string().contains("sage"));
    }
}
