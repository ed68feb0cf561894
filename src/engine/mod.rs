//! Assignment engines.
//!
//! Two interchangeable sweeps over one operating day:
//!
//! - [`EventSweep`]: continuous, event-driven; first capable available
//!   worker takes a vacant zone and holds it until released.
//! - [`HourlyEngine`]: fixed hour buckets with fairness weighting and a
//!   placeholder-resolution pass.
//!
//! Both are single-threaded and synchronous; a run owns its workers and
//! zones, shares nothing, and holds no process-wide state. Callers
//! wanting timeouts or cancellation wrap the whole run and discard the
//! result.

mod events;
mod hourly;
mod sweep;

pub use events::{build_events, AssignmentEvent, EventKind};
pub use hourly::{penalty, HourlyEngine, WorkerUsage};
pub use sweep::EventSweep;

use crate::catalog::{CapabilityCatalog, ShiftRow};
use crate::config::ScheduleConfig;
use crate::models::Roster;
use crate::validation::{build_workers, build_zones, RosterError};

/// Full hourly run: validate, sweep, shape.
///
/// Fails fast on any input error and produces no partial table.
pub fn schedule_day(
    catalog: &CapabilityCatalog,
    rows: &[ShiftRow],
    config: &ScheduleConfig,
) -> Result<Roster, RosterError> {
    let workers = build_workers(catalog, rows, config)?;
    let mut zones = build_zones(config)?;
    let diagnostics = HourlyEngine::new(config.clone()).run(&workers, &mut zones);
    Ok(Roster::from_zones(&zones, diagnostics))
}

/// Full event-sweep run: validate, sweep, shape.
pub fn sweep_day(
    catalog: &CapabilityCatalog,
    rows: &[ShiftRow],
    config: &ScheduleConfig,
) -> Result<Roster, RosterError> {
    let workers = build_workers(catalog, rows, config)?;
    let mut zones = build_zones(config)?;
    let diagnostics = EventSweep::new().run(&workers, &mut zones);
    Ok(Roster::from_zones(&zones, diagnostics))
}
