//! Day-roster assignment engine.
//!
//! Assigns a roster of workers, each with a time-bounded shift and a set
//! of capability tags, to named single-capacity zones for every time unit
//! of one operating day. Produces a conflict-free, skill-respecting,
//! fairness-aware occupancy table plus diagnostics for every slot that
//! could not be staffed.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Worker`, `Zone`, `TimeWindow`,
//!   `OperatingDay`, `Roster`, `Diagnostic`
//! - **`catalog`**: Input boundary — capability catalog and raw shift rows
//! - **`breaks`**: Pure break/lunch window derivation
//! - **`validation`**: Hard input checks; fatal errors abort before any
//!   assignment happens
//! - **`engine`**: The event sweep and the fairness-aware hourly engine,
//!   plus the `schedule_day`/`sweep_day` entry points
//! - **`config`**: Explicit per-run configuration (no global state)
//!
//! # Example
//!
//! ```
//! use zoneplan::catalog::{CapabilityCatalog, ShiftRow};
//! use zoneplan::config::ScheduleConfig;
//! use zoneplan::engine::schedule_day;
//! use chrono::NaiveDate;
//!
//! let catalog = CapabilityCatalog::new().with_worker("wren", ["CSH", "ENT"]);
//! let rows = vec![ShiftRow::new("wren", "2024-03-01 09:00", "2024-03-01 17:00")];
//! let config = ScheduleConfig::for_day(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
//!
//! let roster = schedule_day(&catalog, &rows, &config).unwrap();
//! assert_eq!(roster.zones.len(), 4);
//! ```
//!
//! Presentation (JSON, tables, images) and transport (uploads, routing)
//! are the caller's business: the roster serializes with serde and that
//! is where this crate stops.

pub mod breaks;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod models;
pub mod validation;

pub use config::{ScheduleConfig, ZoneSpec};
pub use engine::{schedule_day, sweep_day};
pub use models::{Diagnostic, DiagnosticKind, Roster, Worker, Zone};
pub use validation::RosterError;
