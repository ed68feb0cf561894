//! Domain models for day rostering.
//!
//! The data flow is: capability catalog + raw shift rows → validated
//! [`Worker`] records → break carve-outs → the assignment engine writes
//! [`Zone`] occupancy → projected into a [`Roster`] for presentation.

mod roster;
mod time;
mod worker;
mod zone;

pub use roster::{Diagnostic, DiagnosticKind, Roster, RosterEntry, ZoneRoster};
pub use time::{parse_timestamp, OperatingDay, TimeWindow, HOUR_FORMAT, TIMESTAMP_FORMAT};
pub use worker::Worker;
pub use zone::Zone;
