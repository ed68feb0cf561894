//! Time primitives for a single operating day.
//!
//! All scheduling times are naive local datetimes on one operating day.
//! Windows are half-open: includes start, excludes end.
//!
//! # Input Format
//! Shift rows arrive in the fixed textual format `YYYY-MM-DD HH:MM`
//! (see [`TIMESTAMP_FORMAT`]). Output times are rendered as `HH:MM`.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Fixed timestamp format for shift-row input.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format used when rendering occupancy times for presentation adapters.
pub const HOUR_FORMAT: &str = "%H:%M";

/// Parses a timestamp in the fixed input format.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
}

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: NaiveDateTime,
    /// Interval end (exclusive).
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Duration of this window.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, time: NaiveDateTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies fully within this window.
    pub fn encloses(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Midpoint of this window.
    pub fn midpoint(&self) -> NaiveDateTime {
        self.start + self.duration() / 2
    }
}

/// Bounds of one operating day.
///
/// The hourly engine discretizes this range into whole-hour buckets;
/// the event sweep only uses it as the reporting horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingDay {
    /// Opening time (inclusive).
    pub open: NaiveDateTime,
    /// Closing time (exclusive).
    pub close: NaiveDateTime,
}

impl OperatingDay {
    /// Creates operating-day bounds.
    pub fn new(open: NaiveDateTime, close: NaiveDateTime) -> Self {
        Self { open, close }
    }

    /// Whole-hour bucket starts between open and close.
    ///
    /// Each returned time `h` denotes the bucket [h, h+1h); a bucket is
    /// included only if it fits entirely before closing.
    pub fn hours(&self) -> Vec<NaiveDateTime> {
        let mut out = Vec::new();
        let mut t = self.open;
        while t + Duration::hours(1) <= self.close {
            out.push(t);
            t += Duration::hours(1);
        }
        out
    }
}
