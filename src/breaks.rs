//! Break calculator.
//!
//! Derives short-break and lunch windows from a shift window. Pure and
//! deterministic: no shared state, no side effects, and for any valid
//! shift it returns a well-formed (possibly all-absent) plan.
//!
//! # Rules
//! - Short break: only for shifts of at least `min_shift_for_break`
//!   (default 2 h); starts that long after shift start, lasts
//!   `short_break_minutes` (default 15 min).
//! - Lunch: only for shifts of at least `min_shift_for_lunch`
//!   (default 4 h); centered at the shift midpoint, lasts
//!   `lunch_minutes` (default 30 min).
//! - A lunch window that would overlap the short break is pushed to
//!   start 30 minutes after the break ends.
//! - A window that would not fit inside the shift is dropped.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::models::TimeWindow;

/// Gap inserted between the short break and a displaced lunch.
const LUNCH_DISPLACEMENT_MINUTES: i64 = 30;

/// Break derivation knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakPolicy {
    /// Short-break length in minutes.
    pub short_break_minutes: i64,
    /// Lunch length in minutes.
    pub lunch_minutes: i64,
    /// Minimum shift hours before a short break applies.
    pub min_shift_hours_for_break: i64,
    /// Minimum shift hours before lunch applies.
    pub min_shift_hours_for_lunch: i64,
}

impl Default for BreakPolicy {
    fn default() -> Self {
        Self {
            short_break_minutes: 15,
            lunch_minutes: 30,
            min_shift_hours_for_break: 2,
            min_shift_hours_for_lunch: 4,
        }
    }
}

impl BreakPolicy {
    /// Sets the short-break length.
    pub fn with_short_break_minutes(mut self, minutes: i64) -> Self {
        self.short_break_minutes = minutes;
        self
    }

    /// Sets the lunch length.
    pub fn with_lunch_minutes(mut self, minutes: i64) -> Self {
        self.lunch_minutes = minutes;
        self
    }

    /// Sets the minimum shift hours before a short break applies.
    pub fn with_min_shift_hours_for_break(mut self, hours: i64) -> Self {
        self.min_shift_hours_for_break = hours;
        self
    }

    /// Sets the minimum shift hours before lunch applies.
    pub fn with_min_shift_hours_for_lunch(mut self, hours: i64) -> Self {
        self.min_shift_hours_for_lunch = hours;
        self
    }
}

/// Windows carved out of one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BreakPlan {
    /// Short-break window, if the shift earns one.
    pub break_window: Option<TimeWindow>,
    /// Lunch window, if the shift earns one.
    pub lunch_window: Option<TimeWindow>,
}

/// Computes break and lunch windows for a shift.
///
/// The shift is assumed already validated (`start < end`).
pub fn compute_breaks(shift: &TimeWindow, policy: &BreakPolicy) -> BreakPlan {
    let duration = shift.duration();

    let break_window = if duration >= Duration::hours(policy.min_shift_hours_for_break) {
        let start = shift.start + Duration::hours(policy.min_shift_hours_for_break);
        let window = TimeWindow::new(start, start + Duration::minutes(policy.short_break_minutes));
        fit_inside(shift, window)
    } else {
        None
    };

    let lunch_window = if duration >= Duration::hours(policy.min_shift_hours_for_lunch) {
        let length = Duration::minutes(policy.lunch_minutes);
        let start = shift.midpoint() - length / 2;
        let mut window = TimeWindow::new(start, start + length);
        if let Some(b) = &break_window {
            if window.overlaps(b) {
                let start = b.end + Duration::minutes(LUNCH_DISPLACEMENT_MINUTES);
                window = TimeWindow::new(start, start + length);
            }
        }
        fit_inside(shift, window)
    } else {
        None
    };

    BreakPlan {
        break_window,
        lunch_window,
    }
}

fn fit_inside(shift: &TimeWindow, window: TimeWindow) -> Option<TimeWindow> {
    shift.encloses(&window).then_some(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_timestamp;
    use chrono::NaiveDateTime;

    fn ts(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    fn shift(start: &str, end: &str) -> TimeWindow {
        TimeWindow::new(ts(start), ts(end))
    }

    #[test]
    fn test_short_shift_gets_nothing() {
        let plan = compute_breaks(
            &shift("2024-03-01 09:00", "2024-03-01 10:30"),
            &BreakPolicy::default(),
        );
        assert_eq!(plan.break_window, None);
        assert_eq!(plan.lunch_window, None);
    }

    #[test]
    fn test_medium_shift_gets_break_only() {
        // 3 h: past the break threshold, short of the lunch threshold
        let plan = compute_breaks(
            &shift("2024-03-01 09:00", "2024-03-01 12:00"),
            &BreakPolicy::default(),
        );
        let b = plan.break_window.unwrap();
        assert_eq!(b.start, ts("2024-03-01 11:00"));
        assert_eq!(b.end, ts("2024-03-01 11:15"));
        assert_eq!(plan.lunch_window, None);
    }

    #[test]
    fn test_eight_hour_shift_gets_both() {
        let plan = compute_breaks(
            &shift("2024-03-01 09:00", "2024-03-01 17:00"),
            &BreakPolicy::default(),
        );
        let b = plan.break_window.unwrap();
        assert_eq!(b.start, ts("2024-03-01 11:00"));
        assert_eq!(b.end, ts("2024-03-01 11:15"));

        // Lunch centered at the 13:00 midpoint
        let l = plan.lunch_window.unwrap();
        assert_eq!(l.start, ts("2024-03-01 12:45"));
        assert_eq!(l.end, ts("2024-03-01 13:15"));
        assert!(!l.overlaps(&b));
    }

    #[test]
    fn test_overlapping_lunch_is_displaced() {
        // 4 h shift: midpoint 11:00, lunch [10:45, 11:15) would overlap the
        // break [11:00, 11:15) and moves to 30 min past the break end.
        let plan = compute_breaks(
            &shift("2024-03-01 09:00", "2024-03-01 13:00"),
            &BreakPolicy::default(),
        );
        let b = plan.break_window.unwrap();
        let l = plan.lunch_window.unwrap();
        assert_eq!(b.end, ts("2024-03-01 11:15"));
        assert_eq!(l.start, ts("2024-03-01 11:45"));
        assert_eq!(l.end, ts("2024-03-01 12:15"));
        assert!(!l.overlaps(&b));
    }

    #[test]
    fn test_exact_threshold_shift_drops_unfittable_break() {
        // Exactly 2 h: the break would start at shift end and cannot fit.
        let plan = compute_breaks(
            &shift("2024-03-01 09:00", "2024-03-01 11:00"),
            &BreakPolicy::default(),
        );
        assert_eq!(plan.break_window, None);
    }

    #[test]
    fn test_windows_always_inside_shift() {
        let policies = [
            BreakPolicy::default(),
            BreakPolicy::default()
                .with_short_break_minutes(45)
                .with_lunch_minutes(60),
            BreakPolicy::default().with_min_shift_hours_for_break(3),
        ];
        let shifts = [
            shift("2024-03-01 09:00", "2024-03-01 11:15"),
            shift("2024-03-01 09:00", "2024-03-01 13:00"),
            shift("2024-03-01 06:00", "2024-03-01 18:00"),
        ];
        for policy in &policies {
            for s in &shifts {
                let plan = compute_breaks(s, policy);
                if let Some(b) = plan.break_window {
                    assert!(s.encloses(&b));
                }
                if let Some(l) = plan.lunch_window {
                    assert!(s.encloses(&l));
                }
                if let (Some(b), Some(l)) = (plan.break_window, plan.lunch_window) {
                    assert!(!b.overlaps(&l));
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let s = shift("2024-03-01 09:00", "2024-03-01 17:00");
        let policy = BreakPolicy::default();
        assert_eq!(compute_breaks(&s, &policy), compute_breaks(&s, &policy));
    }
}
