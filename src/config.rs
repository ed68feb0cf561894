//! Run configuration.
//!
//! Every knob the engine consults lives in an explicit [`ScheduleConfig`]
//! value passed into the entry points. The engine has no module-level
//! state and no load-order dependence; two runs with equal configs and
//! inputs produce identical results.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::breaks::BreakPolicy;
use crate::models::OperatingDay;

/// Declaration of one zone: a display name and the capability it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSpec {
    /// Unique display name.
    pub name: String,
    /// Required capability tag.
    pub required_capability: String,
}

impl ZoneSpec {
    /// Creates a zone declaration.
    pub fn new(name: impl Into<String>, required_capability: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required_capability: required_capability.into(),
        }
    }
}

/// All configuration for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Break derivation knobs.
    pub breaks: BreakPolicy,
    /// Consecutive-hours-in-one-zone count beyond which the fairness
    /// penalty starts growing.
    pub penalty_threshold: i64,
    /// The globally valid capability tag set.
    pub valid_capabilities: BTreeSet<String>,
    /// Zones in declaration order; the engines scan them in this order.
    pub zones: Vec<ZoneSpec>,
    /// Operating-day bounds.
    pub day: OperatingDay,
    /// Sentinel worker id recorded for slots that could not be staffed.
    pub placeholder: String,
}

impl Default for ScheduleConfig {
    /// The stock retail profile: four zones, 09:00–17:00 day.
    fn default() -> Self {
        Self::for_day(NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"))
    }
}

impl ScheduleConfig {
    /// Stock configuration bound to a specific operating date.
    pub fn for_day(date: NaiveDate) -> Self {
        let open = date.and_hms_opt(9, 0, 0).expect("valid time");
        let close = date.and_hms_opt(17, 0, 0).expect("valid time");
        Self {
            breaks: BreakPolicy::default(),
            penalty_threshold: 2,
            valid_capabilities: ["ENT", "CSH", "CSS", "ACO"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            zones: vec![
                ZoneSpec::new("Entrance", "ENT"),
                ZoneSpec::new("Cashier", "CSH"),
                ZoneSpec::new("Customer Service", "CSS"),
                ZoneSpec::new("ACO", "ACO"),
            ],
            day: OperatingDay::new(open, close),
            placeholder: "unassigned".to_string(),
        }
    }

    /// Replaces the break policy.
    pub fn with_breaks(mut self, breaks: BreakPolicy) -> Self {
        self.breaks = breaks;
        self
    }

    /// Sets the fairness penalty threshold.
    pub fn with_penalty_threshold(mut self, threshold: i64) -> Self {
        self.penalty_threshold = threshold;
        self
    }

    /// Clears zones and capabilities for a fully custom layout.
    pub fn without_zones(mut self) -> Self {
        self.zones.clear();
        self.valid_capabilities.clear();
        self
    }

    /// Adds a zone and marks its capability as valid.
    pub fn with_zone(
        mut self,
        name: impl Into<String>,
        required_capability: impl Into<String>,
    ) -> Self {
        let spec = ZoneSpec::new(name, required_capability);
        self.valid_capabilities
            .insert(spec.required_capability.clone());
        self.zones.push(spec);
        self
    }

    /// Marks a capability tag as valid without declaring a zone for it.
    pub fn with_capability(mut self, tag: impl Into<String>) -> Self {
        self.valid_capabilities.insert(tag.into());
        self
    }

    /// Sets the operating-day bounds.
    pub fn with_day(mut self, open: NaiveDateTime, close: NaiveDateTime) -> Self {
        self.day = OperatingDay::new(open, close);
        self
    }

    /// Sets the placeholder id for unstaffable slots.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Whether a capability tag belongs to the valid set.
    pub fn is_valid_capability(&self, tag: &str) -> bool {
        self.valid_capabilities.contains(tag)
    }
}
