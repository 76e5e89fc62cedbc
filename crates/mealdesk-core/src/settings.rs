//! Policy configuration sourced from the settings store.
//!
//! The settings store hands the caller two optional `"HH:MM"` strings. The
//! engine must never fail because a value is absent or malformed: each field
//! falls back to its business default independently.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::time::TimeOfDay;

/// Default boundary separating same-day from next-day delivery
pub const DEFAULT_MORNING_WINDOW_END: TimeOfDay = TimeOfDay::from_hm(14, 30);

/// Default time of day after which non-Admin roles cannot place orders
pub const DEFAULT_NIGHT_CUTOFF: TimeOfDay = TimeOfDay::from_hm(22, 0);

/// The two configured time boundaries the policy engine evaluates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Orders placed strictly before this time are delivered the same day
    pub morning_window_end: TimeOfDay,
    /// Orders are blocked strictly after this time for non-Admin roles
    pub night_cutoff: TimeOfDay,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            morning_window_end: DEFAULT_MORNING_WINDOW_END,
            night_cutoff: DEFAULT_NIGHT_CUTOFF,
        }
    }
}

impl PolicyConfig {
    /// Create a config from already-validated boundaries.
    pub fn new(morning_window_end: TimeOfDay, night_cutoff: TimeOfDay) -> Self {
        Self {
            morning_window_end,
            night_cutoff,
        }
    }

    /// Build from the raw optional strings held by the settings store.
    ///
    /// Absent or malformed values fall back to the default for that field;
    /// this constructor never fails.
    pub fn from_settings(morning_window_end: Option<&str>, night_cutoff: Option<&str>) -> Self {
        Self {
            morning_window_end: parse_or_default(
                morning_window_end,
                DEFAULT_MORNING_WINDOW_END,
                "morning_window_end",
            ),
            night_cutoff: parse_or_default(night_cutoff, DEFAULT_NIGHT_CUTOFF, "night_cutoff"),
        }
    }
}

fn parse_or_default(raw: Option<&str>, default: TimeOfDay, field: &'static str) -> TimeOfDay {
    match raw {
        None => default,
        Some(value) => match value.parse() {
            Ok(time) => time,
            Err(err) => {
                warn!(field, value, %err, "settings value is not a valid time, using default");
                default
            }
        },
    }
}
