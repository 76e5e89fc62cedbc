//! Wall-clock time of day with minute precision.
//!
//! All policy boundaries (morning-window end, night cutoff) are local
//! wall-clock times with no timezone component. Ordering is lexicographic
//! on (hour, minute), which is exactly the strict-before comparison the
//! scheduling rules need: seconds are never consulted, so 14:29:59 sorts
//! before a 14:30 boundary.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{PolicyError, PolicyResult};

/// A wall-clock time of day, canonically written as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a time of day, validating both components.
    pub fn new(hour: u8, minute: u8) -> PolicyResult<Self> {
        if hour > 23 {
            return Err(PolicyError::invalid_time(format!("hour {hour} out of range")));
        }
        if minute > 59 {
            return Err(PolicyError::invalid_time(format!(
                "minute {minute} out of range"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Const constructor for statically known times.
    ///
    /// Panics if either component is out of range. Intended for `const`
    /// boundaries, where the panic surfaces at compile time; runtime values
    /// go through [`TimeOfDay::new`].
    pub const fn from_hm(hour: u8, minute: u8) -> Self {
        assert!(hour < 24 && minute < 60);
        Self { hour, minute }
    }

    /// Hour component (0-23)
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute component (0-59)
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The wall-clock time of `dt`, seconds truncated.
    pub fn from_datetime(dt: &NaiveDateTime) -> Self {
        Self {
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
        }
    }

    /// Strict "before" comparison used by the morning-window rule.
    ///
    /// True when `self` is earlier than `boundary` by hour, or in an equal
    /// hour with a lesser minute. Equality is "at or after".
    pub fn is_before(&self, boundary: TimeOfDay) -> bool {
        *self < boundary
    }

    /// This time of day as a chrono [`NaiveTime`] at second zero.
    pub fn to_naive_time(&self) -> NaiveTime {
        // Components are validated at construction, so this cannot be None.
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| PolicyError::invalid_time(format!("`{s}` is not HH:MM")))?;
        let hour: u8 = hour
            .parse()
            .map_err(|_| PolicyError::invalid_time(format!("`{s}` has a non-numeric hour")))?;
        let minute: u8 = minute
            .parse()
            .map_err(|_| PolicyError::invalid_time(format!("`{s}` has a non-numeric minute")))?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = PolicyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
