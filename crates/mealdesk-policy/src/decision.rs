//! Composite policy decision: the guard the order form consults.
//!
//! [`OrderPolicy`] wraps the configured time boundaries and answers every
//! policy question for an explicit "now". It never reads the system clock
//! or an ambient settings store, so two calls with the same arguments
//! always produce identical decisions.

use chrono::{NaiveDate, NaiveDateTime};
use mealdesk_core::{PolicyConfig, Role};
use serde::{Deserialize, Serialize};

use crate::permissions::{compute_permissions, Permissions};
use crate::schedule::{compute_delivery_date, in_morning_window};
use crate::validation::{validate_custom_order_date, DateValidation};

/// Everything the order form needs to render its current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDecision {
    /// Calendar date the order will be delivered on
    pub delivery_date: NaiveDate,
    /// Placement and date-edit rights at the evaluated time
    pub permissions: Permissions,
    /// Whether the evaluated time is still inside the same-day window.
    /// Shares its boundary predicate with the date computation, so the
    /// flag and the date can never disagree.
    pub in_morning_window: bool,
}

/// Guard over the configured time boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPolicy {
    config: PolicyConfig,
}

impl OrderPolicy {
    /// Create a policy over the given boundaries.
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Policy with the default 14:30 / 22:00 boundaries.
    pub fn with_defaults() -> Self {
        Self::new(PolicyConfig::default())
    }

    /// Build from the raw optional settings strings.
    ///
    /// Absent or malformed values fall back to the defaults; construction
    /// never fails.
    pub fn from_settings(morning_window_end: Option<&str>, night_cutoff: Option<&str>) -> Self {
        Self::new(PolicyConfig::from_settings(morning_window_end, night_cutoff))
    }

    /// The boundaries this policy evaluates against.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Evaluate the full decision for `role` at `now`.
    pub fn evaluate(&self, now: NaiveDateTime, role: Role) -> PolicyDecision {
        PolicyDecision {
            delivery_date: self.delivery_date(now),
            permissions: self.permissions(now, role),
            in_morning_window: in_morning_window(now, self.config.morning_window_end),
        }
    }

    /// The delivery date an order placed at `now` would be assigned.
    pub fn delivery_date(&self, now: NaiveDateTime) -> NaiveDate {
        compute_delivery_date(now, Some(self.config.morning_window_end))
    }

    /// Placement permissions for `role` at `now`.
    pub fn permissions(&self, now: NaiveDateTime, role: Role) -> Permissions {
        compute_permissions(now, role, self.config.night_cutoff)
    }

    /// Whether `role` may place an order at all at `now`.
    pub fn can_place_order(&self, now: NaiveDateTime, role: Role) -> bool {
        self.permissions(now, role).can_place_order
    }

    /// Whether `role` may override the computed delivery date at `now`.
    pub fn can_edit_delivery_date(&self, now: NaiveDateTime, role: Role) -> bool {
        self.permissions(now, role).can_edit_delivery_date
    }

    /// Validate a user-supplied delivery date against this policy.
    pub fn validate_custom_date(
        &self,
        custom_date: NaiveDate,
        role: Role,
        now: NaiveDateTime,
    ) -> DateValidation {
        validate_custom_order_date(custom_date, role, now)
    }
}

impl Default for OrderPolicy {
    fn default() -> Self {
        Self::with_defaults()
    }
}
