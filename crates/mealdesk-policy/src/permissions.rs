//! Placement permissions: the night-cutoff rule and role-based date locks.
//!
//! Admin bypasses everything. All other roles are blocked strictly after
//! today's date at the configured night cutoff; before (or exactly at) the
//! cutoff, `Privileged` may also override the delivery date while
//! `Normal`/`User` are locked to the computed one.

use chrono::NaiveDateTime;
use mealdesk_core::{Role, TimeOfDay};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What the caller may currently do at the order form.
///
/// Invariant: `can_place_order == false` implies
/// `can_edit_delivery_date == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// Whether the order action is allowed at all right now
    pub can_place_order: bool,
    /// Whether the computed delivery date may be overridden
    pub can_edit_delivery_date: bool,
    /// Populated whenever a restriction applies
    pub reason: Option<String>,
}

impl Permissions {
    fn unrestricted() -> Self {
        Self {
            can_place_order: true,
            can_edit_delivery_date: true,
            reason: None,
        }
    }

    fn blocked(reason: String) -> Self {
        Self {
            can_place_order: false,
            can_edit_delivery_date: false,
            reason: Some(reason),
        }
    }

    fn date_locked(reason: String) -> Self {
        Self {
            can_place_order: true,
            can_edit_delivery_date: false,
            reason: Some(reason),
        }
    }
}

/// Compute placement permissions for `role` at `now`.
///
/// The cutoff comparison uses the full timestamp against today's date at
/// `night_cutoff`, so 22:00:00 exactly is still allowed and 22:00:01 is
/// not. Always returns a complete value; a blocked order is a normal
/// outcome, not an error.
pub fn compute_permissions(now: NaiveDateTime, role: Role, night_cutoff: TimeOfDay) -> Permissions {
    if role.bypasses_restrictions() {
        return Permissions::unrestricted();
    }

    let cutoff = now.date().and_time(night_cutoff.to_naive_time());
    if now > cutoff {
        debug!(%role, %night_cutoff, "order placement blocked by night cutoff");
        return Permissions::blocked(format!(
            "Orders are not allowed after {night_cutoff}. Please try again tomorrow."
        ));
    }

    if role.date_locked() {
        return Permissions::date_locked(format!("Order date is locked for {role} role"));
    }

    Permissions::unrestricted()
}
