//! Custom delivery-date validation.
//!
//! A second, independent guard on the submission path: even if the UI
//! failed to disable the date picker, a locked role's override is rejected
//! here. Comparison is at day granularity with no upper bound on future
//! dates.

use chrono::{NaiveDate, NaiveDateTime};
use mealdesk_core::Role;
use serde::{Deserialize, Serialize};

/// Outcome of validating a user-supplied delivery date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValidation {
    /// Whether the override is acceptable
    pub is_valid: bool,
    /// Populated when the override is rejected
    pub reason: Option<String>,
}

impl DateValidation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            reason: None,
        }
    }

    fn invalid(reason: String) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason),
        }
    }
}

/// Validate a user-supplied override of the delivery date.
///
/// `Admin` may pick any date. `Normal`/`User` may never override.
/// `Privileged` may pick today or any future date; past dates are rejected.
pub fn validate_custom_order_date(
    custom_date: NaiveDate,
    role: Role,
    now: NaiveDateTime,
) -> DateValidation {
    if role.bypasses_restrictions() {
        return DateValidation::valid();
    }

    if role.date_locked() {
        return DateValidation::invalid(format!("{role} cannot edit delivery dates"));
    }

    if custom_date < now.date() {
        return DateValidation::invalid("Cannot select past dates for delivery".to_string());
    }

    DateValidation::valid()
}
