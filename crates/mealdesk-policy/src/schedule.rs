//! Delivery-date computation: the morning-window rule.
//!
//! An order placed strictly before the morning-window end is delivered the
//! same day; anything at or after the boundary rolls to the next day. Only
//! wall-clock hour and minute are consulted, so with a 14:30 boundary an
//! order at 14:29:59 is still same-day and one at exactly 14:30:00 is not.

use chrono::{NaiveDate, NaiveDateTime};
use mealdesk_core::TimeOfDay;

/// Boundary used when the caller supplies no configured morning-window end.
pub const FALLBACK_MORNING_WINDOW_END: TimeOfDay = TimeOfDay::from_hm(9, 0);

/// True when `now` falls strictly before the morning-window boundary.
///
/// This is the single predicate shared by the delivery-date computation and
/// the [`PolicyDecision`](crate::PolicyDecision) flag, so the two can never
/// disagree about which side of the boundary "now" is.
pub fn in_morning_window(now: NaiveDateTime, morning_window_end: TimeOfDay) -> bool {
    TimeOfDay::from_datetime(&now).is_before(morning_window_end)
}

/// Compute the delivery date for an order placed at `now`.
///
/// Inside the morning window the order is delivered today; otherwise
/// tomorrow. A missing boundary falls back to
/// [`FALLBACK_MORNING_WINDOW_END`]. Always returns a valid date.
pub fn compute_delivery_date(
    now: NaiveDateTime,
    morning_window_end: Option<TimeOfDay>,
) -> NaiveDate {
    let boundary = morning_window_end.unwrap_or(FALLBACK_MORNING_WINDOW_END);
    if in_morning_window(now, boundary) {
        now.date()
    } else {
        next_day(now.date())
    }
}

// Saturates at the end of the calendar instead of panicking.
fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}
