//! Display-only helpers: 12-hour formatting and the order-form explanation.
//!
//! Nothing here participates in enforcement. Malformed input falls back to
//! the original string so a bad settings value can never block the
//! workflow, and the explanation text is composed from the same boundary
//! checks as the decision itself.

use chrono::NaiveDateTime;
use mealdesk_core::{PolicyConfig, Role, TimeOfDay};

use crate::permissions::compute_permissions;
use crate::schedule::in_morning_window;

/// Convert a 24-hour `"HH:MM"` string to a 12-hour AM/PM display string.
///
/// `"14:30"` becomes `"2:30 PM"`, `"00:05"` becomes `"12:05 AM"`. Input
/// that does not parse as a time of day is returned unchanged.
pub fn format_time_for_display(time: &str) -> String {
    match time.parse::<TimeOfDay>() {
        Ok(parsed) => twelve_hour(parsed),
        Err(_) => time.to_string(),
    }
}

fn twelve_hour(time: TimeOfDay) -> String {
    let (hour, period) = match time.hour() {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    format!("{}:{:02} {}", hour, time.minute(), period)
}

/// One or two sentences describing the scheduling outcome for the order
/// form.
///
/// Combines the morning-window outcome with the role-specific restriction.
/// The restriction text is taken verbatim from
/// [`compute_permissions`](crate::compute_permissions), so the explanation
/// can never disagree with the enforced decision.
pub fn order_date_explanation(role: Role, config: &PolicyConfig, now: NaiveDateTime) -> String {
    let window_end = twelve_hour(config.morning_window_end);
    let window = if in_morning_window(now, config.morning_window_end) {
        format!("Orders placed before {window_end} are delivered the same day.")
    } else {
        format!("It is past {window_end}, so delivery is scheduled for the next day.")
    };

    match compute_permissions(now, role, config.night_cutoff).reason {
        Some(reason) => format!("{window} {reason}"),
        None => window,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_twelve_hour_formatting() {
        assert_eq!(format_time_for_display("14:30"), "2:30 PM");
        assert_eq!(format_time_for_display("09:05"), "9:05 AM");
        assert_eq!(format_time_for_display("00:05"), "12:05 AM");
        assert_eq!(format_time_for_display("12:00"), "12:00 PM");
        assert_eq!(format_time_for_display("23:59"), "11:59 PM");
    }

    #[test]
    fn test_malformed_input_passes_through() {
        for raw in ["", "later", "25:99", "14.30"] {
            assert_eq!(format_time_for_display(raw), raw);
        }
    }

    #[test]
    fn test_explanation_mentions_window_and_lock() {
        let config = PolicyConfig::default();

        let morning = order_date_explanation(Role::User, &config, at(10, 0));
        assert!(morning.contains("before 2:30 PM"), "{morning}");
        assert!(morning.contains("locked for User role"), "{morning}");

        let afternoon = order_date_explanation(Role::Privileged, &config, at(15, 0));
        assert!(afternoon.contains("next day"), "{afternoon}");
    }

    #[test]
    fn test_explanation_follows_permissions_reason() {
        let config = PolicyConfig::default();
        let late = at(23, 0);

        let explanation = order_date_explanation(Role::Normal, &config, late);
        let reason = compute_permissions(late, Role::Normal, config.night_cutoff)
            .reason
            .unwrap();
        assert!(explanation.contains(&reason), "{explanation}");
    }
}
