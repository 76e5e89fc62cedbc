//! End-to-end order-form scenarios with the business-default boundaries.

use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveDateTime};
use mealdesk_core::Role;
use mealdesk_policy::{order_date_explanation, DateValidation, OrderPolicy, PolicyDecision};

fn march_10(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 10)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

#[test]
fn test_user_mid_morning_order() {
    let policy = OrderPolicy::with_defaults();
    let decision = policy.evaluate(march_10(10, 0), Role::User);

    assert_eq!(
        decision.delivery_date,
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    );
    assert!(decision.in_morning_window);
    assert!(decision.permissions.can_place_order);
    assert!(!decision.permissions.can_edit_delivery_date);
    assert_matches!(
        decision.permissions.reason,
        Some(ref reason) if reason.contains("locked for User role")
    );
}

#[test]
fn test_user_after_night_cutoff() {
    let policy = OrderPolicy::with_defaults();
    let decision = policy.evaluate(march_10(23, 0), Role::User);

    assert!(!decision.permissions.can_place_order);
    assert!(!decision.permissions.can_edit_delivery_date);
    assert_matches!(
        decision.permissions.reason,
        Some(ref reason) if reason.contains("not allowed after 22:00")
    );
}

#[test]
fn test_afternoon_order_rolls_to_next_day() {
    let policy = OrderPolicy::with_defaults();

    let before = policy.evaluate(march_10(14, 29), Role::Privileged);
    assert_eq!(
        before.delivery_date,
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    );

    let after = policy.evaluate(march_10(14, 30), Role::Privileged);
    assert_eq!(
        after.delivery_date,
        NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
    );
    assert!(!after.in_morning_window);
}

#[test]
fn test_admin_is_never_blocked() {
    let policy = OrderPolicy::with_defaults();
    let decision = policy.evaluate(march_10(23, 30), Role::Admin);

    assert!(decision.permissions.can_place_order);
    assert!(decision.permissions.can_edit_delivery_date);
    assert_eq!(decision.permissions.reason, None);
}

#[test]
fn test_settings_strings_drive_the_policy() {
    // Malformed morning value falls back to 14:30; cutoff moves to 20:00.
    let policy = OrderPolicy::from_settings(Some("half past two"), Some("20:00"));

    let decision = policy.evaluate(march_10(14, 0), Role::Privileged);
    assert!(decision.in_morning_window);

    assert!(!policy.can_place_order(march_10(20, 1), Role::Privileged));
}

#[test]
fn test_explanation_matches_decision() {
    let policy = OrderPolicy::with_defaults();
    let now = march_10(16, 0);

    let decision = policy.evaluate(now, Role::Normal);
    let explanation = order_date_explanation(Role::Normal, policy.config(), now);

    assert!(explanation.contains("next day"), "{explanation}");
    let reason = decision.permissions.reason.unwrap();
    assert!(explanation.contains(&reason), "{explanation}");
}

#[test]
fn test_decision_survives_serialization() {
    // Decisions cross the UI boundary as JSON; the round trip must
    // preserve the whole value, reason text included.
    let policy = OrderPolicy::with_defaults();
    let decision = policy.evaluate(march_10(10, 0), Role::User);

    let json = serde_json::to_string(&decision).unwrap();
    let back: PolicyDecision = serde_json::from_str(&json).unwrap();
    assert_eq!(back, decision);

    let validation = policy.validate_custom_date(
        NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
        Role::User,
        march_10(10, 0),
    );
    let json = serde_json::to_string(&validation).unwrap();
    let back: DateValidation = serde_json::from_str(&json).unwrap();
    assert_eq!(back, validation);
}

#[test]
fn test_custom_date_guard_is_independent_of_ui_state() {
    let policy = OrderPolicy::with_defaults();
    let now = march_10(10, 0);
    let tomorrow = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();

    // The form would have disabled the picker for User, but the guard
    // rejects the override on its own.
    assert!(!policy.can_edit_delivery_date(now, Role::User));
    let result = policy.validate_custom_date(tomorrow, Role::User, now);
    assert!(!result.is_valid);

    assert!(policy.validate_custom_date(tomorrow, Role::Privileged, now).is_valid);
}
