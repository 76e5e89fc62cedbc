//! # Mealdesk Policy - Order Scheduling & Permission Policy
//!
//! Pure decision rules for the order form: which calendar date an order is
//! delivered on, whether placement is currently permitted, and whether the
//! computed delivery date may be overridden, given the caller's role, the
//! configured time boundaries, and an explicit "now".
//!
//! # Rules
//!
//! - **Morning window**: orders placed strictly before the configured
//!   morning-window end are delivered the same day; at or after the
//!   boundary, the next day.
//! - **Night cutoff**: strictly after the configured cutoff, non-Admin
//!   roles cannot place orders at all.
//! - **Date lock**: `Normal`/`User` roles never edit the delivery date;
//!   `Privileged` may pick any date from today onward; `Admin` is
//!   unrestricted.
//!
//! # Purity
//!
//! Every function is deterministic and side-effect free. The current time
//! is always an argument, never read from the system clock, so callers (UI
//! timers re-evaluating once a second) can invoke these functions
//! arbitrarily often and replay any decision in tests. A rejected order is
//! a normal output with a populated reason, not an error.

#![forbid(unsafe_code)]

pub mod decision;
pub mod display;
pub mod permissions;
pub mod prelude;
pub mod schedule;
pub mod validation;

pub use decision::{OrderPolicy, PolicyDecision};
pub use display::{format_time_for_display, order_date_explanation};
pub use permissions::{compute_permissions, Permissions};
pub use schedule::{compute_delivery_date, in_morning_window, FALLBACK_MORNING_WINDOW_END};
pub use validation::{validate_custom_order_date, DateValidation};
