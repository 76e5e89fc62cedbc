//! Convenience re-exports for policy consumers.

pub use crate::decision::{OrderPolicy, PolicyDecision};
pub use crate::display::{format_time_for_display, order_date_explanation};
pub use crate::permissions::Permissions;
pub use crate::validation::DateValidation;
pub use mealdesk_core::{PolicyConfig, PolicyError, PolicyResult, Role, TimeOfDay};
