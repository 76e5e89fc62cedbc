//! Mealdesk Core - shared policy value types
//!
//! Value types consumed by the order policy engine: permission tiers
//! ([`Role`]), wall-clock times ([`TimeOfDay`]), and the configured time
//! boundaries ([`PolicyConfig`]). Everything here is an immutable value with
//! no identity or lifecycle; decisions are recomputed from fresh values on
//! every call.
//!
//! Errors exist only at the construction/parsing boundary (an out-of-range
//! hour, a malformed `"HH:MM"` string). The decision paths downstream never
//! fail.

#![forbid(unsafe_code)]

pub mod errors;
pub mod role;
pub mod settings;
pub mod time;

pub use errors::{PolicyError, PolicyResult};
pub use role::Role;
pub use settings::{PolicyConfig, DEFAULT_MORNING_WINDOW_END, DEFAULT_NIGHT_CUTOFF};
pub use time::TimeOfDay;
