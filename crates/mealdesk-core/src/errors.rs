//! Unified error type for Mealdesk policy crates
//!
//! A single small enum covers every failure the value types can produce.
//! Policy evaluation itself never returns an error: a rejected order is a
//! normal decision output, not a failure.

use serde::{Deserialize, Serialize};

/// Unified error type for policy value construction and parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum PolicyError {
    /// A time-of-day value was out of range or failed to parse
    #[error("Invalid time of day: {message}")]
    InvalidTimeOfDay {
        /// Description of the offending value
        message: String,
    },

    /// A role label did not match any known permission tier
    #[error("Unknown role: {label}")]
    UnknownRole {
        /// The unrecognized label
        label: String,
    },
}

impl PolicyError {
    /// Create an invalid time-of-day error
    pub fn invalid_time(message: impl Into<String>) -> Self {
        Self::InvalidTimeOfDay {
            message: message.into(),
        }
    }

    /// Create an unknown-role error
    pub fn unknown_role(label: impl Into<String>) -> Self {
        Self::UnknownRole {
            label: label.into(),
        }
    }
}

/// Result type alias for policy value operations
pub type PolicyResult<T> = Result<T, PolicyError>;
