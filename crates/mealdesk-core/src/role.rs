//! Permission tiers governing order placement and date-edit rights.

use serde::{Deserialize, Serialize};

use crate::errors::PolicyError;

/// Permission tier of the user placing an order.
///
/// `Normal` and `User` are policy-equivalent: the upstream identity system
/// uses both labels as synonyms, so both are kept as distinct values rather
/// than collapsed at this boundary. Every rule treats them identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Bypasses every restriction, including the night cutoff
    Admin,
    /// May place orders before the cutoff and override the delivery date
    Privileged,
    /// May place orders before the cutoff; delivery date is locked
    Normal,
    /// Synonym for `Normal` used by the upstream identity system
    User,
}

impl Role {
    /// All four tiers, in descending order of privilege
    pub const ALL: [Role; 4] = [Role::Admin, Role::Privileged, Role::Normal, Role::User];

    /// The exact label used by the identity system
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Privileged => "Privileged",
            Role::Normal => "Normal",
            Role::User => "User",
        }
    }

    /// Admin bypasses every placement rule, night cutoff included
    pub fn bypasses_restrictions(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Roles whose delivery date is locked to the computed value
    pub fn date_locked(&self) -> bool {
        matches!(self, Role::Normal | Role::User)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Privileged" => Ok(Role::Privileged),
            "Normal" => Ok(Role::Normal),
            "User" => Ok(Role::User),
            other => Err(PolicyError::unknown_role(other)),
        }
    }
}
