//! User roles.

use serde::{Deserialize, Serialize};

/// Role attached to a directory record.
///
/// Exactly one record in a loaded directory carries [`UserRole::Admin`]:
/// the hardcoded administrator account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Customer,
    Admin,
}

impl UserRole {
    /// Whether this role grants access to the admin dashboard.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}
