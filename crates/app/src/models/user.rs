//! User directory record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use auramart_core::{Email, UserId, UserRole};

/// A registered user.
///
/// Records are persisted as plain JSON, password included. Plaintext
/// credential storage reproduces the existing storefront contract and is
/// documented as insecure in DESIGN.md; do not extend this pattern to
/// anything that leaves the local machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user id.
    pub id: UserId,
    /// Email address, unique (byte-for-byte) across the directory.
    pub email: Email,
    /// Role of the account.
    pub role: UserRole,
    /// Plaintext password. Absent for records that predate password
    /// capture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// When the record was created. Defaults to load time for records
    /// persisted before this field existed.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a customer record.
    #[must_use]
    pub fn customer(id: UserId, email: Email, password: String) -> Self {
        Self {
            id,
            email,
            role: UserRole::Customer,
            password: Some(password),
            created_at: Utc::now(),
        }
    }
}
