//! User entity - the persisted personal information record.

use chrono::{DateTime, Utc};

/// A registered user as stored by the persistence layer.
///
/// Only `first_name`, `last_name`, `phone_number`, `address` and `updated_at`
/// are ever changed by the update workflow. Records are created and removed
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Normalized form: 10 bare digits or `+52` followed by 10 digits
    pub phone_number: String,
    pub address: String,
    pub password_hash: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Apply a candidate value to one field, returning true if it changed.
    pub(crate) fn apply_change(current: &mut String, candidate: Option<String>) -> bool {
        match candidate {
            Some(value) if *current != value => {
                *current = value;
                true
            }
            _ => false,
        }
    }
}
