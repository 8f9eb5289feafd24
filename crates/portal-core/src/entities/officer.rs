//! Officer entity - a member of the organization who can sign in to the admin panel

use std::fmt;

use chrono::{DateTime, Utc};

use crate::value_objects::{AccessRole, Position};

/// Display order assigned to officers created from the admin panel
pub const NEW_OFFICER_SORT_ORDER: i32 = 100;

/// Stored sign-in secret.
///
/// `is_hashed` is false only for rows carried over from the previous
/// deployment, where the secret may be plain text or absent.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub secret: Option<String>,
    pub is_hashed: bool,
}

impl Credential {
    pub fn hashed(hash: String) -> Self {
        Self {
            secret: Some(hash),
            is_hashed: true,
        }
    }

    pub fn legacy(secret: Option<String>) -> Self {
        Self {
            secret,
            is_hashed: false,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("is_hashed", &self.is_hashed)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Officer {
    pub id: i64,
    pub name: String,
    pub member_id: String,
    pub position: Position,
    pub division_id: i64,
    pub division_name: String,
    pub access_role: AccessRole,
    pub credential: Credential,
    pub must_change_password: bool,
    pub image: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Officer {
    /// Whether this officer, if active, occupies the seat a new holder of
    /// `position` in `division_id` would need.
    pub fn occupies(&self, position: &Position, division_id: i64) -> bool {
        if !self.is_active || &self.position != position {
            return false;
        }
        position.is_singleton() || (position.is_division_head() && self.division_id == division_id)
    }
}

/// Insert payload for a new officer
#[derive(Debug, Clone)]
pub struct NewOfficer {
    pub name: String,
    pub member_id: String,
    pub position: Position,
    pub division_id: i64,
    pub access_role: AccessRole,
    pub password_hash: String,
    pub image: Option<String>,
    pub sort_order: i32,
}
