//! Officer database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `officer_details` view (officers joined with their division name)
#[derive(Debug, Clone, FromRow)]
pub struct OfficerModel {
    pub id: i64,
    pub name: String,
    pub member_id: String,
    pub position: String,
    pub division_id: i64,
    pub division_name: String,
    pub access_role: String,
    pub password: Option<String>,
    pub credential_is_hashed: bool,
    pub must_change_password: bool,
    pub image: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
