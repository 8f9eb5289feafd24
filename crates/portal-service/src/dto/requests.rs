//! Request DTOs for API endpoints
//!
//! JSON bodies and multipart text fields are decoded into these types and
//! checked with `validator` before any repository call. Stored text keeps
//! the submitted bytes; only blank checks trim.

use serde::Deserialize;
use validator::{Validate, ValidationError};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Sign-in by display name
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Password change keyed by member id; the current password is the proof
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(custom(function = "not_blank", message = "Member ID is required"))]
    pub member_id: String,

    #[validate(length(min = 1, message = "Current password is required"))]
    pub old_password: String,

    #[validate(length(min = 6, message = "New password must be at least 6 characters"))]
    pub new_password: String,
}

// ============================================================================
// Officer Requests
// ============================================================================

/// Add-personnel form. The access role is never taken from the caller.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfficerRequest {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = "not_blank", message = "Member ID is required"))]
    pub member_id: String,

    #[validate(custom(function = "not_blank", message = "Position is required"))]
    pub position: String,

    #[validate(custom(function = "not_blank", message = "Division is required"))]
    pub division: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOfficerStatusRequest {
    pub is_active: bool,
}

// ============================================================================
// Content Requests
// ============================================================================

/// Event create / update form
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,

    #[validate(custom(function = "not_blank", message = "Category is required"))]
    pub category: String,

    #[serde(default, alias = "desc")]
    pub description: String,

    /// `YYYY-MM-DD`
    #[validate(custom(function = "not_blank", message = "Date is required"))]
    pub date: String,

    #[serde(default)]
    pub time_start: String,

    #[serde(default)]
    pub location_name: String,

    #[serde(default, alias = "regLink")]
    pub registration_link: String,
}

/// News create / update form
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewsRequest {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,

    #[validate(custom(function = "not_blank", message = "Content is required"))]
    pub content: String,

    /// Defaults to the organization byline
    #[serde(default)]
    pub author: Option<String>,

    /// Defaults to "Update"
    #[serde(default)]
    pub category: Option<String>,

    /// `YYYY-MM-DD` or RFC 3339. Only read on update; creation stamps the
    /// current time.
    #[serde(default)]
    pub date: Option<String>,
}

/// Gallery create / update form
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GalleryRequest {
    #[validate(custom(function = "not_blank", message = "Caption is required"))]
    pub caption: String,

    #[validate(custom(function = "not_blank", message = "Tag is required"))]
    pub tag: String,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub date: Option<String>,
}
