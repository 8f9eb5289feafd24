//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Officer not found: {0}")]
    OfficerNotFound(String),

    #[error("Event not found: {0}")]
    EventNotFound(i64),

    #[error("News not found: {0}")]
    NewsNotFound(i64),

    #[error("Gallery item not found: {0}")]
    GalleryItemNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown division: {0}")]
    UnknownDivision(String),

    // =========================================================================
    // Authentication / Authorization Errors
    // =========================================================================
    #[error("Invalid credentials")]
    InvalidCredential,

    #[error("Account is disabled")]
    AccountDisabled,

    #[error("Access restricted: {0}")]
    AccessRestricted(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Member ID already registered: {0}")]
    MemberIdTaken(String),

    #[error("Position {position} is already held by {holder}")]
    PositionOccupied { position: String, holder: String },

    #[error("Division {division} already has a head: {holder}")]
    DivisionHeadOccupied { division: String, holder: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::OfficerNotFound(_) => "UNKNOWN_OFFICER",
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::NewsNotFound(_) => "UNKNOWN_NEWS",
            Self::GalleryItemNotFound(_) => "UNKNOWN_GALLERY_ITEM",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::UnknownDivision(_) => "UNKNOWN_DIVISION",

            // Authentication / Authorization
            Self::InvalidCredential => "INVALID_CREDENTIALS",
            Self::AccountDisabled => "ACCOUNT_DISABLED",
            Self::AccessRestricted(_) => "ACCESS_RESTRICTED",

            // Conflict
            Self::MemberIdTaken(_) => "MEMBER_ID_TAKEN",
            Self::PositionOccupied { .. } => "POSITION_OCCUPIED",
            Self::DivisionHeadOccupied { .. } => "DIVISION_HEAD_OCCUPIED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP status this error is reported with
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_authentication() {
            401
        } else if self.is_authorization() {
            403
        } else if self.is_validation() {
            400
        } else if self.is_conflict() {
            409
        } else {
            500
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::OfficerNotFound(_)
                | Self::EventNotFound(_)
                | Self::NewsNotFound(_)
                | Self::GalleryItemNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingField(_)
                | Self::InvalidDate(_)
                | Self::UnknownDivision(_)
        )
    }

    /// Bad credentials: the caller could not be identified
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::InvalidCredential)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AccountDisabled | Self::AccessRestricted(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::MemberIdTaken(_) | Self::PositionOccupied { .. } | Self::DivisionHeadOccupied { .. }
        )
    }
}
