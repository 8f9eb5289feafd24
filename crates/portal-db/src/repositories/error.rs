//! Error handling utilities for repositories

use portal_core::DomainError;
use sqlx::Error as SqlxError;

pub const MEMBER_ID_KEY: &str = "officers_member_id_key";
pub const SINGLETON_POSITION_IDX: &str = "officers_singleton_position_active_idx";
pub const DIVISION_HEAD_IDX: &str = "officers_division_head_active_idx";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation through `on_unique` (given the violated constraint
/// name), anything else to a database error
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Conflict raised by the officer constraints when no pre-check caught it
pub fn officer_conflict(
    constraint: Option<&str>,
    member_id: &str,
    position: &str,
    division: &str,
) -> DomainError {
    match constraint {
        Some(MEMBER_ID_KEY) => DomainError::MemberIdTaken(member_id.to_string()),
        Some(SINGLETON_POSITION_IDX) => DomainError::PositionOccupied {
            position: position.to_string(),
            holder: "another active officer".to_string(),
        },
        Some(DIVISION_HEAD_IDX) => DomainError::DivisionHeadOccupied {
            division: division.to_string(),
            holder: "another active officer".to_string(),
        },
        other => DomainError::DatabaseError(format!(
            "unexpected unique violation on {}",
            other.unwrap_or("unknown constraint")
        )),
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside a LIKE pattern
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
