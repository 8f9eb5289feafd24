//! Event database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub time_start: String,
    pub location_name: String,
    pub registration_link: String,
    pub poster: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
