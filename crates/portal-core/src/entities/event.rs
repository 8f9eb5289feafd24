//! Event entity - a scheduled activity shown on the public site

use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub time_start: String,
    pub location_name: String,
    pub registration_link: String,
    /// Public path of the poster image; empty when none
    pub poster: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// An event dated today still counts as upcoming
    #[inline]
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub time_start: String,
    pub location_name: String,
    pub registration_link: String,
    pub poster: String,
}
