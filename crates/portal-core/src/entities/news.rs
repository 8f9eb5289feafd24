//! News entity - an article published on the public site

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub image: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewsItem {
    pub const DEFAULT_CATEGORY: &'static str = "Update";
    pub const DEFAULT_AUTHOR: &'static str = "IEEE Team";
}

#[derive(Debug, Clone)]
pub struct NewNewsItem {
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub image: String,
    pub date: DateTime<Utc>,
}
