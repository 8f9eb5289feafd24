//! News database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for news table
#[derive(Debug, Clone, FromRow)]
pub struct NewsModel {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub image: String,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
