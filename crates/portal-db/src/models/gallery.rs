//! Gallery database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for gallery_items table
#[derive(Debug, Clone, FromRow)]
pub struct GalleryItemModel {
    pub id: i64,
    pub caption: String,
    pub tag: String,
    pub author: String,
    pub image: String,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
