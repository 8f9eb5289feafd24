//! Gallery entity - a captioned photo

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: i64,
    pub caption: String,
    pub tag: String,
    pub author: String,
    pub image: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GalleryItem {
    pub const DEFAULT_AUTHOR: &'static str = "Admin";
    pub const PLACEHOLDER_IMAGE: &'static str = "/placeholder-gallery.jpg";
}

#[derive(Debug, Clone)]
pub struct NewGalleryItem {
    pub caption: String,
    pub tag: String,
    pub author: String,
    pub image: String,
    pub date: DateTime<Utc>,
}
