//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Implementations must report uniqueness
//! violations as the matching conflict variant of [`DomainError`].

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{
    Division, Event, GalleryItem, NewEvent, NewGalleryItem, NewNewsItem, NewOfficer, NewsItem,
    Officer,
};
use crate::error::DomainError;
use crate::value_objects::{Page, PageRequest, Position};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Officer Repository
// ============================================================================

#[async_trait]
pub trait OfficerRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Officer>>;

    /// First officer with exactly this display name (names are not unique)
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Officer>>;

    async fn find_by_member_id(&self, member_id: &str) -> RepoResult<Option<Officer>>;

    /// Active officer currently holding `position`.
    ///
    /// `division_id` narrows the lookup for per-division positions; pass
    /// `None` for organization-wide ones.
    async fn find_active_holder(
        &self,
        position: &Position,
        division_id: Option<i64>,
    ) -> RepoResult<Option<Officer>>;

    /// Insert an officer. Duplicate member ids and occupied seats fail with a conflict.
    async fn create(&self, officer: &NewOfficer) -> RepoResult<Officer>;

    /// Remove an officer; `OfficerNotFound` when the id does not exist
    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn set_active(&self, id: i64, active: bool) -> RepoResult<()>;

    /// Store a new hash and clear the must-change and legacy markers
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()>;

    /// Case-insensitive substring search on name, ordered by sort order
    async fn search(&self, name_query: &str, page: PageRequest) -> RepoResult<Page<Officer>>;

    /// Active officers ordered by sort order
    async fn list_active(&self) -> RepoResult<Vec<Officer>>;

    async fn count(&self) -> RepoResult<i64>;

    /// Number of distinct operational divisions that have at least one officer
    async fn count_staffed_divisions(&self) -> RepoResult<i64>;
}

// ============================================================================
// Division Repository
// ============================================================================

#[async_trait]
pub trait DivisionRepository: Send + Sync {
    /// All divisions in display order
    async fn list(&self) -> RepoResult<Vec<Division>>;

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Division>>;
}

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Event>>;

    async fn create(&self, event: &NewEvent) -> RepoResult<Event>;

    /// Persist every editable field of `event`
    async fn update(&self, event: &Event) -> RepoResult<Event>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// All events, most recent date first
    async fn list(&self, page: PageRequest) -> RepoResult<Page<Event>>;

    /// Events dated on or after `today`, soonest first
    async fn upcoming(&self, today: NaiveDate, limit: i64) -> RepoResult<Vec<Event>>;

    /// Events dated before `today`, most recent first
    async fn past(&self, today: NaiveDate, page: PageRequest) -> RepoResult<Page<Event>>;

    /// Events with `start <= date < end`, by date
    async fn between(&self, start: NaiveDate, end: NaiveDate) -> RepoResult<Vec<Event>>;

    /// Most recently created events
    async fn recent(&self, limit: i64) -> RepoResult<Vec<Event>>;

    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// News Repository
// ============================================================================

#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<NewsItem>>;

    async fn create(&self, news: &NewNewsItem) -> RepoResult<NewsItem>;

    async fn update(&self, news: &NewsItem) -> RepoResult<NewsItem>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Newest first
    async fn list(&self, page: PageRequest) -> RepoResult<Page<NewsItem>>;

    async fn latest(&self, limit: i64) -> RepoResult<Vec<NewsItem>>;

    async fn count(&self) -> RepoResult<i64>;

    /// Number of distinct authors
    async fn count_authors(&self) -> RepoResult<i64>;
}

// ============================================================================
// Gallery Repository
// ============================================================================

#[async_trait]
pub trait GalleryRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<GalleryItem>>;

    async fn create(&self, item: &NewGalleryItem) -> RepoResult<GalleryItem>;

    async fn update(&self, item: &GalleryItem) -> RepoResult<GalleryItem>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Newest first
    async fn list(&self, page: PageRequest) -> RepoResult<Page<GalleryItem>>;

    async fn latest(&self, limit: i64) -> RepoResult<Vec<GalleryItem>>;

    async fn count(&self) -> RepoResult<i64>;
}
