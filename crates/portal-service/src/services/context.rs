//! Service context - dependency container for services
//!
//! Holds the repositories, storage, view cache and session signer shared by
//! every service.

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate, Utc};
use portal_cache::NoopViewCache;
use portal_common::{SessionTokenService, UploadFailurePolicy};
use portal_core::traits::{
    DivisionRepository, EventRepository, FileStorage, GalleryRepository, NewsRepository,
    OfficerRepository, ViewCache,
};
use portal_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// The database pool is optional so the services can run over in-memory
/// repositories; it is only used for readiness checks.
#[derive(Clone)]
pub struct ServiceContext {
    pool: Option<PgPool>,

    // Repositories
    officer_repo: Arc<dyn OfficerRepository>,
    division_repo: Arc<dyn DivisionRepository>,
    event_repo: Arc<dyn EventRepository>,
    news_repo: Arc<dyn NewsRepository>,
    gallery_repo: Arc<dyn GalleryRepository>,

    // Infrastructure ports
    view_cache: Arc<dyn ViewCache>,
    file_storage: Arc<dyn FileStorage>,

    session_tokens: Arc<SessionTokenService>,
    upload_policy: UploadFailurePolicy,
    site_offset: FixedOffset,
}

impl ServiceContext {
    // === Database Pool ===

    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn officer_repo(&self) -> &dyn OfficerRepository {
        self.officer_repo.as_ref()
    }

    pub fn division_repo(&self) -> &dyn DivisionRepository {
        self.division_repo.as_ref()
    }

    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    pub fn news_repo(&self) -> &dyn NewsRepository {
        self.news_repo.as_ref()
    }

    pub fn gallery_repo(&self) -> &dyn GalleryRepository {
        self.gallery_repo.as_ref()
    }

    // === Ports ===

    pub fn view_cache(&self) -> &dyn ViewCache {
        self.view_cache.as_ref()
    }

    pub fn file_storage(&self) -> &dyn FileStorage {
        self.file_storage.as_ref()
    }

    // === Settings ===

    pub fn session_tokens(&self) -> &SessionTokenService {
        self.session_tokens.as_ref()
    }

    pub fn upload_policy(&self) -> UploadFailurePolicy {
        self.upload_policy
    }

    /// Current calendar day at the organization's site
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.site_offset).date_naive()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("upload_policy", &self.upload_policy)
            .field("site_offset", &self.site_offset)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    officer_repo: Option<Arc<dyn OfficerRepository>>,
    division_repo: Option<Arc<dyn DivisionRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    news_repo: Option<Arc<dyn NewsRepository>>,
    gallery_repo: Option<Arc<dyn GalleryRepository>>,
    view_cache: Option<Arc<dyn ViewCache>>,
    file_storage: Option<Arc<dyn FileStorage>>,
    session_tokens: Option<Arc<SessionTokenService>>,
    upload_policy: UploadFailurePolicy,
    utc_offset_minutes: i32,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn officer_repo(mut self, repo: Arc<dyn OfficerRepository>) -> Self {
        self.officer_repo = Some(repo);
        self
    }

    pub fn division_repo(mut self, repo: Arc<dyn DivisionRepository>) -> Self {
        self.division_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn news_repo(mut self, repo: Arc<dyn NewsRepository>) -> Self {
        self.news_repo = Some(repo);
        self
    }

    pub fn gallery_repo(mut self, repo: Arc<dyn GalleryRepository>) -> Self {
        self.gallery_repo = Some(repo);
        self
    }

    /// Defaults to a cache that never hits
    pub fn view_cache(mut self, cache: Arc<dyn ViewCache>) -> Self {
        self.view_cache = Some(cache);
        self
    }

    pub fn file_storage(mut self, storage: Arc<dyn FileStorage>) -> Self {
        self.file_storage = Some(storage);
        self
    }

    pub fn session_tokens(mut self, service: Arc<SessionTokenService>) -> Self {
        self.session_tokens = Some(service);
        self
    }

    pub fn upload_policy(mut self, policy: UploadFailurePolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    /// Offset of the site's local time from UTC, in minutes
    pub fn utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let site_offset = self
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ServiceError::validation("utc offset is out of range"))?;

        Ok(ServiceContext {
            pool: self.pool,
            officer_repo: self.officer_repo.ok_or_else(|| ServiceError::validation("officer_repo is required"))?,
            division_repo: self.division_repo.ok_or_else(|| ServiceError::validation("division_repo is required"))?,
            event_repo: self.event_repo.ok_or_else(|| ServiceError::validation("event_repo is required"))?,
            news_repo: self.news_repo.ok_or_else(|| ServiceError::validation("news_repo is required"))?,
            gallery_repo: self.gallery_repo.ok_or_else(|| ServiceError::validation("gallery_repo is required"))?,
            view_cache: self.view_cache.unwrap_or_else(|| Arc::new(NoopViewCache)),
            file_storage: self.file_storage.ok_or_else(|| ServiceError::validation("file_storage is required"))?,
            session_tokens: self.session_tokens.ok_or_else(|| ServiceError::validation("session_tokens is required"))?,
            upload_policy: self.upload_policy,
            site_offset,
        })
    }
}
