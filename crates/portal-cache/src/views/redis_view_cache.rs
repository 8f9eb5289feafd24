//! Redis-backed cache of rendered public views.
//!
//! Each cached variant lives at `view:{view}:{generation}:{variant}` with a
//! TTL, and its key is recorded in the set `view_keys:{view}` so a whole
//! view can be dropped after a write without scanning the keyspace. The
//! generation counter `view_gen:{view}` is bumped on every invalidation.

use async_trait::async_trait;
use portal_core::{DomainError, PublicView, RepoResult, ViewCache};
use tracing::instrument;

use crate::pool::{RedisPool, RedisPoolError};

/// Key prefix for cached payloads
const VIEW_PREFIX: &str = "view:";
/// Key prefix for the per-view key index
const INDEX_PREFIX: &str = "view_keys:";
/// Key prefix for the per-view generation counter
const GENERATION_PREFIX: &str = "view_gen:";

#[derive(Clone)]
pub struct RedisViewCache {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl std::fmt::Debug for RedisViewCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisViewCache")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

impl RedisViewCache {
    pub fn new(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self {
            pool,
            ttl_seconds: ttl_seconds.max(1),
        }
    }

    fn payload_key(view: PublicView, generation: u64, variant: &str) -> String {
        format!("{VIEW_PREFIX}{view}:{generation}:{variant}")
    }

    fn generation_key(view: PublicView) -> String {
        format!("{GENERATION_PREFIX}{view}")
    }

    fn index_key(view: PublicView) -> String {
        format!("{INDEX_PREFIX}{view}")
    }
}

fn cache_error(e: RedisPoolError) -> DomainError {
    DomainError::CacheError(e.to_string())
}

#[async_trait]
impl ViewCache for RedisViewCache {
    async fn generation(&self, view: PublicView) -> RepoResult<u64> {
        self.pool
            .get_counter(&Self::generation_key(view))
            .await
            .map_err(cache_error)
    }

    #[instrument(skip(self))]
    async fn fetch(
        &self,
        view: PublicView,
        generation: u64,
        variant: &str,
    ) -> RepoResult<Option<String>> {
        self.pool
            .get_string(&Self::payload_key(view, generation, variant))
            .await
            .map_err(cache_error)
    }

    #[instrument(skip(self, payload), fields(bytes = payload.len()))]
    async fn store(
        &self,
        view: PublicView,
        generation: u64,
        variant: &str,
        payload: &str,
    ) -> RepoResult<()> {
        self.pool
            .set_indexed(
                &Self::payload_key(view, generation, variant),
                payload,
                &Self::index_key(view),
                self.ttl_seconds,
            )
            .await
            .map_err(cache_error)
    }

    #[instrument(skip(self))]
    async fn invalidate(&self, views: &[PublicView]) -> RepoResult<()> {
        for view in views {
            let generation = self
                .pool
                .increment(&Self::generation_key(*view))
                .await
                .map_err(cache_error)?;
            let dropped = self
                .pool
                .delete_indexed(&Self::index_key(*view))
                .await
                .map_err(cache_error)?;
            tracing::debug!(view = %view, generation, dropped, "View cache invalidated");
        }
        Ok(())
    }

    async fn health_check(&self) -> RepoResult<()> {
        self.pool.health_check().await.map_err(cache_error)
    }
}
