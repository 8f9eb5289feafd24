//! View cache used when no Redis is configured: every read misses.

use async_trait::async_trait;
use portal_core::{PublicView, RepoResult, ViewCache};

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopViewCache;

#[async_trait]
impl ViewCache for NoopViewCache {
    async fn generation(&self, _view: PublicView) -> RepoResult<u64> {
        Ok(0)
    }

    async fn fetch(
        &self,
        _view: PublicView,
        _generation: u64,
        _variant: &str,
    ) -> RepoResult<Option<String>> {
        Ok(None)
    }

    async fn store(
        &self,
        _view: PublicView,
        _generation: u64,
        _variant: &str,
        _payload: &str,
    ) -> RepoResult<()> {
        Ok(())
    }

    async fn invalidate(&self, _views: &[PublicView]) -> RepoResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}
