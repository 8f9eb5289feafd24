//! Cache port for rendered public views

use async_trait::async_trait;

use super::RepoResult;
use crate::value_objects::PublicView;

/// Stores serialized public read results keyed by view, the view's
/// generation and a variant (page number, limit, date, ...).
///
/// Invalidation bumps the generation, so a result loaded before a write
/// and stored after it lands under a generation no reader asks for.
#[async_trait]
pub trait ViewCache: Send + Sync {
    /// Current generation of `view`; starts at 0
    async fn generation(&self, view: PublicView) -> RepoResult<u64>;

    async fn fetch(
        &self,
        view: PublicView,
        generation: u64,
        variant: &str,
    ) -> RepoResult<Option<String>>;

    async fn store(
        &self,
        view: PublicView,
        generation: u64,
        variant: &str,
        payload: &str,
    ) -> RepoResult<()>;

    /// Advance the generation of each view and drop its cached variants
    async fn invalidate(&self, views: &[PublicView]) -> RepoResult<()>;

    async fn health_check(&self) -> RepoResult<()>;
}
