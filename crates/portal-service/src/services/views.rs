//! Read-through helpers over the public view cache.
//!
//! The cache is an optimization only: every failure is logged and the
//! request falls back to the repositories.

use std::future::Future;

use portal_core::PublicView;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Serve `view`/`variant` from the cache, or run `load` and cache its result
/// under the generation read before loading
pub(crate) async fn cached<T, F, Fut>(
    ctx: &ServiceContext,
    view: PublicView,
    variant: &str,
    load: F,
) -> ServiceResult<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = ServiceResult<T>>,
{
    let generation = match ctx.view_cache().generation(view).await {
        Ok(generation) => generation,
        Err(e) => {
            warn!(view = %view, variant, error = %e, "View cache read failed");
            return load().await;
        }
    };

    match ctx.view_cache().fetch(view, generation, variant).await {
        Ok(Some(payload)) => match serde_json::from_str(&payload) {
            Ok(value) => return Ok(value),
            Err(e) => warn!(view = %view, variant, error = %e, "Discarding unreadable cached view"),
        },
        Ok(None) => {}
        Err(e) => warn!(view = %view, variant, error = %e, "View cache read failed"),
    }

    let value = load().await?;

    match serde_json::to_string(&value) {
        Ok(payload) => {
            if let Err(e) = ctx.view_cache().store(view, generation, variant, &payload).await {
                warn!(view = %view, variant, error = %e, "View cache write failed");
            }
        }
        Err(e) => warn!(view = %view, variant, error = %e, "Failed to serialize view"),
    }

    Ok(value)
}

/// Drop every cached rendering of `views`
pub(crate) async fn invalidate(ctx: &ServiceContext, views: &[PublicView]) {
    if let Err(e) = ctx.view_cache().invalidate(views).await {
        warn!(?views, error = %e, "View cache invalidation failed");
    }
}
