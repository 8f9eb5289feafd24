//! # portal-cache
//!
//! Redis caching layer for rendered public views.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **View Cache**: Serialized public listings keyed by view, generation
//!   and variant; a content change bumps the generation and drops the view
//!
//! ## Example
//!
//! ```ignore
//! use portal_cache::{RedisPool, RedisPoolConfig, RedisViewCache};
//! use portal_core::{PublicView, ViewCache};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let cache = RedisViewCache::new(pool, 300);
//!
//! let generation = cache.generation(PublicView::News).await?;
//! cache.store(PublicView::News, generation, "page:1", &json).await?;
//! cache.invalidate(&[PublicView::News, PublicView::Landing]).await?;
//! ```

pub mod pool;
pub mod views;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export view cache types
pub use views::{NoopViewCache, RedisViewCache};
