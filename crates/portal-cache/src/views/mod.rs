//! Public view cache implementations.

mod noop;
mod redis_view_cache;

pub use noop::NoopViewCache;
pub use redis_view_cache::RedisViewCache;
