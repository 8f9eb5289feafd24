//! Integration test utilities for the organization portal
//!
//! In-memory implementations of the repository, storage, and cache ports,
//! a service context built on them, and a spawned HTTP server for
//! end-to-end tests.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
pub use memory::{MemoryFileStorage, MemoryStore, MemoryViewCache};
