//! # portal-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! Uniqueness of member ids, organization-wide positions, and division heads
//! is enforced by the schema; violations surface as domain conflicts.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use portal_db::{create_pool, run_migrations, DatabaseConfig, PgOfficerRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool, None).await?;
//!     let officers = PgOfficerRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgDivisionRepository, PgEventRepository, PgGalleryRepository, PgNewsRepository,
    PgOfficerRepository,
};
