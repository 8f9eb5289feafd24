//! # portal-common
//!
//! Shared utilities including configuration, error handling, session tokens,
//! credential verification, upload storage, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod storage;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, verify_credential, verify_password, IssuedSession, LegacyMatch, SessionClaims,
    SessionTokenService,
};
pub use config::{
    AppConfig, AppSettings, BootstrapAdminConfig, ConfigError, CorsConfig, DatabaseConfig,
    Environment, RateLimitConfig, RedisConfig, ServerConfig, SessionConfig, StorageConfig,
    UploadFailurePolicy,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use storage::{sanitize_file_name, LocalFileStorage};
pub use telemetry::{try_init_tracing, TracingConfig, TracingError};
