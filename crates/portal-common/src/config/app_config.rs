//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use std::env;
use std::str::FromStr;

use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    /// Absent when view caching is disabled
    pub redis: Option<RedisConfig>,
    pub session: SessionConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
    pub bootstrap_admin: Option<BootstrapAdminConfig>,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
    /// Offset of the site's local day from UTC, used to split upcoming and past events
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Directory holding the SQL migrations; `None` uses the bundled ones
    #[serde(default)]
    pub migrations_dir: Option<String>,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
    /// Lifetime of a cached public view
    #[serde(default = "default_view_ttl")]
    pub view_ttl_seconds: u64,
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    #[serde(default = "default_session_ttl")]
    pub ttl_seconds: i64,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

/// Rate limiting configuration for the sign-in routes
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// What to do when an image attached to a content form cannot be stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UploadFailurePolicy {
    /// Save the item without the image and report a warning
    #[default]
    Degrade,
    /// Fail the whole operation
    Reject,
}

impl UploadFailurePolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "degrade" => Some(Self::Degrade),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

/// File storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// URL prefix the upload directory is served under
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: u32,
    #[serde(default)]
    pub failure_policy: UploadFailurePolicy,
}

impl StorageConfig {
    #[must_use]
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb as usize * 1024 * 1024
    }
}

/// First Web Master, created at startup when no officer exists yet
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapAdminConfig {
    pub name: String,
    pub member_id: String,
}

// Default value functions
fn default_app_name() -> String {
    "org-portal".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    2
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_view_ttl() -> u64 {
    300
}

fn default_session_ttl() -> i64 {
    86400 // 1 day
}

fn default_cookie_name() -> String {
    "session".to_string()
}

fn default_requests_per_second() -> u32 {
    2
}

fn default_burst() -> u32 {
    10
}

fn default_upload_dir() -> String {
    "./public/uploads".to_string()
}

fn default_public_prefix() -> String {
    "/uploads".to_string()
}

fn default_max_file_size() -> u32 {
    10
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    ///
    /// # Errors
    /// Returns an error if required variables are missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(&lookup);

        let bootstrap_admin = match (
            vars.get("BOOTSTRAP_ADMIN_NAME"),
            vars.get("BOOTSTRAP_ADMIN_MEMBER_ID"),
        ) {
            (Some(name), Some(member_id)) => Some(BootstrapAdminConfig { name, member_id }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::MissingVar("BOOTSTRAP_ADMIN_MEMBER_ID")),
            (None, Some(_)) => return Err(ConfigError::MissingVar("BOOTSTRAP_ADMIN_NAME")),
        };

        Ok(Self {
            app: AppSettings {
                name: vars.get("APP_NAME").unwrap_or_else(default_app_name),
                env: vars
                    .get("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
                utc_offset_minutes: vars.parse("SITE_UTC_OFFSET_MINUTES", || 0)?,
            },
            api: ServerConfig {
                host: vars.get("API_HOST").unwrap_or_else(default_host),
                port: vars.parse_required("API_PORT")?,
            },
            database: DatabaseConfig {
                url: vars.required("DATABASE_URL")?,
                max_connections: vars.parse("DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: vars.parse("DATABASE_MIN_CONNECTIONS", default_min_connections)?,
                migrations_dir: vars.get("DATABASE_MIGRATIONS_DIR"),
            },
            redis: match vars.get("REDIS_URL") {
                Some(url) => Some(RedisConfig {
                    url,
                    max_connections: vars
                        .parse("REDIS_MAX_CONNECTIONS", default_redis_max_connections)?,
                    view_ttl_seconds: vars.parse("VIEW_CACHE_TTL_SECONDS", default_view_ttl)?,
                }),
                None => None,
            },
            session: SessionConfig {
                secret: vars.required("SESSION_SECRET")?,
                ttl_seconds: vars.parse("SESSION_TTL_SECONDS", default_session_ttl)?,
                cookie_name: vars.get("SESSION_COOKIE_NAME").unwrap_or_else(default_cookie_name),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: vars
                    .parse("RATE_LIMIT_REQUESTS_PER_SECOND", default_requests_per_second)?,
                burst: vars.parse("RATE_LIMIT_BURST", default_burst)?,
            },
            cors: CorsConfig {
                allowed_origins: vars
                    .get("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|origin| !origin.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            storage: StorageConfig {
                upload_dir: vars.get("UPLOAD_DIR").unwrap_or_else(default_upload_dir),
                public_prefix: vars
                    .get("UPLOAD_PUBLIC_PREFIX")
                    .map(|s| s.trim_end_matches('/').to_string())
                    .unwrap_or_else(default_public_prefix),
                max_file_size_mb: vars.parse("MAX_FILE_SIZE_MB", default_max_file_size)?,
                failure_policy: match vars.get("UPLOAD_FAILURE_POLICY") {
                    Some(value) => UploadFailurePolicy::parse(&value)
                        .ok_or(ConfigError::InvalidValue("UPLOAD_FAILURE_POLICY", value))?,
                    None => UploadFailurePolicy::default(),
                },
            },
            bootstrap_admin,
        })
    }
}

/// Non-empty variable lookups with typed parsing
struct Vars<'a, F>(&'a F);

impl<F> Vars<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key).ok_or(ConfigError::MissingVar(key))
    }

    fn parse<T: FromStr>(&self, key: &'static str, default: fn() -> T) -> Result<T, ConfigError> {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, raw)),
            None => Ok(default()),
        }
    }

    fn parse_required<T: FromStr>(&self, key: &'static str) -> Result<T, ConfigError> {
        let raw = self.required(key)?;
        raw.trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
