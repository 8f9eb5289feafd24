//! Test helpers for integration tests
//!
//! Provides a service context over in-memory ports and a test server that
//! serves the full router with a cookie-keeping HTTP client.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use portal_api::{create_app, serve, AppState};
use portal_common::{AppConfig, LocalFileStorage, SessionTokenService, UploadFailurePolicy};
use portal_service::{ServiceContext, ServiceContextBuilder};
use reqwest::{multipart::Form, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::unique_suffix;
use crate::memory::{MemoryFileStorage, MemoryStore, MemoryViewCache};

pub const TEST_SESSION_SECRET: &str = "integration-test-secret";

fn base_builder(store: &Arc<MemoryStore>, cache: &Arc<MemoryViewCache>) -> ServiceContextBuilder {
    ServiceContextBuilder::new()
        .officer_repo(store.clone())
        .division_repo(store.clone())
        .event_repo(store.clone())
        .news_repo(store.clone())
        .gallery_repo(store.clone())
        .view_cache(cache.clone())
        .session_tokens(Arc::new(SessionTokenService::new(TEST_SESSION_SECRET, 3600)))
}

/// Service context over in-memory ports, with handles to inspect them
pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub storage: Arc<MemoryFileStorage>,
    pub cache: Arc<MemoryViewCache>,
    pub ctx: ServiceContext,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_policy(UploadFailurePolicy::Degrade)
    }

    pub fn with_policy(policy: UploadFailurePolicy) -> Self {
        let store = Arc::new(MemoryStore::new());
        let storage = Arc::new(MemoryFileStorage::new());
        let cache = Arc::new(MemoryViewCache::new());

        let ctx = base_builder(&store, &cache)
            .file_storage(storage.clone())
            .upload_policy(policy)
            .build()
            .expect("in-memory context is complete");

        Self {
            store,
            storage,
            cache,
            ctx,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a server that never touches PostgreSQL or Redis
pub fn test_config(upload_dir: &str) -> Result<AppConfig> {
    let vars = [
        ("APP_ENV", "development"),
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "0"),
        ("DATABASE_URL", "postgres://unused/portal"),
        ("SESSION_SECRET", TEST_SESSION_SECRET),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1000"),
        ("RATE_LIMIT_BURST", "1000"),
        ("UPLOAD_DIR", upload_dir),
        ("MAX_FILE_SIZE_MB", "1"),
    ];

    AppConfig::from_lookup(|key| {
        vars.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| (*value).to_string())
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
    pub upload_dir: PathBuf,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server on an ephemeral port with an empty store
    pub async fn start() -> Result<Self> {
        let upload_dir = std::env::temp_dir().join(format!(
            "portal-uploads-{}-{}",
            std::process::id(),
            unique_suffix()
        ));
        let config = test_config(&upload_dir.to_string_lossy())?;

        let store = Arc::new(MemoryStore::new());
        let cache = Arc::new(MemoryViewCache::new());
        let ctx = base_builder(&store, &cache)
            .file_storage(Arc::new(LocalFileStorage::new(
                &upload_dir,
                &config.storage.public_prefix,
            )))
            .upload_policy(config.storage.failure_policy)
            .build()?;

        let app = create_app(AppState::new(ctx, config))?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            store,
            upload_dir,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    pub async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    pub async fn patch_json<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.patch(self.url(path)).json(body).send().await?)
    }

    pub async fn post_form(&self, path: &str, form: Form) -> Result<Response> {
        Ok(self.client.post(self.url(path)).multipart(form).send().await?)
    }

    pub async fn put_form(&self, path: &str, form: Form) -> Result<Response> {
        Ok(self.client.put(self.url(path)).multipart(form).send().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }

    /// Sign in; the client keeps the session cookie
    pub async fn login(&self, name: &str, password: &str) -> Result<Response> {
        self.post_json(
            "/api/auth/login",
            &serde_json::json!({ "name": name, "password": password }),
        )
        .await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.upload_dir);
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error response and return its `code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    anyhow::ensure!(body["success"] == false, "error body must carry success=false: {body}");
    Ok(body["code"].as_str().unwrap_or_default().to_string())
}
