//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use portal_cache::{RedisPool, RedisViewCache};
use portal_common::{AppConfig, AppError, LocalFileStorage, SessionTokenService};
use portal_db::{
    create_pool, run_migrations, PgDivisionRepository, PgEventRepository, PgGalleryRepository,
    PgNewsRepository, PgOfficerRepository,
};
use portal_service::{AuthService, ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::middleware::{apply_middleware_with_config, apply_rate_limit};
use crate::routes::{auth_routes, create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let prefix = config.storage.public_prefix.as_str();
    if !prefix.starts_with('/') || prefix.len() < 2 {
        return Err(AppError::Config(format!(
            "Upload public prefix must be an absolute path, got '{prefix}'"
        )));
    }

    let router = create_router()
        .merge(apply_rate_limit(auth_routes(), &config.rate_limit)?)
        .merge(health_routes())
        .nest_service(prefix, ServeDir::new(&config.storage.upload_dir));

    let router = apply_middleware_with_config(
        router,
        &config.cors,
        config.app.env.is_production(),
        config.storage.max_file_size_bytes(),
    );

    Ok(router.with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&portal_db::DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool, config.database.migrations_dir.as_deref())
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let session_tokens = Arc::new(SessionTokenService::new(
        &config.session.secret,
        config.session.ttl_seconds,
    ));
    let file_storage = Arc::new(LocalFileStorage::new(
        &config.storage.upload_dir,
        &config.storage.public_prefix,
    ));

    let mut builder = ServiceContextBuilder::new()
        .pool(pool.clone())
        .officer_repo(Arc::new(PgOfficerRepository::new(pool.clone())))
        .division_repo(Arc::new(PgDivisionRepository::new(pool.clone())))
        .event_repo(Arc::new(PgEventRepository::new(pool.clone())))
        .news_repo(Arc::new(PgNewsRepository::new(pool.clone())))
        .gallery_repo(Arc::new(PgGalleryRepository::new(pool)))
        .file_storage(file_storage)
        .session_tokens(session_tokens)
        .upload_policy(config.storage.failure_policy)
        .utc_offset_minutes(config.app.utc_offset_minutes);

    match &config.redis {
        Some(redis_config) => {
            info!("Connecting to Redis...");
            let redis_pool =
                RedisPool::from_config(redis_config).map_err(|e| AppError::Cache(e.to_string()))?;
            if let Err(e) = redis_pool.health_check().await {
                warn!(error = %e, "Redis is not reachable yet; public views will be read directly until it is");
            }
            builder = builder.view_cache(Arc::new(RedisViewCache::new(
                redis_pool,
                redis_config.view_ttl_seconds,
            )));
            info!("View cache enabled");
        }
        None => info!("REDIS_URL not set; view cache disabled"),
    }

    let service_context = builder.build()?;
    bootstrap(&service_context, &config).await?;

    Ok(AppState::new(service_context, config))
}

/// Create the first Web Master when configured and no officer exists
async fn bootstrap(ctx: &ServiceContext, config: &AppConfig) -> Result<(), AppError> {
    let Some(admin) = &config.bootstrap_admin else {
        return Ok(());
    };

    match AuthService::new(ctx).bootstrap_admin(admin).await? {
        Some(officer) => info!(name = %officer.name, "Bootstrap administrator ready; password change required at first sign-in"),
        None => info!("Officers already exist; bootstrap administrator skipped"),
    }
    Ok(())
}

/// Serve `app` on an already bound listener
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;
    info!("Server listening on http://{}", addr);

    serve(listener, app).await
}
