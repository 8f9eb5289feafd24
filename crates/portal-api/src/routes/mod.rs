//! Route definitions
//!
//! Public reads, the sign-in routes, and the admin panel, all under /api.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{admin, auth, events, gallery, health, landing, news, officers};
use crate::state::AppState;

/// Create the main API router (health and sign-in routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes (exported separately so only they are rate limited)
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/change-password", post(auth::change_password))
        .route("/api/auth/me", get(auth::me))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .nest("/admin", admin_routes())
}

/// Public site reads
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/landing", get(landing::get_landing))
        // Events
        .route("/events", get(events::list_events))
        .route("/events/upcoming", get(events::upcoming_events))
        .route("/events/past", get(events::past_events))
        .route("/events/calendar", get(events::calendar))
        .route("/events/:id", get(events::get_event))
        // News
        .route("/news", get(news::list_news))
        .route("/news/latest", get(news::latest_news))
        .route("/news/writers", get(news::writers))
        .route("/news/:id", get(news::get_news))
        // Gallery
        .route("/gallery", get(gallery::list_gallery))
        .route("/gallery/:id", get(gallery::get_gallery_item))
        // Officers
        .route("/officers", get(officers::directory))
        .route("/divisions", get(officers::list_divisions))
}

/// Admin panel; every handler checks the session and the officer's sections
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(admin::dashboard))
        .route("/uploads", post(admin::upload))
        // Personnel
        .route(
            "/officers",
            get(officers::search_officers).post(officers::create_officer),
        )
        .route("/officers/:id", delete(officers::delete_officer))
        .route("/officers/:id/status", patch(officers::set_officer_status))
        // Content
        .route("/events", post(events::create_event))
        .route("/events/:id", put(events::update_event).delete(events::delete_event))
        .route("/news", post(news::create_news))
        .route("/news/:id", put(news::update_news).delete(news::delete_news))
        .route("/gallery", post(gallery::create_gallery_item))
        .route(
            "/gallery/:id",
            put(gallery::update_gallery_item).delete(gallery::delete_gallery_item),
        )
}
