//! Landing page handler

use axum::{extract::State, Json};
use portal_service::{LandingResponse, LandingService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Upcoming events, latest news and gallery, and the writers count
///
/// GET /api/landing
pub async fn get_landing(State(state): State<AppState>) -> ApiResult<Json<LandingResponse>> {
    let response = LandingService::new(state.service_context()).landing().await?;
    Ok(Json(response))
}
