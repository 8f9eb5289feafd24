//! Admin panel handlers: dashboard statistics and the generic upload endpoint

use axum::{extract::State, Json};
use portal_core::{Sections, UploadFolder};
use portal_service::{AccessService, DashboardResponse, DashboardService, UploadResponse, UploadService};

use crate::extractors::{ContentForm, SessionUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<DashboardResponse>> {
    let ctx = state.service_context();
    AccessService::new(ctx)
        .authorize(session.claims(), Sections::DASHBOARD)
        .await?;

    let response = DashboardService::new(ctx).stats().await?;
    Ok(Json(response))
}

/// Store a single file (`file` part) under an optional `folder`
///
/// POST /api/admin/uploads
pub async fn upload(
    State(state): State<AppState>,
    session: SessionUser,
    mut form: ContentForm,
) -> ApiResult<Json<UploadResponse>> {
    let ctx = state.service_context();
    AccessService::new(ctx)
        .authorize(session.claims(), Sections::UPLOADS)
        .await?;

    let folder = UploadFolder::from_name(form.text("folder").unwrap_or_default());
    let file = form.take_file("file").unwrap_or_default();
    let response = UploadService::new(ctx).upload(folder, file).await?;
    Ok(Json(response))
}
