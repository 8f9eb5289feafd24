//! Officer handlers
//!
//! The public directory and division list, plus the personnel admin area.

use axum::{extract::State, Json};
use portal_core::Sections;
use portal_service::{
    AccessService, CreateOfficerRequest, DivisionDirectoryResponse, DivisionResponse,
    MutationResponse, OfficerResponse, OfficerService, PageResponse, SetOfficerStatusRequest,
};

use crate::extractors::{ContentForm, IdPath, ListQuery, SessionUser};
use crate::response::ApiResult;
use crate::state::AppState;

const IMAGE_FIELD: &str = "image";

/// Active officers grouped by division
///
/// GET /api/officers
pub async fn directory(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DivisionDirectoryResponse>>> {
    let response = OfficerService::new(state.service_context()).directory().await?;
    Ok(Json(response))
}

/// GET /api/divisions
pub async fn list_divisions(State(state): State<AppState>) -> ApiResult<Json<Vec<DivisionResponse>>> {
    let response = OfficerService::new(state.service_context()).divisions().await?;
    Ok(Json(response))
}

/// Personnel listing with name search
///
/// GET /api/admin/officers
pub async fn search_officers(
    State(state): State<AppState>,
    session: SessionUser,
    query: ListQuery,
) -> ApiResult<Json<PageResponse<OfficerResponse>>> {
    let ctx = state.service_context();
    AccessService::new(ctx)
        .authorize(session.claims(), Sections::PERSONNEL)
        .await?;

    let response = OfficerService::new(ctx)
        .search(query.search(), query.page())
        .await?;
    Ok(Json(response))
}

/// POST /api/admin/officers
pub async fn create_officer(
    State(state): State<AppState>,
    session: SessionUser,
    mut form: ContentForm,
) -> ApiResult<Json<MutationResponse>> {
    let ctx = state.service_context();
    AccessService::new(ctx)
        .authorize(session.claims(), Sections::ADD_PERSONNEL)
        .await?;

    let request: CreateOfficerRequest = form.decode()?;
    let image = form.image(IMAGE_FIELD);
    let response = OfficerService::new(ctx).create(request, image).await?;
    Ok(Json(response))
}

/// DELETE /api/admin/officers/:id
pub async fn delete_officer(
    State(state): State<AppState>,
    session: SessionUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<MutationResponse>> {
    let ctx = state.service_context();
    AccessService::new(ctx)
        .authorize(session.claims(), Sections::PERSONNEL)
        .await?;

    let response = OfficerService::new(ctx).delete(id).await?;
    Ok(Json(response))
}

/// PATCH /api/admin/officers/:id/status
pub async fn set_officer_status(
    State(state): State<AppState>,
    session: SessionUser,
    IdPath(id): IdPath,
    Json(request): Json<SetOfficerStatusRequest>,
) -> ApiResult<Json<MutationResponse>> {
    let ctx = state.service_context();
    AccessService::new(ctx)
        .authorize(session.claims(), Sections::PERSONNEL)
        .await?;

    let response = OfficerService::new(ctx)
        .set_active(id, request.is_active)
        .await?;
    Ok(Json(response))
}
