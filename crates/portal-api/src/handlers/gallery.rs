//! Gallery handlers

use axum::{extract::State, Json};
use portal_core::Sections;
use portal_service::{
    AccessService, GalleryRequest, GalleryResponse, GalleryService, MutationResponse, PageResponse,
};

use crate::extractors::{ContentForm, IdPath, ListQuery, SessionUser};
use crate::response::ApiResult;
use crate::state::AppState;

const IMAGE_FIELD: &str = "image";

/// GET /api/gallery
pub async fn list_gallery(
    State(state): State<AppState>,
    query: ListQuery,
) -> ApiResult<Json<PageResponse<GalleryResponse>>> {
    let response = GalleryService::new(state.service_context())
        .list(query.page())
        .await?;
    Ok(Json(response))
}

/// GET /api/gallery/:id
pub async fn get_gallery_item(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<GalleryResponse>> {
    let response = GalleryService::new(state.service_context()).get(id).await?;
    Ok(Json(response))
}

/// POST /api/admin/gallery
pub async fn create_gallery_item(
    State(state): State<AppState>,
    session: SessionUser,
    mut form: ContentForm,
) -> ApiResult<Json<MutationResponse>> {
    let ctx = state.service_context();
    AccessService::new(ctx)
        .authorize(session.claims(), Sections::GALLERY)
        .await?;

    let request: GalleryRequest = form.decode()?;
    let image = form.image(IMAGE_FIELD);
    let response = GalleryService::new(ctx).create(request, image).await?;
    Ok(Json(response))
}

/// PUT /api/admin/gallery/:id
pub async fn update_gallery_item(
    State(state): State<AppState>,
    session: SessionUser,
    IdPath(id): IdPath,
    mut form: ContentForm,
) -> ApiResult<Json<MutationResponse>> {
    let ctx = state.service_context();
    AccessService::new(ctx)
        .authorize(session.claims(), Sections::GALLERY)
        .await?;

    let request: GalleryRequest = form.decode()?;
    let image = form.image(IMAGE_FIELD);
    let response = GalleryService::new(ctx).update(id, request, image).await?;
    Ok(Json(response))
}

/// DELETE /api/admin/gallery/:id
pub async fn delete_gallery_item(
    State(state): State<AppState>,
    session: SessionUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<MutationResponse>> {
    let ctx = state.service_context();
    AccessService::new(ctx)
        .authorize(session.claims(), Sections::GALLERY)
        .await?;

    let response = GalleryService::new(ctx).delete(id).await?;
    Ok(Json(response))
}
