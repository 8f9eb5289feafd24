//! News handlers

use axum::{extract::State, Json};
use portal_core::Sections;
use portal_service::{
    AccessService, MutationResponse, NewsRequest, NewsResponse, NewsService, PageResponse,
    WritersResponse,
};

use crate::extractors::{ContentForm, IdPath, LimitQuery, ListQuery, SessionUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// Items shown by default in the latest list
const DEFAULT_LATEST_LIMIT: i64 = 3;

const IMAGE_FIELD: &str = "image";

/// GET /api/news
pub async fn list_news(
    State(state): State<AppState>,
    query: ListQuery,
) -> ApiResult<Json<PageResponse<NewsResponse>>> {
    let response = NewsService::new(state.service_context()).list(query.page()).await?;
    Ok(Json(response))
}

/// GET /api/news/latest
pub async fn latest_news(
    State(state): State<AppState>,
    query: LimitQuery,
) -> ApiResult<Json<Vec<NewsResponse>>> {
    let response = NewsService::new(state.service_context())
        .latest(query.limit_or(DEFAULT_LATEST_LIMIT))
        .await?;
    Ok(Json(response))
}

/// GET /api/news/writers
pub async fn writers(State(state): State<AppState>) -> ApiResult<Json<WritersResponse>> {
    let response = NewsService::new(state.service_context()).writers().await?;
    Ok(Json(response))
}

/// GET /api/news/:id
pub async fn get_news(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<NewsResponse>> {
    let response = NewsService::new(state.service_context()).get(id).await?;
    Ok(Json(response))
}

/// POST /api/admin/news
pub async fn create_news(
    State(state): State<AppState>,
    session: SessionUser,
    mut form: ContentForm,
) -> ApiResult<Json<MutationResponse>> {
    let ctx = state.service_context();
    AccessService::new(ctx)
        .authorize(session.claims(), Sections::NEWS)
        .await?;

    let request: NewsRequest = form.decode()?;
    let image = form.image(IMAGE_FIELD);
    let response = NewsService::new(ctx).create(request, image).await?;
    Ok(Json(response))
}

/// PUT /api/admin/news/:id
pub async fn update_news(
    State(state): State<AppState>,
    session: SessionUser,
    IdPath(id): IdPath,
    mut form: ContentForm,
) -> ApiResult<Json<MutationResponse>> {
    let ctx = state.service_context();
    AccessService::new(ctx)
        .authorize(session.claims(), Sections::NEWS)
        .await?;

    let request: NewsRequest = form.decode()?;
    let image = form.image(IMAGE_FIELD);
    let response = NewsService::new(ctx).update(id, request, image).await?;
    Ok(Json(response))
}

/// DELETE /api/admin/news/:id
pub async fn delete_news(
    State(state): State<AppState>,
    session: SessionUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<MutationResponse>> {
    let ctx = state.service_context();
    AccessService::new(ctx)
        .authorize(session.claims(), Sections::NEWS)
        .await?;

    let response = NewsService::new(ctx).delete(id).await?;
    Ok(Json(response))
}
