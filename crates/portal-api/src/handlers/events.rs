//! Event handlers
//!
//! Public listings (paged, upcoming, past, monthly calendar) and the admin
//! create, update and delete endpoints.

use axum::{extract::State, Json};
use portal_core::Sections;
use portal_service::{
    AccessService, EventRequest, EventResponse, EventService, MutationResponse, PageResponse,
};

use crate::extractors::{CalendarQuery, ContentForm, IdPath, LimitQuery, ListQuery, SessionUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// Events shown by default in the upcoming list
const DEFAULT_UPCOMING_LIMIT: i64 = 3;

/// Form field holding the event poster
const POSTER_FIELD: &str = "image";

/// GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
    query: ListQuery,
) -> ApiResult<Json<PageResponse<EventResponse>>> {
    let response = EventService::new(state.service_context()).list(query.page()).await?;
    Ok(Json(response))
}

/// GET /api/events/upcoming
pub async fn upcoming_events(
    State(state): State<AppState>,
    query: LimitQuery,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let response = EventService::new(state.service_context())
        .upcoming(query.limit_or(DEFAULT_UPCOMING_LIMIT))
        .await?;
    Ok(Json(response))
}

/// GET /api/events/past
pub async fn past_events(
    State(state): State<AppState>,
    query: ListQuery,
) -> ApiResult<Json<PageResponse<EventResponse>>> {
    let response = EventService::new(state.service_context()).past(query.page()).await?;
    Ok(Json(response))
}

/// GET /api/events/calendar
pub async fn calendar(
    State(state): State<AppState>,
    query: CalendarQuery,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let (year, month) = query.year_month();
    let response = EventService::new(state.service_context())
        .calendar(year, month)
        .await?;
    Ok(Json(response))
}

/// GET /api/events/:id
pub async fn get_event(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<EventResponse>> {
    let response = EventService::new(state.service_context()).get(id).await?;
    Ok(Json(response))
}

/// POST /api/admin/events
pub async fn create_event(
    State(state): State<AppState>,
    session: SessionUser,
    mut form: ContentForm,
) -> ApiResult<Json<MutationResponse>> {
    let ctx = state.service_context();
    AccessService::new(ctx)
        .authorize(session.claims(), Sections::EVENTS)
        .await?;

    let request: EventRequest = form.decode()?;
    let poster = form.image(POSTER_FIELD);
    let response = EventService::new(ctx).create(request, poster).await?;
    Ok(Json(response))
}

/// PUT /api/admin/events/:id
pub async fn update_event(
    State(state): State<AppState>,
    session: SessionUser,
    IdPath(id): IdPath,
    mut form: ContentForm,
) -> ApiResult<Json<MutationResponse>> {
    let ctx = state.service_context();
    AccessService::new(ctx)
        .authorize(session.claims(), Sections::EVENTS)
        .await?;

    let request: EventRequest = form.decode()?;
    let poster = form.image(POSTER_FIELD);
    let response = EventService::new(ctx).update(id, request, poster).await?;
    Ok(Json(response))
}

/// DELETE /api/admin/events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    session: SessionUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<MutationResponse>> {
    let ctx = state.service_context();
    AccessService::new(ctx)
        .authorize(session.claims(), Sections::EVENTS)
        .await?;

    let response = EventService::new(ctx).delete(id).await?;
    Ok(Json(response))
}
