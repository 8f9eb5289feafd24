//! Event service
//!
//! Event publishing and the public event reads (listing, upcoming, past,
//! monthly calendar). "Today" is the site-local day.

use chrono::NaiveDate;
use portal_core::value_objects::CONTENT_PER_PAGE;
use portal_core::{DomainError, Event, NewEvent, PageRequest, PublicView, UploadFolder};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{EventRequest, EventResponse, MutationResponse, PageResponse};

use super::context::ServiceContext;
use super::dates::{month_range, parse_day};
use super::error::ServiceResult;
use super::upload::{ImageInput, UploadService};
use super::views;

const EVENT_VIEWS: &[PublicView] = &[PublicView::Events, PublicView::Landing];

/// Largest `limit` accepted by the upcoming query
const MAX_UPCOMING: i64 = 50;

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request, poster), fields(title = %request.title))]
    pub async fn create(
        &self,
        request: EventRequest,
        poster: ImageInput,
    ) -> ServiceResult<MutationResponse> {
        request.validate()?;
        let date = parse_day(&request.date)?;

        let uploads = UploadService::new(self.ctx);
        let stored = uploads.store_image(UploadFolder::Events, poster).await?;

        let new_event = NewEvent {
            title: request.title,
            category: request.category,
            description: request.description,
            date,
            time_start: request.time_start,
            location_name: request.location_name,
            registration_link: request.registration_link,
            poster: stored.path.clone().unwrap_or_default(),
        };

        let event = match self.ctx.event_repo().create(&new_event).await {
            Ok(event) => event,
            Err(e) => {
                uploads.discard(&stored).await;
                return Err(e.into());
            }
        };

        views::invalidate(self.ctx, EVENT_VIEWS).await;
        info!(event_id = event.id, "Event created");

        Ok(MutationResponse::ok("Event created successfully")
            .with_id(event.id)
            .with_warning(stored.warning))
    }

    /// Replace every field of an event; the poster only changes when a new
    /// one is submitted
    #[instrument(skip(self, request, poster))]
    pub async fn update(
        &self,
        id: i64,
        request: EventRequest,
        poster: ImageInput,
    ) -> ServiceResult<MutationResponse> {
        request.validate()?;
        let date = parse_day(&request.date)?;
        let existing = self.find(id).await?;

        let uploads = UploadService::new(self.ctx);
        let stored = uploads.store_image(UploadFolder::Events, poster).await?;

        let event = Event {
            title: request.title,
            category: request.category,
            description: request.description,
            date,
            time_start: request.time_start,
            location_name: request.location_name,
            registration_link: request.registration_link,
            poster: stored.path.clone().unwrap_or_else(|| existing.poster.clone()),
            ..existing.clone()
        };

        if let Err(e) = self.ctx.event_repo().update(&event).await {
            uploads.discard(&stored).await;
            return Err(e.into());
        }

        views::invalidate(self.ctx, EVENT_VIEWS).await;
        info!(event_id = id, "Event updated");

        Ok(MutationResponse::ok("Event updated successfully")
            .with_id(id)
            .with_warning(stored.warning))
    }

    /// Remove the row only; its image may still be referenced elsewhere
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MutationResponse> {
        self.find(id).await?;
        self.ctx.event_repo().delete(id).await?;

        views::invalidate(self.ctx, EVENT_VIEWS).await;
        info!(event_id = id, "Event deleted");

        Ok(MutationResponse::ok("Event deleted successfully").with_id(id))
    }

    pub async fn get(&self, id: i64) -> ServiceResult<EventResponse> {
        views::cached(self.ctx, PublicView::Events, &format!("id:{id}"), || self.load_one(id)).await
    }

    /// Every event, most recent date first
    pub async fn list(&self, page: u32) -> ServiceResult<PageResponse<EventResponse>> {
        let request = PageRequest::new(page, CONTENT_PER_PAGE);
        let variant = format!("page:{}", request.page());

        views::cached(self.ctx, PublicView::Events, &variant, || self.load_list(request)).await
    }

    pub async fn upcoming(&self, limit: i64) -> ServiceResult<Vec<EventResponse>> {
        self.upcoming_on(self.ctx.today(), limit).await
    }

    /// Events dated on or after `today`, soonest first
    pub async fn upcoming_on(&self, today: NaiveDate, limit: i64) -> ServiceResult<Vec<EventResponse>> {
        let limit = limit.clamp(1, MAX_UPCOMING);
        let variant = format!("upcoming:{today}:{limit}");

        views::cached(self.ctx, PublicView::Events, &variant, || self.load_upcoming(today, limit)).await
    }

    pub async fn past(&self, page: u32) -> ServiceResult<PageResponse<EventResponse>> {
        self.past_on(self.ctx.today(), page).await
    }

    /// Events dated before `today`, most recent first
    pub async fn past_on(&self, today: NaiveDate, page: u32) -> ServiceResult<PageResponse<EventResponse>> {
        let request = PageRequest::new(page, CONTENT_PER_PAGE);
        let variant = format!("past:{today}:{}", request.page());

        views::cached(self.ctx, PublicView::Events, &variant, || self.load_past(today, request)).await
    }

    /// Events of one calendar month, by date
    pub async fn calendar(&self, year: i32, month: u32) -> ServiceResult<Vec<EventResponse>> {
        let (start, end) = month_range(year, month)?;
        let variant = format!("calendar:{year}-{month:02}");

        views::cached(self.ctx, PublicView::Events, &variant, || self.load_between(start, end)).await
    }

    async fn find(&self, id: i64) -> ServiceResult<Event> {
        self.ctx
            .event_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(id).into())
    }

    async fn load_one(&self, id: i64) -> ServiceResult<EventResponse> {
        self.find(id).await.map(EventResponse::from)
    }

    async fn load_list(&self, request: PageRequest) -> ServiceResult<PageResponse<EventResponse>> {
        let page = self.ctx.event_repo().list(request).await?;
        Ok(PageResponse::from_page(page, EventResponse::from))
    }

    async fn load_upcoming(&self, today: NaiveDate, limit: i64) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().upcoming(today, limit).await?;
        Ok(events.into_iter().map(EventResponse::from).collect())
    }

    async fn load_past(
        &self,
        today: NaiveDate,
        request: PageRequest,
    ) -> ServiceResult<PageResponse<EventResponse>> {
        let page = self.ctx.event_repo().past(today, request).await?;
        Ok(PageResponse::from_page(page, EventResponse::from))
    }

    async fn load_between(&self, start: NaiveDate, end: NaiveDate) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().between(start, end).await?;
        Ok(events.into_iter().map(EventResponse::from).collect())
    }
}
