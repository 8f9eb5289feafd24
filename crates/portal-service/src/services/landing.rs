//! Landing page aggregate

use chrono::NaiveDate;
use portal_core::PublicView;
use tracing::instrument;

use crate::dto::{EventResponse, GalleryResponse, LandingResponse, NewsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::views;

const UPCOMING_EVENTS: i64 = 3;
const LATEST_NEWS: i64 = 3;
const LATEST_GALLERY: i64 = 8;

/// Landing service
pub struct LandingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LandingService<'a> {
    /// Create a new LandingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn landing(&self) -> ServiceResult<LandingResponse> {
        self.landing_on(self.ctx.today()).await
    }

    /// Upcoming events, latest news, latest gallery and the writers count
    #[instrument(skip(self))]
    pub async fn landing_on(&self, today: NaiveDate) -> ServiceResult<LandingResponse> {
        let variant = format!("home:{today}");
        views::cached(self.ctx, PublicView::Landing, &variant, || self.load(today)).await
    }

    async fn load(&self, today: NaiveDate) -> ServiceResult<LandingResponse> {
        let events = self.ctx.event_repo().upcoming(today, UPCOMING_EVENTS).await?;
        let news = self.ctx.news_repo().latest(LATEST_NEWS).await?;
        let gallery = self.ctx.gallery_repo().latest(LATEST_GALLERY).await?;
        let writers = self.ctx.news_repo().count_authors().await?;

        Ok(LandingResponse {
            upcoming_events: events.into_iter().map(EventResponse::from).collect(),
            latest_news: news.into_iter().map(NewsResponse::from).collect(),
            latest_gallery: gallery.into_iter().map(GalleryResponse::from).collect(),
            writers,
        })
    }
}
