//! Admin dashboard statistics

use tracing::instrument;

use crate::dto::{DashboardResponse, RecentItemResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Items per recent-activity list
const RECENT_ITEMS: i64 = 5;

/// Dashboard service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    /// Create a new DashboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Member, division and content totals plus the newest items per type
    #[instrument(skip(self))]
    pub async fn stats(&self) -> ServiceResult<DashboardResponse> {
        let total_members = self.ctx.officer_repo().count().await?;
        let total_divisions = self.ctx.officer_repo().count_staffed_divisions().await?;

        let total_content = self.ctx.event_repo().count().await?
            + self.ctx.news_repo().count().await?
            + self.ctx.gallery_repo().count().await?;

        let recent_events = self.ctx.event_repo().recent(RECENT_ITEMS).await?;
        let recent_news = self.ctx.news_repo().latest(RECENT_ITEMS).await?;
        let recent_gallery = self.ctx.gallery_repo().latest(RECENT_ITEMS).await?;

        Ok(DashboardResponse {
            total_members,
            total_divisions,
            total_content,
            recent_events: recent_events.into_iter().map(RecentItemResponse::from).collect(),
            recent_news: recent_news.into_iter().map(RecentItemResponse::from).collect(),
            recent_gallery: recent_gallery.into_iter().map(RecentItemResponse::from).collect(),
        })
    }
}
