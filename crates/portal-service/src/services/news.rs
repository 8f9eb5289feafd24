//! News service

use chrono::Utc;
use portal_core::value_objects::CONTENT_PER_PAGE;
use portal_core::{DomainError, NewNewsItem, NewsItem, PageRequest, PublicView, UploadFolder};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{MutationResponse, NewsRequest, NewsResponse, PageResponse, WritersResponse};

use super::context::ServiceContext;
use super::dates::parse_published_at;
use super::error::ServiceResult;
use super::upload::{ImageInput, UploadService};
use super::views;

const NEWS_VIEWS: &[PublicView] = &[PublicView::News, PublicView::Landing];

const MAX_LATEST: i64 = 50;

/// Non-blank optional form value
fn provided(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

/// News service
pub struct NewsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NewsService<'a> {
    /// Create a new NewsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a news item. Title, content and author are stored as sent;
    /// the date is always the time of publishing.
    #[instrument(skip(self, request, image), fields(title = %request.title))]
    pub async fn create(
        &self,
        request: NewsRequest,
        image: ImageInput,
    ) -> ServiceResult<MutationResponse> {
        request.validate()?;
        let date = Utc::now();

        let uploads = UploadService::new(self.ctx);
        let stored = uploads.store_image(UploadFolder::News, image).await?;

        let new_item = NewNewsItem {
            author: provided(request.author.as_ref())
                .unwrap_or(NewsItem::DEFAULT_AUTHOR)
                .to_string(),
            category: provided(request.category.as_ref())
                .unwrap_or(NewsItem::DEFAULT_CATEGORY)
                .to_string(),
            title: request.title,
            content: request.content,
            image: stored.path.clone().unwrap_or_default(),
            date,
        };

        let news = match self.ctx.news_repo().create(&new_item).await {
            Ok(news) => news,
            Err(e) => {
                uploads.discard(&stored).await;
                return Err(e.into());
            }
        };

        views::invalidate(self.ctx, NEWS_VIEWS).await;
        info!(news_id = news.id, "News created");

        Ok(MutationResponse::ok("News published successfully")
            .with_id(news.id)
            .with_warning(stored.warning))
    }

    /// Replace a news item; omitted author, category, date or image keep
    /// their current values
    #[instrument(skip(self, request, image))]
    pub async fn update(
        &self,
        id: i64,
        request: NewsRequest,
        image: ImageInput,
    ) -> ServiceResult<MutationResponse> {
        request.validate()?;
        let existing = self.find(id).await?;
        let date = match provided(request.date.as_ref()) {
            Some(value) => parse_published_at(Some(value))?,
            None => existing.date,
        };

        let uploads = UploadService::new(self.ctx);
        let stored = uploads.store_image(UploadFolder::News, image).await?;

        let news = NewsItem {
            author: provided(request.author.as_ref())
                .map_or_else(|| existing.author.clone(), str::to_string),
            category: provided(request.category.as_ref())
                .map_or_else(|| existing.category.clone(), str::to_string),
            title: request.title,
            content: request.content,
            image: stored.path.clone().unwrap_or_else(|| existing.image.clone()),
            date,
            ..existing.clone()
        };

        if let Err(e) = self.ctx.news_repo().update(&news).await {
            uploads.discard(&stored).await;
            return Err(e.into());
        }

        views::invalidate(self.ctx, NEWS_VIEWS).await;
        info!(news_id = id, "News updated");

        Ok(MutationResponse::ok("News updated successfully")
            .with_id(id)
            .with_warning(stored.warning))
    }

    /// Remove the row only; its image may still be referenced elsewhere
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MutationResponse> {
        self.find(id).await?;
        self.ctx.news_repo().delete(id).await?;

        views::invalidate(self.ctx, NEWS_VIEWS).await;
        info!(news_id = id, "News deleted");

        Ok(MutationResponse::ok("News deleted successfully").with_id(id))
    }

    pub async fn get(&self, id: i64) -> ServiceResult<NewsResponse> {
        views::cached(self.ctx, PublicView::News, &format!("id:{id}"), || self.load_one(id)).await
    }

    /// Newest first
    pub async fn list(&self, page: u32) -> ServiceResult<PageResponse<NewsResponse>> {
        let request = PageRequest::new(page, CONTENT_PER_PAGE);
        let variant = format!("page:{}", request.page());

        views::cached(self.ctx, PublicView::News, &variant, || self.load_list(request)).await
    }

    pub async fn latest(&self, limit: i64) -> ServiceResult<Vec<NewsResponse>> {
        let limit = limit.clamp(1, MAX_LATEST);
        let variant = format!("latest:{limit}");

        views::cached(self.ctx, PublicView::News, &variant, || self.load_latest(limit)).await
    }

    /// Number of distinct bylines
    pub async fn writers(&self) -> ServiceResult<WritersResponse> {
        views::cached(self.ctx, PublicView::News, "writers", || self.load_writers()).await
    }

    async fn find(&self, id: i64) -> ServiceResult<NewsItem> {
        self.ctx
            .news_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NewsNotFound(id).into())
    }

    async fn load_one(&self, id: i64) -> ServiceResult<NewsResponse> {
        self.find(id).await.map(NewsResponse::from)
    }

    async fn load_list(&self, request: PageRequest) -> ServiceResult<PageResponse<NewsResponse>> {
        let page = self.ctx.news_repo().list(request).await?;
        Ok(PageResponse::from_page(page, NewsResponse::from))
    }

    async fn load_latest(&self, limit: i64) -> ServiceResult<Vec<NewsResponse>> {
        let items = self.ctx.news_repo().latest(limit).await?;
        Ok(items.into_iter().map(NewsResponse::from).collect())
    }

    async fn load_writers(&self) -> ServiceResult<WritersResponse> {
        let count = self.ctx.news_repo().count_authors().await?;
        Ok(WritersResponse { count })
    }
}
