//! Gallery service

use portal_core::value_objects::CONTENT_PER_PAGE;
use portal_core::{
    DomainError, GalleryItem, NewGalleryItem, PageRequest, PublicView, UploadFolder,
};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{GalleryRequest, GalleryResponse, MutationResponse, PageResponse};

use super::context::ServiceContext;
use super::dates::parse_published_at;
use super::error::ServiceResult;
use super::upload::{ImageInput, UploadService};
use super::views;

const GALLERY_VIEWS: &[PublicView] = &[PublicView::Gallery, PublicView::Landing];

const MAX_LATEST: i64 = 50;

/// Gallery service
pub struct GalleryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GalleryService<'a> {
    /// Create a new GalleryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a gallery item; without an image the placeholder is used
    #[instrument(skip(self, request, image), fields(caption = %request.caption))]
    pub async fn create(
        &self,
        request: GalleryRequest,
        image: ImageInput,
    ) -> ServiceResult<MutationResponse> {
        request.validate()?;
        let date = parse_published_at(request.date.as_deref())?;

        let uploads = UploadService::new(self.ctx);
        let stored = uploads.store_image(UploadFolder::Gallery, image).await?;

        let new_item = NewGalleryItem {
            author: request
                .author
                .as_deref()
                .filter(|a| !a.trim().is_empty())
                .unwrap_or(GalleryItem::DEFAULT_AUTHOR)
                .to_string(),
            caption: request.caption,
            tag: request.tag,
            image: stored
                .path
                .clone()
                .unwrap_or_else(|| GalleryItem::PLACEHOLDER_IMAGE.to_string()),
            date,
        };

        let item = match self.ctx.gallery_repo().create(&new_item).await {
            Ok(item) => item,
            Err(e) => {
                uploads.discard(&stored).await;
                return Err(e.into());
            }
        };

        views::invalidate(self.ctx, GALLERY_VIEWS).await;
        info!(gallery_id = item.id, "Gallery item created");

        Ok(MutationResponse::ok("Gallery item added successfully")
            .with_id(item.id)
            .with_warning(stored.warning))
    }

    #[instrument(skip(self, request, image))]
    pub async fn update(
        &self,
        id: i64,
        request: GalleryRequest,
        image: ImageInput,
    ) -> ServiceResult<MutationResponse> {
        request.validate()?;
        let existing = self.find(id).await?;
        let date = match request.date.as_deref().filter(|d| !d.trim().is_empty()) {
            Some(value) => parse_published_at(Some(value))?,
            None => existing.date,
        };

        let uploads = UploadService::new(self.ctx);
        let stored = uploads.store_image(UploadFolder::Gallery, image).await?;

        let item = GalleryItem {
            author: request
                .author
                .as_deref()
                .filter(|a| !a.trim().is_empty())
                .map_or_else(|| existing.author.clone(), str::to_string),
            caption: request.caption,
            tag: request.tag,
            image: stored.path.clone().unwrap_or_else(|| existing.image.clone()),
            date,
            ..existing.clone()
        };

        if let Err(e) = self.ctx.gallery_repo().update(&item).await {
            uploads.discard(&stored).await;
            return Err(e.into());
        }

        views::invalidate(self.ctx, GALLERY_VIEWS).await;
        info!(gallery_id = id, "Gallery item updated");

        Ok(MutationResponse::ok("Gallery item updated successfully")
            .with_id(id)
            .with_warning(stored.warning))
    }

    /// Remove the row only; its image may still be referenced elsewhere
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MutationResponse> {
        self.find(id).await?;
        self.ctx.gallery_repo().delete(id).await?;

        views::invalidate(self.ctx, GALLERY_VIEWS).await;
        info!(gallery_id = id, "Gallery item deleted");

        Ok(MutationResponse::ok("Gallery item deleted successfully").with_id(id))
    }

    pub async fn get(&self, id: i64) -> ServiceResult<GalleryResponse> {
        views::cached(self.ctx, PublicView::Gallery, &format!("id:{id}"), || self.load_one(id)).await
    }

    /// Newest first
    pub async fn list(&self, page: u32) -> ServiceResult<PageResponse<GalleryResponse>> {
        let request = PageRequest::new(page, CONTENT_PER_PAGE);
        let variant = format!("page:{}", request.page());

        views::cached(self.ctx, PublicView::Gallery, &variant, || self.load_list(request)).await
    }

    pub async fn latest(&self, limit: i64) -> ServiceResult<Vec<GalleryResponse>> {
        let limit = limit.clamp(1, MAX_LATEST);
        let variant = format!("latest:{limit}");

        views::cached(self.ctx, PublicView::Gallery, &variant, || self.load_latest(limit)).await
    }

    async fn find(&self, id: i64) -> ServiceResult<GalleryItem> {
        self.ctx
            .gallery_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::GalleryItemNotFound(id).into())
    }

    async fn load_one(&self, id: i64) -> ServiceResult<GalleryResponse> {
        self.find(id).await.map(GalleryResponse::from)
    }

    async fn load_list(&self, request: PageRequest) -> ServiceResult<PageResponse<GalleryResponse>> {
        let page = self.ctx.gallery_repo().list(request).await?;
        Ok(PageResponse::from_page(page, GalleryResponse::from))
    }

    async fn load_latest(&self, limit: i64) -> ServiceResult<Vec<GalleryResponse>> {
        let items = self.ctx.gallery_repo().latest(limit).await?;
        Ok(items.into_iter().map(GalleryResponse::from).collect())
    }
}
