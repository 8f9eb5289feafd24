//! PostgreSQL implementation of GalleryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use portal_core::traits::{GalleryRepository, RepoResult};
use portal_core::{DomainError, GalleryItem, NewGalleryItem, Page, PageRequest};

use crate::models::GalleryItemModel;

use super::error::map_db_error;
use super::snapshot::begin_snapshot;

const GALLERY_COLUMNS: &str =
    "id, caption, tag, author, image, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PgGalleryRepository {
    pool: PgPool,
}

impl PgGalleryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GalleryRepository for PgGalleryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<GalleryItem>> {
        let sql = format!("SELECT {GALLERY_COLUMNS} FROM gallery_items WHERE id = $1");
        let result = sqlx::query_as::<_, GalleryItemModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(GalleryItem::from))
    }

    #[instrument(skip(self, item), fields(caption = %item.caption))]
    async fn create(&self, item: &NewGalleryItem) -> RepoResult<GalleryItem> {
        let sql = format!(
            r"
            INSERT INTO gallery_items (caption, tag, author, image, published_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {GALLERY_COLUMNS}
            "
        );
        let model = sqlx::query_as::<_, GalleryItemModel>(&sql)
            .bind(&item.caption)
            .bind(&item.tag)
            .bind(&item.author)
            .bind(&item.image)
            .bind(item.date)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(GalleryItem::from(model))
    }

    #[instrument(skip(self, item), fields(id = item.id))]
    async fn update(&self, item: &GalleryItem) -> RepoResult<GalleryItem> {
        let sql = format!(
            r"
            UPDATE gallery_items
            SET caption = $2, tag = $3, author = $4, image = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING {GALLERY_COLUMNS}
            "
        );
        let model = sqlx::query_as::<_, GalleryItemModel>(&sql)
            .bind(item.id)
            .bind(&item.caption)
            .bind(&item.tag)
            .bind(&item.author)
            .bind(&item.image)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .ok_or(DomainError::GalleryItemNotFound(item.id))?;

        Ok(GalleryItem::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GalleryItemNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> RepoResult<Page<GalleryItem>> {
        let mut tx = begin_snapshot(&self.pool).await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM gallery_items")
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let sql = format!(
            "SELECT {GALLERY_COLUMNS} FROM gallery_items ORDER BY published_at DESC, id DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, GalleryItemModel>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Page::new(rows.into_iter().map(GalleryItem::from).collect(), total, page))
    }

    #[instrument(skip(self))]
    async fn latest(&self, limit: i64) -> RepoResult<Vec<GalleryItem>> {
        let sql = format!(
            "SELECT {GALLERY_COLUMNS} FROM gallery_items ORDER BY published_at DESC, id DESC LIMIT $1"
        );
        let rows = sqlx::query_as::<_, GalleryItemModel>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(GalleryItem::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM gallery_items")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
