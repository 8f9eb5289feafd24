//! PostgreSQL implementation of NewsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use portal_core::traits::{NewsRepository, RepoResult};
use portal_core::{DomainError, NewNewsItem, NewsItem, Page, PageRequest};

use crate::models::NewsModel;

use super::error::map_db_error;
use super::snapshot::begin_snapshot;

const NEWS_COLUMNS: &str =
    "id, title, content, author, category, image, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PgNewsRepository {
    pool: PgPool,
}

impl PgNewsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsRepository for PgNewsRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<NewsItem>> {
        let sql = format!("SELECT {NEWS_COLUMNS} FROM news WHERE id = $1");
        let result = sqlx::query_as::<_, NewsModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(NewsItem::from))
    }

    #[instrument(skip(self, news), fields(title = %news.title))]
    async fn create(&self, news: &NewNewsItem) -> RepoResult<NewsItem> {
        let sql = format!(
            r"
            INSERT INTO news (title, content, author, category, image, published_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {NEWS_COLUMNS}
            "
        );
        let model = sqlx::query_as::<_, NewsModel>(&sql)
            .bind(&news.title)
            .bind(&news.content)
            .bind(&news.author)
            .bind(&news.category)
            .bind(&news.image)
            .bind(news.date)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(NewsItem::from(model))
    }

    #[instrument(skip(self, news), fields(id = news.id))]
    async fn update(&self, news: &NewsItem) -> RepoResult<NewsItem> {
        let sql = format!(
            r"
            UPDATE news
            SET title = $2, content = $3, author = $4, category = $5, image = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {NEWS_COLUMNS}
            "
        );
        let model = sqlx::query_as::<_, NewsModel>(&sql)
            .bind(news.id)
            .bind(&news.title)
            .bind(&news.content)
            .bind(&news.author)
            .bind(&news.category)
            .bind(&news.image)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .ok_or(DomainError::NewsNotFound(news.id))?;

        Ok(NewsItem::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NewsNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> RepoResult<Page<NewsItem>> {
        let mut tx = begin_snapshot(&self.pool).await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM news")
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let sql = format!(
            "SELECT {NEWS_COLUMNS} FROM news ORDER BY published_at DESC, id DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, NewsModel>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Page::new(rows.into_iter().map(NewsItem::from).collect(), total, page))
    }

    #[instrument(skip(self))]
    async fn latest(&self, limit: i64) -> RepoResult<Vec<NewsItem>> {
        let sql = format!(
            "SELECT {NEWS_COLUMNS} FROM news ORDER BY published_at DESC, id DESC LIMIT $1"
        );
        let rows = sqlx::query_as::<_, NewsModel>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(NewsItem::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM news")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_authors(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(DISTINCT author) FROM news")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
