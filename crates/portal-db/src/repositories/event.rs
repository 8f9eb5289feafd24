//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use portal_core::traits::{EventRepository, RepoResult};
use portal_core::{DomainError, Event, NewEvent, Page, PageRequest};

use crate::models::EventModel;

use super::error::map_db_error;
use super::snapshot::begin_snapshot;

const EVENT_COLUMNS: &str = r"
    id, title, category, description, event_date, time_start, location_name,
    registration_link, poster, created_at, updated_at
";

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Events dated before `before` (all events when `None`), most recent first
    async fn page_before(
        &self,
        before: Option<NaiveDate>,
        page: PageRequest,
    ) -> RepoResult<Page<Event>> {
        let mut tx = begin_snapshot(&self.pool).await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM events WHERE ($1::DATE IS NULL OR event_date < $1)",
        )
        .bind(before)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let sql = format!(
            r"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE ($1::DATE IS NULL OR event_date < $1)
            ORDER BY event_date DESC, id DESC
            LIMIT $2 OFFSET $3
            "
        );
        let rows = sqlx::query_as::<_, EventModel>(&sql)
            .bind(before)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Page::new(rows.into_iter().map(Event::from).collect(), total, page))
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Event>> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
        let result = sqlx::query_as::<_, EventModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self, event), fields(title = %event.title))]
    async fn create(&self, event: &NewEvent) -> RepoResult<Event> {
        let sql = format!(
            r"
            INSERT INTO events (title, category, description, event_date, time_start,
                                location_name, registration_link, poster)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {EVENT_COLUMNS}
            "
        );
        let model = sqlx::query_as::<_, EventModel>(&sql)
            .bind(&event.title)
            .bind(&event.category)
            .bind(&event.description)
            .bind(event.date)
            .bind(&event.time_start)
            .bind(&event.location_name)
            .bind(&event.registration_link)
            .bind(&event.poster)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Event::from(model))
    }

    #[instrument(skip(self, event), fields(id = event.id))]
    async fn update(&self, event: &Event) -> RepoResult<Event> {
        let sql = format!(
            r"
            UPDATE events
            SET title = $2, category = $3, description = $4, event_date = $5, time_start = $6,
                location_name = $7, registration_link = $8, poster = $9, updated_at = NOW()
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "
        );
        let model = sqlx::query_as::<_, EventModel>(&sql)
            .bind(event.id)
            .bind(&event.title)
            .bind(&event.category)
            .bind(&event.description)
            .bind(event.date)
            .bind(&event.time_start)
            .bind(&event.location_name)
            .bind(&event.registration_link)
            .bind(&event.poster)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .ok_or(DomainError::EventNotFound(event.id))?;

        Ok(Event::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EventNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> RepoResult<Page<Event>> {
        self.page_before(None, page).await
    }

    #[instrument(skip(self))]
    async fn upcoming(&self, today: NaiveDate, limit: i64) -> RepoResult<Vec<Event>> {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE event_date >= $1 ORDER BY event_date ASC, id ASC LIMIT $2"
        );
        let rows = sqlx::query_as::<_, EventModel>(&sql)
            .bind(today)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn past(&self, today: NaiveDate, page: PageRequest) -> RepoResult<Page<Event>> {
        self.page_before(Some(today), page).await
    }

    #[instrument(skip(self))]
    async fn between(&self, start: NaiveDate, end: NaiveDate) -> RepoResult<Vec<Event>> {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE event_date >= $1 AND event_date < $2 ORDER BY event_date ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, EventModel>(&sql)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: i64) -> RepoResult<Vec<Event>> {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        let rows = sqlx::query_as::<_, EventModel>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
