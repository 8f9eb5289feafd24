//! PostgreSQL implementation of OfficerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use portal_core::traits::{OfficerRepository, RepoResult};
use portal_core::{DomainError, NewOfficer, Officer, Page, PageRequest, Position};

use crate::mappers::officers_from_models;
use crate::models::OfficerModel;

use super::error::{like_pattern, map_db_error, map_unique_violation, officer_conflict};
use super::snapshot::begin_snapshot;

const OFFICER_COLUMNS: &str = r"
    id, name, member_id, position, division_id, division_name, access_role, password,
    credential_is_hashed, must_change_password, image, is_active, sort_order,
    created_at, updated_at
";

/// PostgreSQL implementation of OfficerRepository
#[derive(Clone)]
pub struct PgOfficerRepository {
    pool: PgPool,
}

impl PgOfficerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(&self, condition: &str, bind: &str) -> RepoResult<Option<Officer>> {
        let sql = format!(
            "SELECT {OFFICER_COLUMNS} FROM officer_details WHERE {condition} ORDER BY id LIMIT 1"
        );
        let result = sqlx::query_as::<_, OfficerModel>(&sql)
            .bind(bind)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Officer::try_from).transpose()
    }

    async fn division_name(&self, division_id: i64) -> String {
        sqlx::query_scalar::<_, String>("SELECT name FROM divisions WHERE id = $1")
            .bind(division_id)
            .fetch_optional(&self.pool)
            .await
            .ok()
            .flatten()
            .unwrap_or_else(|| division_id.to_string())
    }
}

#[async_trait]
impl OfficerRepository for PgOfficerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Officer>> {
        let sql = format!("SELECT {OFFICER_COLUMNS} FROM officer_details WHERE id = $1");
        let result = sqlx::query_as::<_, OfficerModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Officer::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Officer>> {
        self.fetch_one_where("name = $1", name).await
    }

    #[instrument(skip(self))]
    async fn find_by_member_id(&self, member_id: &str) -> RepoResult<Option<Officer>> {
        self.fetch_one_where("member_id = $1", member_id).await
    }

    #[instrument(skip(self))]
    async fn find_active_holder(
        &self,
        position: &Position,
        division_id: Option<i64>,
    ) -> RepoResult<Option<Officer>> {
        let sql = format!(
            r"
            SELECT {OFFICER_COLUMNS}
            FROM officer_details
            WHERE is_active AND position = $1 AND ($2::BIGINT IS NULL OR division_id = $2)
            ORDER BY id
            LIMIT 1
            "
        );
        let result = sqlx::query_as::<_, OfficerModel>(&sql)
            .bind(position.as_str())
            .bind(division_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Officer::try_from).transpose()
    }

    #[instrument(skip(self, officer), fields(member_id = %officer.member_id, position = %officer.position))]
    async fn create(&self, officer: &NewOfficer) -> RepoResult<Officer> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO officers (name, member_id, position, division_id, access_role, password,
                                  credential_is_hashed, must_change_password, image, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, TRUE, $7, $8)
            RETURNING id
            ",
        )
        .bind(&officer.name)
        .bind(&officer.member_id)
        .bind(officer.position.as_str())
        .bind(officer.division_id)
        .bind(officer.access_role.as_str())
        .bind(&officer.password_hash)
        .bind(&officer.image)
        .bind(officer.sort_order)
        .fetch_one(&self.pool)
        .await;

        let id = match id {
            Ok(id) => id,
            Err(e) => {
                let division = self.division_name(officer.division_id).await;
                return Err(map_unique_violation(e, |constraint| {
                    officer_conflict(
                        constraint,
                        &officer.member_id,
                        officer.position.as_str(),
                        &division,
                    )
                }));
            }
        };

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::OfficerNotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM officers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::OfficerNotFound(id.to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_active(&self, id: i64, active: bool) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE officers
            SET is_active = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(active)
        .execute(&self.pool)
        .await;

        let result = match result {
            Ok(result) => result,
            Err(e) => {
                let current = self.find_by_id(id).await?;
                return Err(map_unique_violation(e, |constraint| match &current {
                    Some(officer) => officer_conflict(
                        constraint,
                        &officer.member_id,
                        officer.position.as_str(),
                        &officer.division_name,
                    ),
                    None => DomainError::OfficerNotFound(id.to_string()),
                }));
            }
        };

        if result.rows_affected() == 0 {
            return Err(DomainError::OfficerNotFound(id.to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE officers
            SET password = $2, credential_is_hashed = TRUE, must_change_password = FALSE,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::OfficerNotFound(id.to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn search(&self, name_query: &str, page: PageRequest) -> RepoResult<Page<Officer>> {
        let pattern = like_pattern(name_query.trim());
        let mut tx = begin_snapshot(&self.pool).await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM officers WHERE name ILIKE $1",
        )
        .bind(&pattern)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let sql = format!(
            r"
            SELECT {OFFICER_COLUMNS}
            FROM officer_details
            WHERE name ILIKE $1
            ORDER BY sort_order ASC, id ASC
            LIMIT $2 OFFSET $3
            "
        );
        let rows = sqlx::query_as::<_, OfficerModel>(&sql)
            .bind(&pattern)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Page::new(officers_from_models(rows)?, total, page))
    }

    #[instrument(skip(self))]
    async fn list_active(&self) -> RepoResult<Vec<Officer>> {
        let sql = format!(
            "SELECT {OFFICER_COLUMNS} FROM officer_details WHERE is_active ORDER BY sort_order ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, OfficerModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        officers_from_models(rows)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM officers")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_staffed_divisions(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(DISTINCT o.division_id)
            FROM officers o
            JOIN divisions d ON d.id = o.division_id
            WHERE NOT d.is_board
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
