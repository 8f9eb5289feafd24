//! PostgreSQL implementation of DivisionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use portal_core::traits::{DivisionRepository, RepoResult};
use portal_core::Division;

use crate::models::DivisionModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgDivisionRepository {
    pool: PgPool,
}

impl PgDivisionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DivisionRepository for PgDivisionRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Division>> {
        let rows = sqlx::query_as::<_, DivisionModel>(
            "SELECT id, name, is_board, sort_order FROM divisions ORDER BY sort_order, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Division::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Division>> {
        let result = sqlx::query_as::<_, DivisionModel>(
            "SELECT id, name, is_board, sort_order FROM divisions WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Division::from))
    }
}
