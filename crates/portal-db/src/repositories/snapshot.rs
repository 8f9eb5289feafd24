//! Consistent reads for paginated listings

use portal_core::DomainError;
use sqlx::{PgPool, Postgres, Transaction};

use super::error::map_db_error;

/// Open a read-only REPEATABLE READ transaction so a page and its total count
/// see the same rows
pub async fn begin_snapshot(pool: &PgPool) -> Result<Transaction<'static, Postgres>, DomainError> {
    let mut tx = pool.begin().await.map_err(map_db_error)?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;
    Ok(tx)
}
