//! Division database model

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct DivisionModel {
    pub id: i64,
    pub name: String,
    pub is_board: bool,
    pub sort_order: i32,
}
