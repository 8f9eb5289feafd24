//! Query string extractors for listings
//!
//! Page numbers are 1-based; missing or zero pages mean the first page.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;

use crate::response::ApiError;

/// `?page=&q=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<u32>,
    /// Name filter (officer listing only)
    #[serde(default)]
    pub q: Option<String>,
}

impl ListQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn search(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

/// `?limit=`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LimitQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

impl LimitQuery {
    pub fn limit_or(&self, default: i64) -> i64 {
        self.limit.unwrap_or(default)
    }
}

/// `?year=&month=`; defaults to the current month
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CalendarQuery {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
}

impl CalendarQuery {
    pub fn year_month(&self) -> (i32, u32) {
        let today = Utc::now().date_naive();
        (
            self.year.unwrap_or_else(|| today.year()),
            self.month.unwrap_or_else(|| today.month()),
        )
    }
}

macro_rules! query_extractor {
    ($ty:ty) => {
        #[async_trait]
        impl<S> FromRequestParts<S> for $ty
        where
            S: Send + Sync,
        {
            type Rejection = ApiError;

            async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
                let Query(params) = Query::<$ty>::from_request_parts(parts, state)
                    .await
                    .map_err(|e| ApiError::invalid_query(e.body_text()))?;
                Ok(params)
            }
        }
    };
}

query_extractor!(ListQuery);
query_extractor!(LimitQuery);
query_extractor!(CalendarQuery);
