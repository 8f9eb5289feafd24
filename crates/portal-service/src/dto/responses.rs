//! Response DTOs for API endpoints
//!
//! All response DTOs serialize as camelCase JSON. Public read models also
//! deserialize so they can be served back from the view cache.

use chrono::{DateTime, NaiveDate, Utc};
use portal_core::{AccessRole, Page};
use serde::{Deserialize, Serialize};

// ============================================================================
// Common Response Types
// ============================================================================

/// `{success, message}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Result of a create / update / delete
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Set when the item was saved but an attached image was dropped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl MutationResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: None,
            warning: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_warning(mut self, warning: Option<String>) -> Self {
        self.warning = warning;
        self
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
}

/// One page of a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub total_pages: u32,
    pub current_page: u32,
    pub per_page: u32,
}

impl<T> PageResponse<T> {
    pub fn from_page<E, F>(page: Page<E>, f: F) -> Self
    where
        F: FnMut(E) -> T,
    {
        let total_pages = page.total_pages();
        let page = page.map(f);
        Self {
            data: page.items,
            total: page.total,
            total_pages,
            current_page: page.page,
            per_page: page.per_page,
        }
    }
}

// ============================================================================
// Session Responses
// ============================================================================

/// Session payload shown to the client for UI state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserResponse {
    pub name: String,
    pub role: AccessRole,
    pub member_id: String,
    pub image: Option<String>,
}

/// Returned by login and `GET /api/auth/me`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub success: bool,
    pub user: SessionUserResponse,
    pub must_change_password: bool,
    /// Admin sections the officer may open
    pub sections: Vec<&'static str>,
}

// ============================================================================
// Officer Responses
// ============================================================================

/// Personnel row in the admin panel
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerResponse {
    pub id: i64,
    pub name: String,
    pub member_id: String,
    pub position: String,
    pub division_id: i64,
    pub division: String,
    pub access_role: AccessRole,
    pub image: Option<String>,
    pub is_active: bool,
    pub must_change_password: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

/// Officer card on the public directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicOfficerResponse {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionDirectoryResponse {
    pub division: String,
    pub is_board: bool,
    pub officers: Vec<PublicOfficerResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionResponse {
    pub id: i64,
    pub name: String,
    pub is_board: bool,
}

// ============================================================================
// Content Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub time_start: String,
    pub location_name: String,
    pub registration_link: String,
    /// Empty when the event has no poster
    pub poster: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub image: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryResponse {
    pub id: i64,
    pub caption: String,
    pub tag: String,
    pub author: String,
    pub image: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WritersResponse {
    pub count: i64,
}

// ============================================================================
// Aggregate Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingResponse {
    pub upcoming_events: Vec<EventResponse>,
    pub latest_news: Vec<NewsResponse>,
    pub latest_gallery: Vec<GalleryResponse>,
    pub writers: i64,
}

/// Uniform shape for the dashboard's recent-activity lists
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentItemResponse {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub category: String,
    pub author: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub total_members: i64,
    pub total_divisions: i64,
    pub total_content: i64,
    pub recent_events: Vec<RecentItemResponse>,
    pub recent_news: Vec<RecentItemResponse>,
    pub recent_gallery: Vec<RecentItemResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: &'static str,
    pub cache: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl ReadinessResponse {
    pub fn ready(database_ok: bool, cache_ok: bool) -> Self {
        let label = |ok: bool| if ok { "healthy" } else { "unhealthy" };
        Self {
            status: if database_ok && cache_ok { "ready" } else { "not_ready" },
            checks: HealthChecks {
                database: label(database_ok),
                cache: label(cache_ok),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
