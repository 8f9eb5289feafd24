//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs (camelCase)
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    ChangePasswordRequest, CreateOfficerRequest, EventRequest, GalleryRequest, LoginRequest,
    NewsRequest, SetOfficerStatusRequest,
};

pub use responses::{
    DashboardResponse, DivisionDirectoryResponse, DivisionResponse, EventResponse,
    GalleryResponse, HealthChecks, HealthResponse, LandingResponse, MessageResponse,
    MutationResponse, NewsResponse, OfficerResponse, PageResponse, PublicOfficerResponse,
    ReadinessResponse, RecentItemResponse, SessionResponse, SessionUserResponse, UploadResponse,
    WritersResponse,
};
