//! # portal-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;

pub use services::{
    AccessService, AuthService, DashboardService, EventService, GalleryService, ImageInput,
    LandingService, LoginOutcome, NewsService, OfficerService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StoredImage, UploadService,
};
