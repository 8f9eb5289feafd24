//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request and orchestrates repositories, storage and the view cache.

pub mod access;
pub mod auth;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod gallery;
pub mod landing;
pub mod news;
pub mod officer;
pub mod upload;
mod dates;
mod views;

pub use access::AccessService;
pub use auth::{AuthService, LoginOutcome};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dashboard::DashboardService;
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use gallery::GalleryService;
pub use landing::LandingService;
pub use news::NewsService;
pub use officer::OfficerService;
pub use upload::{ImageInput, StoredImage, UploadService};
