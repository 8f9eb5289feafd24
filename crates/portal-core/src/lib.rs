//! # portal-core
//!
//! Domain layer for the organization portal: officers and their divisions,
//! the published content (events, news, gallery), access roles, and the ports
//! the infrastructure crates implement.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Credential, Division, Event, GalleryItem, NewEvent, NewGalleryItem, NewNewsItem, NewOfficer,
    NewsItem, Officer,
};
pub use error::DomainError;
pub use traits::{
    DivisionRepository, EventRepository, FileStorage, GalleryRepository, NewsRepository,
    OfficerRepository, RepoResult, ViewCache,
};
pub use value_objects::{
    AccessRole, Page, PageRequest, Position, PublicView, Sections, UploadFolder, UploadedFile,
};
