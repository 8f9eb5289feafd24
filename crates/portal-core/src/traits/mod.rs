//! Ports implemented by the infrastructure crates

mod cache;
mod repositories;
mod storage;

pub use cache::ViewCache;
pub use repositories::{
    DivisionRepository, EventRepository, GalleryRepository, NewsRepository, OfficerRepository,
    RepoResult,
};
pub use storage::FileStorage;
