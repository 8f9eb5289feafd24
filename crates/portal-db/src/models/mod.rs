//! Database models - structs that map directly to database tables

mod division;
mod event;
mod gallery;
mod news;
mod officer;

pub use division::DivisionModel;
pub use event::EventModel;
pub use gallery::GalleryItemModel;
pub use news::NewsModel;
pub use officer::OfficerModel;
