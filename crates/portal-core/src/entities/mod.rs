//! Domain entities - core business objects

pub mod division;
mod event;
mod gallery;
mod news;
mod officer;

pub use division::Division;
pub use event::{Event, NewEvent};
pub use gallery::{GalleryItem, NewGalleryItem};
pub use news::{NewNewsItem, NewsItem};
pub use officer::{Credential, NewOfficer, Officer, NEW_OFFICER_SORT_ORDER};
