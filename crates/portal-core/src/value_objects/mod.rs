//! Value objects - immutable types that represent domain concepts

mod access_role;
mod pagination;
mod position;
mod public_view;
mod sections;
mod upload;

pub use access_role::{AccessRole, UnknownAccessRole};
pub use pagination::{Page, PageRequest, CONTENT_PER_PAGE, OFFICERS_PER_PAGE};
pub use position::Position;
pub use public_view::PublicView;
pub use sections::Sections;
pub use upload::{UploadFolder, UploadedFile};
