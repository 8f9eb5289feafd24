//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in portal-core.

mod division;
mod error;
mod event;
mod gallery;
mod news;
mod officer;
mod snapshot;

pub use division::PgDivisionRepository;
pub use event::PgEventRepository;
pub use gallery::PgGalleryRepository;
pub use news::PgNewsRepository;
pub use officer::PgOfficerRepository;
