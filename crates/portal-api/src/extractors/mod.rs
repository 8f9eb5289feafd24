//! Axum extractors for request handling
//!
//! Custom extractors for the session cookie, multipart content forms,
//! validation, and pagination.

mod content_form;
mod pagination;
mod path;
mod session;
mod validated;

pub use content_form::ContentForm;
pub use pagination::{CalendarQuery, LimitQuery, ListQuery};
pub use path::IdPath;
pub use session::SessionUser;
pub use validated::ValidatedJson;
