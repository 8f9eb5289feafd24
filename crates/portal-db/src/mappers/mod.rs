//! Model → entity mappers

mod content;
mod officer;

pub use officer::officers_from_models;
