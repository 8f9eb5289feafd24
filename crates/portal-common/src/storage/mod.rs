//! Upload storage on the local filesystem

mod local;

pub use local::{sanitize_file_name, LocalFileStorage};
