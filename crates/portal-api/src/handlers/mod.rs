//! Route handlers
//!
//! All HTTP request handlers organized by domain. Public reads need no
//! session; every admin handler re-checks access against the store.

pub mod admin;
pub mod auth;
pub mod events;
pub mod gallery;
pub mod health;
pub mod landing;
pub mod news;
pub mod officers;
