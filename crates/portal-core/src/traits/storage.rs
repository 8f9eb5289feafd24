//! File storage port for uploaded images

use async_trait::async_trait;

use super::RepoResult;
use crate::value_objects::{UploadFolder, UploadedFile};

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Store `file` under `folder` and return its public path
    /// (`<public prefix>/<folder>/<timestamp>-<sanitized name>`).
    async fn save(&self, folder: UploadFolder, file: &UploadedFile) -> RepoResult<String>;

    /// Delete a previously stored file by its public path.
    ///
    /// Returns `false` when the path is not managed by this storage or the
    /// file is already gone.
    async fn remove(&self, public_path: &str) -> RepoResult<bool>;

    /// Whether `public_path` points at a file this storage owns (not a
    /// placeholder, not outside the uploads directory)
    fn is_managed(&self, public_path: &str) -> bool;
}
