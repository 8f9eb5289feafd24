//! Upload service
//!
//! Stores images attached to content forms and handles the generic upload
//! endpoint. Removal of stored files is always best-effort.

use portal_common::UploadFailurePolicy;
use portal_core::{UploadFolder, UploadedFile};
use tracing::{info, instrument, warn};

use crate::dto::UploadResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Image field of a content form
#[derive(Debug, Clone, Default)]
pub enum ImageInput {
    /// Nothing submitted; updates keep the current image
    #[default]
    None,
    /// A file uploaded with the form
    File(UploadedFile),
    /// Path of a previously uploaded file
    Url(String),
}

impl ImageInput {
    /// Build from the optional file part and the optional text field of a
    /// form; a non-empty file wins
    pub fn from_parts(file: Option<UploadedFile>, url: Option<String>) -> Self {
        match (file, url) {
            (Some(file), _) if !file.is_empty() => Self::File(file),
            (_, Some(url)) if !url.trim().is_empty() => Self::Url(url.trim().to_string()),
            _ => Self::None,
        }
    }
}

/// Outcome of storing an [`ImageInput`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredImage {
    pub path: Option<String>,
    /// Whether `path` is a file written by this request
    pub newly_stored: bool,
    /// Present when a file was dropped under the degrade policy
    pub warning: Option<String>,
}

/// Upload service
pub struct UploadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UploadService<'a> {
    /// Create a new UploadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve a content form's image into a stored path.
    ///
    /// A storage failure fails the request under the reject policy; under
    /// the degrade policy the image is dropped and a warning returned.
    #[instrument(skip(self, input))]
    pub async fn store_image(
        &self,
        folder: UploadFolder,
        input: ImageInput,
    ) -> ServiceResult<StoredImage> {
        let file = match input {
            ImageInput::None => return Ok(StoredImage::default()),
            ImageInput::Url(url) => {
                if folder == UploadFolder::Officers && self.ctx.file_storage().is_managed(&url) {
                    warn!(url = %url, "Officer photo must be uploaded with the form");
                    return Err(ServiceError::validation(
                        "Officer photos must be uploaded with the form",
                    ));
                }
                return Ok(StoredImage {
                    path: Some(url),
                    ..StoredImage::default()
                })
            }
            ImageInput::File(file) if file.is_empty() => return Ok(StoredImage::default()),
            ImageInput::File(file) => file,
        };

        match self.ctx.file_storage().save(folder, &file).await {
            Ok(path) => Ok(StoredImage {
                path: Some(path),
                newly_stored: true,
                warning: None,
            }),
            Err(e) => match self.ctx.upload_policy() {
                UploadFailurePolicy::Reject => {
                    warn!(file = %file.file_name, error = %e, "Image upload failed, rejecting");
                    Err(e.into())
                }
                UploadFailurePolicy::Degrade => {
                    warn!(file = %file.file_name, error = %e, "Image upload failed, saving without it");
                    Ok(StoredImage {
                        path: None,
                        newly_stored: false,
                        warning: Some(format!(
                            "Image '{}' could not be stored; saved without it",
                            file.file_name
                        )),
                    })
                }
            },
        }
    }

    /// `POST /api/admin/uploads`
    #[instrument(skip(self, file), fields(file = %file.file_name, bytes = file.len()))]
    pub async fn upload(&self, folder: UploadFolder, file: UploadedFile) -> ServiceResult<UploadResponse> {
        if file.is_empty() {
            return Err(ServiceError::validation("No file uploaded"));
        }

        let url = self.ctx.file_storage().save(folder, &file).await?;
        info!(url = %url, "File uploaded");

        Ok(UploadResponse { success: true, url })
    }

    /// Undo a store made earlier in the same request
    pub async fn discard(&self, image: &StoredImage) {
        if let (true, Some(path)) = (image.newly_stored, image.path.as_deref()) {
            self.remove_best_effort(path).await;
        }
    }

    /// Remove a stored file; placeholders and foreign URLs are skipped and
    /// failures only logged
    pub async fn remove_best_effort(&self, public_path: &str) {
        if !self.ctx.file_storage().is_managed(public_path) {
            return;
        }

        match self.ctx.file_storage().remove(public_path).await {
            Ok(true) => info!(path = %public_path, "Removed stored file"),
            Ok(false) => warn!(path = %public_path, "Stored file was already gone"),
            Err(e) => warn!(path = %public_path, error = %e, "Failed to remove stored file"),
        }
    }
}
