//! Multipart content form extractor
//!
//! Admin forms for officers, events, news and gallery items are submitted as
//! `multipart/form-data`: text fields plus an optional image part. A part with
//! a file name is kept as an upload, everything else as text.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
};
use portal_core::UploadedFile;
use portal_service::ImageInput;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::response::ApiError;

/// Parsed multipart form
#[derive(Debug, Default)]
pub struct ContentForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl ContentForm {
    /// Deserialize the text fields into a request DTO
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let object: Map<String, Value> = self
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();

        serde_json::from_value(Value::Object(object))
            .map_err(|e| ApiError::invalid_body(e.to_string()))
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    /// Image submitted under `name`, either as a file part or as the URL of a
    /// previous upload
    pub fn image(&mut self, name: &str) -> ImageInput {
        let file = self.files.remove(name);
        let url = self.fields.remove(name);
        ImageInput::from_parts(file, url)
    }
}

#[async_trait]
impl<S> FromRequest<S> for ContentForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?;

        let mut form = ContentForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::invalid_body(e.body_text()))?;
                    form.files
                        .insert(name, UploadedFile::new(file_name, content_type, bytes.to_vec()));
                }
                None => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| ApiError::invalid_body(e.body_text()))?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }
}
