//! Uploaded file payloads and their storage folders

use std::fmt;

/// Folder under the public uploads directory, one per entity type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadFolder {
    Officers,
    Events,
    News,
    Gallery,
    General,
}

impl UploadFolder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Officers => "officers",
            Self::Events => "events",
            Self::News => "news",
            Self::Gallery => "gallery",
            Self::General => "general",
        }
    }

    /// Folder named by a form field; unknown or empty names land in `general`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "officers" => Self::Officers,
            "events" => Self::Events,
            "news" => Self::News,
            "gallery" => Self::Gallery,
            _ => Self::General,
        }
    }
}

impl fmt::Display for UploadFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file received from a form, held in memory until stored
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    /// Browsers submit an empty part when no file was chosen
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
