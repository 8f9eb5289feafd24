//! Uploaded images stored on the local filesystem and served back under a URL prefix

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use portal_core::{DomainError, FileStorage, RepoResult, UploadFolder, UploadedFile};
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument, warn};

/// Name collisions within the same millisecond are retried with a counter
const MAX_NAME_ATTEMPTS: u32 = 16;

/// Replace every character outside `[A-Za-z0-9.]` with `_` and lower-case the result
pub fn sanitize_file_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() {
        "file".to_string()
    } else {
        sanitized
    }
}

/// Write the whole payload to a freshly created file; a partly written
/// file is removed before the error is returned
async fn write_or_discard<W>(mut writer: W, path: &Path, bytes: &[u8]) -> RepoResult<()>
where
    W: AsyncWrite + Unpin,
{
    let written = async {
        writer.write_all(bytes).await?;
        writer.flush().await
    }
    .await;
    drop(writer);

    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(path).await {
            warn!(path = %path.display(), error = %cleanup, "Failed to remove partial upload");
        }
        return Err(DomainError::StorageError(format!("write {}: {e}", path.display())));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
    public_prefix: String,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        let prefix: String = public_prefix.into();
        Self {
            root: root.into(),
            public_prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem location of a managed public path
    fn resolve(&self, public_path: &str) -> Option<PathBuf> {
        let relative = public_path
            .strip_prefix(&self.public_prefix)?
            .trim_start_matches('/');
        let relative = Path::new(relative);

        if !relative.as_os_str().is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)))
        {
            Some(self.root.join(relative))
        } else {
            None
        }
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    #[instrument(skip(self, file), fields(file_name = %file.file_name, size = file.len()))]
    async fn save(&self, folder: UploadFolder, file: &UploadedFile) -> RepoResult<String> {
        let dir = self.root.join(folder.as_str());
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| DomainError::StorageError(format!("create {}: {e}", dir.display())))?;

        let stamp = Utc::now().timestamp_millis();
        let base_name = sanitize_file_name(&file.file_name);

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let stored_name = if attempt == 0 {
                format!("{stamp}-{base_name}")
            } else {
                format!("{stamp}-{attempt}-{base_name}")
            };
            let path = dir.join(&stored_name);

            let handle = match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(handle) => handle,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(DomainError::StorageError(format!(
                        "open {}: {e}",
                        path.display()
                    )))
                }
            };

            write_or_discard(handle, &path, &file.bytes).await?;

            let public_path = format!("{}/{}/{}", self.public_prefix, folder, stored_name);
            debug!(%public_path, "Stored upload");
            return Ok(public_path);
        }

        Err(DomainError::StorageError(format!(
            "no free file name for {base_name} in {folder}"
        )))
    }

    #[instrument(skip(self))]
    async fn remove(&self, public_path: &str) -> RepoResult<bool> {
        if !self.is_managed(public_path) {
            return Ok(false);
        }
        let Some(path) = self.resolve(public_path) else {
            return Ok(false);
        };

        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::StorageError(format!(
                "remove {}: {e}",
                path.display()
            ))),
        }
    }

    fn is_managed(&self, public_path: &str) -> bool {
        public_path.starts_with(&format!("{}/", self.public_prefix))
            && !public_path.contains("placeholder")
            && self.resolve(public_path).is_some()
    }
}
