use super::traits::{FileStore, FileStoreError, StoredFile};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Serves files from a directory on local disk.
///
/// Client paths are always resolved under `root`; absolute paths and `..`
/// components are refused.
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        tracing::info!(root = %root.display(), "Initializing LocalFileStore");
        Self { root }
    }

    fn resolve(&self, relative_path: &str) -> Result<PathBuf, FileStoreError> {
        let trimmed = relative_path.trim();
        if trimmed.is_empty() {
            return Err(FileStoreError::InvalidPath("empty path".into()));
        }

        let candidate = Path::new(trimmed);
        for component in candidate.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    warn!(path = %trimmed, "Rejected path outside upload directory");
                    return Err(FileStoreError::InvalidPath(trimmed.to_string()));
                }
            }
        }

        Ok(self.root.join(candidate))
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    #[instrument(skip(self))]
    async fn read(&self, relative_path: &str) -> Result<StoredFile, FileStoreError> {
        let path = self.resolve(relative_path)?;

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FileStoreError::NotFound(relative_path.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            return Err(FileStoreError::NotFound(relative_path.to_string()));
        }

        let data = tokio::fs::read(&path).await?;
        debug!("Read {} bytes from {}", data.len(), path.display());

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

        Ok(StoredFile {
            file_name,
            extension,
            data,
        })
    }
}
