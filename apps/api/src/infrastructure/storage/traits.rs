use async_trait::async_trait;
use thiserror::Error;

/// A file read from the upload area.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Final path component, used for `Content-Disposition`
    pub file_name: String,

    /// Lower-cased extension without the dot
    pub extension: Option<String>,

    pub data: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("File read failed: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Reads a file addressed relative to the store root.
    async fn read(&self, relative_path: &str) -> Result<StoredFile, FileStoreError>;
}
