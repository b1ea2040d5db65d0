//! JSON file shelf storage implementation.
//!
//! This backend keeps the whole shelf in a single JSON file, written
//! atomically on every save. The file is a bare array of book records with
//! camelCase keys, readable and editable by hand.

use crate::ShelfStore;
use lumina_core::Book;
use lumina_error::{JsonError, LuminaResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// JSON file storage backend.
///
/// Loads tolerate absence and corruption: a missing file is an empty
/// shelf, and an unreadable one is logged and treated as empty rather
/// than wedging the app at startup. Write failures do surface as errors.
///
/// # Features
///
/// - **Single file**: The whole shelf lives in one human-readable JSON file
/// - **Atomic writes**: Uses temp file + rename so a crash never leaves a torn shelf
/// - **Lenient loads**: Missing or corrupt files come back as an empty shelf
#[derive(Debug, Clone)]
pub struct JsonShelfStore {
    path: PathBuf,
}

impl JsonShelfStore {
    /// Create a storage backend rooted at the given shelf file path.
    ///
    /// The file and its parent directories need not exist yet; they are
    /// created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The platform-default shelf file path, `{data dir}/lumina/books.json`.
    ///
    /// # Errors
    ///
    /// Returns an error on platforms with no data directory.
    pub fn default_path() -> LuminaResult<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            StorageError::new(StorageErrorKind::NoDataDir(
                "no platform data directory available".to_string(),
            ))
        })?;
        Ok(data_dir.join("lumina").join("books.json"))
    }

    /// Path of the shelf file this backend reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ShelfStore for JsonShelfStore {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> LuminaResult<Vec<Book>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No shelf file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        match serde_json::from_str::<Vec<Book>>(&raw) {
            Ok(books) => {
                tracing::debug!(count = books.len(), "Loaded shelf file");
                Ok(books)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Shelf file is not valid JSON, starting empty"
                );
                Ok(Vec::new())
            }
        }
    }

    #[tracing::instrument(skip(self, books), fields(count = books.len(), path = %self.path.display()))]
    async fn save(&self, books: &[Book]) -> LuminaResult<()> {
        let json = serde_json::to_string_pretty(books)
            .map_err(|e| JsonError::new(format!("serializing shelf: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, json).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!("Saved shelf file");
        Ok(())
    }
}
