//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the data directory
    #[display("Failed to create data directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to read the shelf file
    #[display("Failed to read shelf file: {}", _0)]
    FileRead(String),
    /// Failed to write the shelf file
    #[display("Failed to write shelf file: {}", _0)]
    FileWrite(String),
    /// No usable data directory on this platform
    #[display("No data directory available: {}", _0)]
    NoDataDir(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use lumina_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::FileRead("/tmp/books.json".to_string()));
/// assert!(format!("{}", err).contains("read"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
