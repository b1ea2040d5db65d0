//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, JsonError, StorageError, TuiError};

/// The foundation error enum. Each Lumina crate contributes a variant for
/// its domain.
///
/// # Examples
///
/// ```
/// use lumina_error::{ConfigError, LuminaError};
///
/// let config_err = ConfigError::new("bad value");
/// let err: LuminaError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LuminaErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Gemini error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// TUI error
    #[from(TuiError)]
    Tui(TuiError),
}

/// Lumina error with kind discrimination.
///
/// # Examples
///
/// ```
/// use lumina_error::{LuminaResult, StorageError, StorageErrorKind};
///
/// fn might_fail() -> LuminaResult<()> {
///     Err(StorageError::new(StorageErrorKind::FileWrite("disk full".to_string())))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Lumina Error: {}", _0)]
pub struct LuminaError(Box<LuminaErrorKind>);

impl LuminaError {
    /// Create a new error from a kind.
    pub fn new(kind: LuminaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LuminaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to LuminaErrorKind
impl<T> From<T> for LuminaError
where
    T: Into<LuminaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Lumina operations.
///
/// # Examples
///
/// ```
/// use lumina_error::{JsonError, LuminaResult};
///
/// fn parse_payload() -> LuminaResult<String> {
///     Err(JsonError::new("unexpected end of input"))?
/// }
/// ```
pub type LuminaResult<T> = std::result::Result<T, LuminaError>;
