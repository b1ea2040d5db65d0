//! Error types for the Lumina reading list.
//!
//! This crate provides the foundation error types used throughout the Lumina
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use lumina_error::{ConfigError, LuminaResult};
//!
//! fn read_settings() -> LuminaResult<String> {
//!     Err(ConfigError::new("missing model name"))?
//! }
//!
//! match read_settings() {
//!     Ok(value) => println!("Got: {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod json;
mod storage;
mod tui;

pub use config::ConfigError;
pub use error::{LuminaError, LuminaErrorKind, LuminaResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
pub use tui::{TuiError, TuiErrorKind, TuiResult};
