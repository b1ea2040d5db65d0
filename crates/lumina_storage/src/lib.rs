//! Shelf persistence for the Lumina reading list.
//!
//! This crate provides pluggable storage backends for the shelf file. The
//! whole shelf is written as one JSON array of books on every change, so a
//! backend only needs two operations: load everything and save everything.
//!
//! # Example
//!
//! ```rust
//! use lumina_core::Book;
//! use lumina_storage::{JsonShelfStore, ShelfStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JsonShelfStore::new("/tmp/lumina/books.json");
//!
//! // Persist the current shelf
//! let books = vec![Book::new("Dune", "Frank Herbert")];
//! store.save(&books).await?;
//!
//! // Read it back
//! let loaded = store.load().await?;
//! assert_eq!(loaded.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use lumina_core::Book;
use lumina_error::LuminaResult;

mod json;

pub use json::JsonShelfStore;
pub use lumina_error::{StorageError, StorageErrorKind};

/// Trait for pluggable shelf storage backends.
///
/// Implementations persist the full shelf as a unit. Order is preserved
/// exactly as given, so the newest-first ordering the library maintains is
/// the ordering on disk.
#[async_trait::async_trait]
pub trait ShelfStore: Send + Sync {
    /// Load the persisted shelf.
    ///
    /// A backend with nothing stored yet returns an empty list rather than
    /// an error, so first launch and an empty library look the same.
    async fn load(&self) -> LuminaResult<Vec<Book>>;

    /// Persist the shelf, replacing whatever was stored before.
    async fn save(&self, books: &[Book]) -> LuminaResult<()>;
}
