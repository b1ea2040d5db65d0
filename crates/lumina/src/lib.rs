//! Lumina - AI-Assisted Reading List
//!
//! Lumina keeps a personal reading list in a single JSON shelf file and
//! enriches every book added to it with a short AI-generated insight and
//! a category label. Books appear on the shelf immediately and settle
//! with their insight when the background request completes; a failed
//! request settles with a fallback instead of blocking the list.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lumina::{GeminiClient, JsonShelfStore, Library};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(JsonShelfStore::new("books.json"));
//!     let driver = Arc::new(GeminiClient::new()?);
//!
//!     let mut library = Library::new(store, driver);
//!     library.initialize().await?;
//!
//!     if let Some(id) = library.add_book("Dune", "Frank Herbert").await {
//!         library.wait_for_settlement(id).await;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Lumina is organized as a workspace with focused crates:
//!
//! - `lumina_core` - Core data types (Book, Shelf, etc.)
//! - `lumina_interface` - InsightDriver trait definition
//! - `lumina_error` - Error types
//! - `lumina_storage` - JSON shelf persistence
//! - `lumina_models` - Insight provider implementations
//! - `lumina_library` - Library state, config, and the enrichment lifecycle
//! - `lumina_tui` - Terminal UI
//!
//! This crate (`lumina`) re-exports everything for convenience.

// Re-export workspace crates
pub use lumina_core::*;
pub use lumina_error::*;
pub use lumina_interface::*;
pub use lumina_library::*;
pub use lumina_models::*;
pub use lumina_storage::*;
pub use lumina_tui::*;
