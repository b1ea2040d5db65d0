//! Library state and the shelf lifecycle for Lumina.
//!
//! This crate ties the domain types together: [`Library`] owns the shelf,
//! persists it through a [`ShelfStore`](lumina_storage::ShelfStore), and
//! enriches each new book in the background through an
//! [`InsightDriver`](lumina_interface::InsightDriver). [`LuminaConfig`]
//! supplies the model, generation parameters, and shelf location.
//!
//! # Lifecycle
//!
//! Adding a book is optimistic: the record lands on the shelf and on disk
//! immediately, marked as generating, while the insight request runs on a
//! background task. When the request settles the result flows back over a
//! channel, is applied to the shelf, and the shelf is saved again. A failed
//! request settles with the fallback insight, so no book generates forever.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod library;

pub use config::{LuminaConfig, LuminaConfigBuilder};
pub use library::{DraftField, Library};
