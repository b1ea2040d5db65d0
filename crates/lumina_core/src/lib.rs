//! Core data types for the Lumina reading list.
//!
//! This crate defines the domain vocabulary shared by every other Lumina
//! crate: the [`Book`] record, the [`BookInsight`] pair produced by an
//! insight provider, the [`InsightRequest`] sent to one, and the [`Shelf`]
//! collection that orders books newest first.
//!
//! The serialized form of these types is the on-disk format of the shelf
//! file, so field names and timestamp encoding are part of the contract:
//! books serialize with camelCase keys and epoch-millisecond timestamps.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod insight;
mod request;
mod shelf;

pub use book::Book;
pub use insight::BookInsight;
pub use request::InsightRequest;
pub use shelf::Shelf;
