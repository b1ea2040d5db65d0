//! Trait definitions for Lumina insight providers.
//!
//! This crate defines the [`InsightDriver`] trait that every insight
//! backend implements, keeping the library logic independent of any one
//! provider. The shipped backend lives in `lumina_models`; tests supply
//! mock drivers of their own.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::InsightDriver;
