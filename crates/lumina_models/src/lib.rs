//! Insight provider integrations for Lumina.
//!
//! This crate implements the [`InsightDriver`](lumina_interface::InsightDriver)
//! trait for Google Gemini, turning a book's title and author into a short
//! insight and a category label.
//!
//! # Example
//!
//! ```no_run
//! use lumina_core::InsightRequest;
//! use lumina_interface::InsightDriver;
//! use lumina_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = InsightRequest::new("Dune", "Frank Herbert");
//! let insight = client.fetch_insight(&request).await?;
//! println!("{}: {}", insight.category(), insight.insight());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod gemini;

pub use extraction::extract_json;
pub use gemini::{DEFAULT_MODEL, GeminiClient};
