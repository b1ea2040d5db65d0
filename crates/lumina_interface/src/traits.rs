//! Trait definitions for insight backends.

use async_trait::async_trait;
use lumina_core::{BookInsight, InsightRequest};
use lumina_error::LuminaResult;

/// Core trait that all insight backends must implement.
///
/// A driver turns a title and author into a [`BookInsight`]. Failures
/// surface as errors here; the library layer decides what a failed
/// request means for the book (it substitutes the fallback insight), so
/// drivers stay honest about what actually happened.
#[async_trait]
pub trait InsightDriver: Send + Sync {
    /// Fetch an insight and category for the book named in the request.
    async fn fetch_insight(&self, req: &InsightRequest) -> LuminaResult<BookInsight>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.0-flash-lite").
    fn model_name(&self) -> &str;
}
