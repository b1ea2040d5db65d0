use derive_getters::Getters;
use serde::{Deserialize, Serialize};

const FALLBACK_INSIGHT: &str = "No insight available for this book yet.";
const FALLBACK_CATEGORY: &str = "General";

/// An insight and category pair produced for a book.
///
/// This is both the deserialization target for provider responses and the
/// value applied to a [`Book`](crate::Book) when its request settles.
/// [`BookInsight::fallback`] supplies the placeholder pair used when a
/// provider request fails, so every book eventually settles.
///
/// # Examples
///
/// ```
/// use lumina_core::BookInsight;
///
/// let insight = BookInsight::new("A spice-soaked epic.", "Science Fiction");
/// assert_eq!(insight.category(), "Science Fiction");
///
/// let fallback = BookInsight::fallback();
/// assert_eq!(fallback.category(), "General");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BookInsight {
    /// One-sentence observation about the book.
    insight: String,
    /// Single category label such as "Science Fiction" or "Memoir".
    category: String,
}

impl BookInsight {
    /// Creates an insight pair from provider output.
    pub fn new(insight: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            insight: insight.into(),
            category: category.into(),
        }
    }

    /// The placeholder pair recorded when a provider request fails.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_INSIGHT, FALLBACK_CATEGORY)
    }

    /// Consumes the pair, yielding `(insight, category)`.
    pub fn into_parts(self) -> (String, String) {
        (self.insight, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_stable() {
        let fallback = BookInsight::fallback();
        assert_eq!(fallback.insight(), "No insight available for this book yet.");
        assert_eq!(fallback.category(), "General");
    }

    #[test]
    fn parses_provider_json() {
        let raw = r#"{"insight": "A spice-soaked epic.", "category": "Science Fiction"}"#;
        let parsed: BookInsight = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed, BookInsight::new("A spice-soaked epic.", "Science Fiction"));
    }
}
