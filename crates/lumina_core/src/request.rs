use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A request for an insight about one book.
///
/// Carries the title and author the provider should consider, plus
/// optional generation parameters. Setters follow the `with_` builder
/// style so callers can chain only the parameters they care about.
///
/// # Examples
///
/// ```
/// use lumina_core::InsightRequest;
///
/// let request = InsightRequest::new("Dune", "Frank Herbert")
///     .with_temperature(0.7)
///     .with_max_tokens(256u32);
/// assert_eq!(request.title(), "Dune");
/// assert_eq!(request.temperature(), &Some(0.7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct InsightRequest {
    /// Title of the book under consideration.
    title: String,
    /// Author of the book under consideration.
    author: String,
    /// Sampling temperature, provider default when unset.
    temperature: Option<f32>,
    /// Output token cap, provider default when unset.
    max_tokens: Option<u32>,
}

impl InsightRequest {
    /// Creates a request with no generation parameters set.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            temperature: None,
            max_tokens: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_chain() {
        let request = InsightRequest::new("Dune", "Frank Herbert")
            .with_temperature(0.2)
            .with_max_tokens(128u32);
        assert_eq!(request.temperature(), &Some(0.2));
        assert_eq!(request.max_tokens(), &Some(128));
    }

    #[test]
    fn new_request_has_no_parameters() {
        let request = InsightRequest::new("Dune", "Frank Herbert");
        assert_eq!(request.temperature(), &None);
        assert_eq!(request.max_tokens(), &None);
    }
}
