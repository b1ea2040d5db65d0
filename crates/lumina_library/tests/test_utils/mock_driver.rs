//! Mock insight driver for testing.

use async_trait::async_trait;
use lumina_core::{BookInsight, InsightRequest};
use lumina_error::{GeminiError, GeminiErrorKind, LuminaError, LuminaResult};
use lumina_interface::InsightDriver;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return the given insight
    Success(BookInsight),
    /// Always return the specified error
    Error(GeminiErrorKind),
    /// Return a sequence of responses (errors or successes)
    Sequence(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(BookInsight),
    Error(GeminiErrorKind),
}

/// Mock insight driver for testing.
///
/// This mock allows tests to control responses and verify behavior without
/// making actual API calls.
#[derive(Debug)]
pub struct MockInsightDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
}

impl MockInsightDriver {
    /// Create a mock driver that always succeeds with the given insight.
    pub fn new_success(insight: BookInsight) -> Self {
        Self {
            behavior: MockBehavior::Success(insight),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a mock driver that always fails with the given error.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self {
            behavior: MockBehavior::Error(error),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a mock driver with a sequence of responses.
    #[allow(dead_code)]
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            behavior: MockBehavior::Sequence(responses),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Get the number of times fetch_insight() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Get the next response based on the configured behavior.
    fn next_response(&self) -> LuminaResult<BookInsight> {
        let mut count = self.call_count.lock().unwrap();
        let current_count = *count;
        *count += 1;

        match &self.behavior {
            MockBehavior::Success(insight) => Ok(insight.clone()),
            MockBehavior::Error(error_kind) => {
                Err(LuminaError::from(GeminiError::new(error_kind.clone())))
            }
            MockBehavior::Sequence(responses) => {
                if current_count >= responses.len() {
                    // Past end of sequence, return error
                    Err(LuminaError::from(GeminiError::new(
                        GeminiErrorKind::ApiRequest(format!(
                            "Mock sequence exhausted (call {} beyond {} responses)",
                            current_count + 1,
                            responses.len()
                        )),
                    )))
                } else {
                    match &responses[current_count] {
                        MockResponse::Success(insight) => Ok(insight.clone()),
                        MockResponse::Error(error_kind) => {
                            Err(LuminaError::from(GeminiError::new(error_kind.clone())))
                        }
                    }
                }
            }
        }
    }
}

#[async_trait]
impl InsightDriver for MockInsightDriver {
    async fn fetch_insight(&self, _req: &InsightRequest) -> LuminaResult<BookInsight> {
        // Small delay to simulate network latency (but keep it minimal for fast tests)
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        self.next_response()
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_success() {
        let mock = MockInsightDriver::new_success(BookInsight::new("An epic.", "Fantasy"));
        let request = InsightRequest::new("Dune", "Frank Herbert");

        let insight = mock.fetch_insight(&request).await.unwrap();
        assert_eq!(mock.call_count(), 1);
        assert_eq!(insight.category(), "Fantasy");
    }

    #[tokio::test]
    async fn test_mock_error() {
        let mock = MockInsightDriver::new_error(GeminiErrorKind::HttpError {
            status_code: 503,
            message: "Service unavailable".to_string(),
        });
        let request = InsightRequest::new("Dune", "Frank Herbert");

        let result = mock.fetch_insight(&request).await;
        assert!(result.is_err());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_sequence() {
        let mock = MockInsightDriver::new_sequence(vec![
            MockResponse::Success(BookInsight::new("First.", "Fiction")),
            MockResponse::Error(GeminiErrorKind::HttpError {
                status_code: 429,
                message: "Rate limit".to_string(),
            }),
        ]);
        let request = InsightRequest::new("Dune", "Frank Herbert");

        assert!(mock.fetch_insight(&request).await.is_ok());
        assert!(mock.fetch_insight(&request).await.is_err());
        // Exhausted sequences keep failing
        assert!(mock.fetch_insight(&request).await.is_err());
        assert_eq!(mock.call_count(), 3);
    }
}
