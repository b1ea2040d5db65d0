//! Google Gemini API implementation.
//!
//! This module provides the shipped [`InsightDriver`] backend. One client
//! wraps one model; the model is chosen at construction time from
//! configuration, with [`DEFAULT_MODEL`] as the fallback.
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
//! let client = GeminiClient::with_model("gemini-2.5-flash")?;
//! let request = InsightRequest::new("Dune", "Frank Herbert")
//!     .with_temperature(0.7);
//! let insight = client.fetch_insight(&request).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::env;
use tracing::instrument;

use gemini_rust::{Gemini, client::Model};

use lumina_core::{BookInsight, InsightRequest};
use lumina_error::{GeminiError, GeminiErrorKind, LuminaResult};
use lumina_interface::InsightDriver;

use crate::extraction::extract_json;

/// Model used when configuration names none.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";

const SYSTEM_PROMPT: &str = "You are a well-read librarian. Given a book's title and author, \
respond with a single JSON object containing two string fields: \"insight\", one interesting \
sentence about the book, and \"category\", a single genre label such as \"Science Fiction\" \
or \"Memoir\". Output ONLY valid JSON.";

/// Client for the Google Gemini API.
///
/// Holds one `gemini-rust` client bound to a single model. The library
/// never retries or rate limits here; a failed request surfaces as an
/// error and the caller substitutes the fallback insight.
pub struct GeminiClient {
    /// The Gemini API client
    client: Gemini,
    /// Model this client was created for
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client for the default model.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lumina_models::GeminiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeminiClient::new()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> LuminaResult<Self> {
        Self::with_model(DEFAULT_MODEL)
    }

    /// Create a client for a specific model.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    /// Unrecognized model names are passed through to the API, so newly
    /// released models work without a code change.
    #[instrument(name = "gemini_client_with_model")]
    pub fn with_model(model_name: &str) -> LuminaResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        let model_enum = Self::model_name_to_enum(model_name);
        let client = Gemini::with_model(&api_key, model_enum)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            model_name: model_name.to_string(),
        })
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Maps common model name strings to their corresponding Model enum
    /// variants. Uses Model::Custom for unrecognized model names,
    /// automatically adding the "models/" prefix required by the API.
    ///
    /// # Examples
    ///
    /// - "gemini-2.5-flash" → Model::Gemini25Flash
    /// - "gemini-2.0-flash" → Model::Custom("models/gemini-2.0-flash")
    /// - "models/gemini-2.0-flash" → Model::Custom("models/gemini-2.0-flash") (preserved)
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            "text-embedding-004" => Model::TextEmbedding004,
            // For other model names, use Custom variant with "models/" prefix
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Render the user turn for an insight request.
    fn user_prompt(req: &InsightRequest) -> String {
        format!("Book title: {}\nAuthor: {}", req.title(), req.author())
    }

    /// Parse an insight out of raw model output.
    ///
    /// Tolerates markdown fences and surrounding prose, but insists on
    /// non-blank insight and category fields so a fallback placeholder
    /// never hides behind an empty string.
    fn parse_insight(response: &str) -> LuminaResult<BookInsight> {
        let json = extract_json(response)?;

        let insight: BookInsight = serde_json::from_str(&json).map_err(|e| {
            let preview = json.chars().take(100).collect::<String>();

            tracing::error!(
                error = %e,
                json_preview = %preview,
                "Insight JSON parsing failed"
            );

            GeminiError::new(GeminiErrorKind::InvalidResponse(format!(
                "failed to parse insight JSON: {} (JSON: {}...)",
                e, preview
            )))
        })?;

        if insight.insight().trim().is_empty() || insight.category().trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::InvalidResponse(
                "insight or category field is blank".to_string(),
            ))
            .into());
        }

        Ok(insight)
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into structured GeminiError
    /// with HTTP status codes when available.
    fn parse_api_error(err: impl std::fmt::Display) -> GeminiError {
        let err_msg = err.to_string();

        // Try to extract HTTP status code from error message
        // Example: "bad response from server; code 503; description: ..."
        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GeminiError::new(GeminiErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract HTTP status code from error message string.
    ///
    /// Parses strings like "bad response from server; code 503; description: ..."
    /// and extracts the numeric status code.
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }
}

#[async_trait]
impl InsightDriver for GeminiClient {
    #[instrument(skip(self, req), fields(title = %req.title(), model = %self.model_name))]
    async fn fetch_insight(&self, req: &InsightRequest) -> LuminaResult<BookInsight> {
        let mut builder = self
            .client
            .generate_content()
            .with_system_prompt(SYSTEM_PROMPT)
            .with_user_message(&Self::user_prompt(req));

        // Apply optional parameters
        if let Some(temp) = req.temperature() {
            builder = builder.with_temperature(*temp);
        }

        if let Some(max_tok) = req.max_tokens() {
            builder = builder.with_max_output_tokens(*max_tok as i32);
        }

        let response = builder.execute().await.map_err(Self::parse_api_error)?;

        Self::parse_insight(&response.text())
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
