//! REST API client for the illustration service.
//!
//! Wraps the service's single `POST /generate` endpoint using
//! [`reqwest`].

use std::time::Duration;

use serde::Deserialize;

/// HTTP client for the illustration service.
pub struct IllustratorApi {
    client: reqwest::Client,
    api_url: String,
}

/// Response returned by the service's `/generate` endpoint.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    /// Prompt the service derived from the diary text.
    #[serde(default)]
    pub prompt: String,
    /// URL of the rendered illustration.
    #[serde(default)]
    pub image_url: String,
}

/// Errors from the illustration service REST layer.
#[derive(Debug, thiserror::Error)]
pub enum IllustratorApiError {
    /// The HTTP request itself failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Illustration service error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The service answered 2xx but the payload carried no image URL.
    #[error("Illustration service returned an empty image URL")]
    EmptyImageUrl,
}

impl IllustratorApi {
    /// Create a new API client for the illustration service.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:8000`.
    /// * `timeout` - Per-request deadline. Generation renders an image on
    ///   the far side, so this is minutes rather than milliseconds; a hung
    ///   service counts as a failed generation once it elapses.
    pub fn new(api_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, api_url }
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    /// Generate an illustration for a diary entry.
    ///
    /// Sends a `POST /generate` request with the raw diary text and
    /// returns the URL of the rendered image.
    pub async fn generate_image_url(
        &self,
        diary_text: &str,
    ) -> Result<String, IllustratorApiError> {
        let body = serde_json::json!({
            "diary_text": diary_text,
        });

        let response = self
            .client
            .post(format!("{}/generate", self.api_url))
            .json(&body)
            .send()
            .await?;

        let parsed: GenerateResponse = Self::parse_response(response).await?;
        if parsed.image_url.is_empty() {
            return Err(IllustratorApiError::EmptyImageUrl);
        }
        Ok(parsed.image_url)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`IllustratorApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, IllustratorApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(IllustratorApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, IllustratorApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
