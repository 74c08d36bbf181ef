//! Hugging Face text-generation inference client.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use backon::Retryable;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::resilience::RetryPolicy;
use super::{GenerationFailure, GenerationRequest, TextGenerator};

// ---------------------------------------------------------------------------
// Wire types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct InferencePayload<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_new_tokens: u32,
    temperature: f64,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
    Error { error: String },
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Client for the Hugging Face inference API.
///
/// Transient failures (rate limiting, 5xx, network errors) are retried
/// according to the [`RetryPolicy`].
#[derive(Clone)]
pub struct HuggingFaceClient {
    http: Client,
    endpoint: String,
    token: String,
    retry: RetryPolicy,
}

impl fmt::Debug for HuggingFaceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl HuggingFaceClient {
    /// Create a client for `model` served under `base_url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(
        base_url: &str,
        model: &str,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("eventecho/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/{}", base_url.trim_end_matches('/'), model),
            token: token.into(),
            retry: RetryPolicy::default(),
        })
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request_once(&self, request: &GenerationRequest) -> Result<String, GenerationFailure> {
        let payload = InferencePayload {
            inputs: &request.prompt,
            parameters: InferenceParameters {
                max_new_tokens: request.max_new_tokens,
                temperature: request.temperature,
                return_full_text: false,
            },
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(classify_transport)?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerationFailure::RateLimited);
        }
        if !status.is_success() {
            return Err(GenerationFailure::Http {
                status: status.as_u16(),
                message: truncate(&body, 200),
            });
        }

        parse_response(&body)
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationFailure> {
        (|| self.request_once(request))
            .retry(self.retry.backoff())
            .when(|failure: &GenerationFailure| failure.is_transient())
            .notify(|failure: &GenerationFailure, delay: Duration| {
                log::warn!("Generation attempt failed ({failure}); retrying in {delay:?}");
            })
            .await
    }
}

fn classify_transport(err: reqwest::Error) -> GenerationFailure {
    if err.is_timeout() {
        GenerationFailure::Timeout
    } else if err.is_decode() {
        GenerationFailure::Malformed(err.to_string())
    } else {
        GenerationFailure::Network(err.to_string())
    }
}

fn parse_response(body: &str) -> Result<String, GenerationFailure> {
    let parsed: InferenceResponse =
        serde_json::from_str(body).map_err(|e| GenerationFailure::Malformed(e.to_string()))?;

    match parsed {
        InferenceResponse::Batch(mut items) => {
            if items.is_empty() {
                Err(GenerationFailure::EmptyResponse)
            } else {
                Ok(items.swap_remove(0).generated_text)
            }
        }
        InferenceResponse::Single(item) => Ok(item.generated_text),
        InferenceResponse::Error { error } => Err(GenerationFailure::Malformed(error)),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HuggingFaceClient::new(
            "https://api-inference.huggingface.co/models/",
            "microsoft/Phi-3-mini-4k-instruct",
            "hf_test",
            Duration::from_secs(30),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "https://api-inference.huggingface.co/models/microsoft/Phi-3-mini-4k-instruct"
        );
        let debug = format!("{:?}", client);
        assert!(debug.contains("HuggingFaceClient"));
        assert!(!debug.contains("hf_test"));
    }

    #[test]
    fn test_payload_shape() {
        let payload = InferencePayload {
            inputs: "Plan a wedding",
            parameters: InferenceParameters {
                max_new_tokens: 500,
                temperature: 0.7,
                return_full_text: false,
            },
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["inputs"], "Plan a wedding");
        assert_eq!(json["parameters"]["max_new_tokens"], 500);
        assert_eq!(json["parameters"]["temperature"], 0.7);
        assert_eq!(json["parameters"]["return_full_text"], false);
    }

    #[test]
    fn test_parse_batch_response() {
        let body = r#"[{"generated_text": "1. Event Concept"}]"#;
        assert_eq!(parse_response(body), Ok("1. Event Concept".to_string()));
    }

    #[test]
    fn test_parse_single_response() {
        let body = r#"{"generated_text": "Theme: garden"}"#;
        assert_eq!(parse_response(body), Ok("Theme: garden".to_string()));
    }

    #[test]
    fn test_parse_empty_batch() {
        assert_eq!(parse_response("[]"), Err(GenerationFailure::EmptyResponse));
    }

    #[test]
    fn test_parse_error_payload() {
        let body = r#"{"error": "Model is currently loading"}"#;
        assert_eq!(
            parse_response(body),
            Err(GenerationFailure::Malformed("Model is currently loading".to_string()))
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            parse_response("<html>oops</html>"),
            Err(GenerationFailure::Malformed(_))
        ));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("ab", 3), "ab");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_failure() {
        let client = HuggingFaceClient::new(
            "http://127.0.0.1:9",
            "model",
            "hf_test",
            Duration::from_secs(2),
        )
        .unwrap()
        .with_retry(RetryPolicy::default().with_max_retries(0));
        let request = GenerationRequest {
            prompt: "hi".to_string(),
            max_new_tokens: 10,
            temperature: 0.7,
        };
        let result = client.generate(&request).await;
        assert!(matches!(
            result,
            Err(GenerationFailure::Network(_) | GenerationFailure::Timeout)
        ));
    }
}
