//! Gemini client for the Generative Language REST API
//!
//! Sends a single user turn to `models/{model}:generateContent` together with
//! the process-wide [`SafetyPolicy`] and returns the concatenated candidate text.
//! Blocked prompts, safety-stopped candidates and empty output are all surfaced
//! as [`BackendError`]s so the pipeline never tries to parse an empty string.

use super::client::LLMClient;
use super::error::BackendError;
use super::safety::SafetyPolicy;
use super::types::{LLMRequest, LLMResponse};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Finish reasons that mean the candidate was withheld rather than completed
const BLOCKING_FINISH_REASONS: &[&str] = &["SAFETY", "BLOCKLIST", "PROHIBITED_CONTENT", "SPII"];

/// Gemini client configuration
#[derive(Clone)]
pub struct GeminiClientConfig {
    /// API key; `None` makes every call fail with a configuration error
    pub api_key: Option<String>,
    /// Model name (e.g. "gemini-2.5-flash")
    pub model: String,
    /// Base endpoint URL
    pub endpoint: String,
    /// Request timeout; `None` means the call may block indefinitely
    pub timeout: Option<Duration>,
    /// Safety settings attached to every request
    pub safety: SafetyPolicy,
}

impl Default for GeminiClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            safety: SafetyPolicy::unfiltered(),
        }
    }
}

impl fmt::Debug for GeminiClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("safety", &self.safety)
            .finish()
    }
}

/// Gemini-backed [`LLMClient`]
///
/// Thread-safe; share it behind an `Arc`.
pub struct GeminiClient {
    http_client: Client,
    config: GeminiClientConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiClientConfig) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|e| BackendError::Other {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        debug!(
            "Creating Gemini client: model={}, endpoint={}, timeout={:?}",
            config.model, config.endpoint, config.timeout
        );

        Ok(Self {
            http_client,
            config,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_body<'a>(&'a self, request: &'a LLMRequest) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            safety_settings: &self.config.safety,
        }
    }

    fn map_transport_error(&self, e: reqwest::Error) -> BackendError {
        if e.is_timeout() {
            let seconds = self.config.timeout.map(|t| t.as_secs()).unwrap_or(0);
            error!("Gemini request timed out after {}s", seconds);
            BackendError::TimeoutError { seconds }
        } else {
            error!("Gemini request error: {}", e);
            BackendError::NetworkError {
                message: format!("Request failed: {}", e),
            }
        }
    }
}

#[async_trait]
impl LLMClient for GeminiClient {
    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, BackendError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| BackendError::ConfigurationError {
                message: "GOOGLE_API_KEY is not configured".to_string(),
            })?;

        let start = Instant::now();
        debug!("Sending prompt to Gemini: prompt_length={}", request.prompt.len());

        let response = self
            .http_client
            .post(self.url())
            .header(API_KEY_HEADER, api_key)
            .json(&self.build_body(&request))
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Gemini API returned error status {}: {}", status, body);
            return Err(status_error(status, body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| BackendError::InvalidResponse {
                message: format!("JSON parse error: {}", e),
                raw_response: Some(body.clone()),
            })?;

        let content = extract_text(parsed)?;

        let elapsed = start.elapsed();
        info!("Gemini generation completed in {:.2}s", elapsed.as_secs_f64());

        Ok(LLMResponse::text(content, elapsed))
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model_info(&self) -> Option<String> {
        Some(self.config.model.clone())
    }
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .finish()
    }
}

fn status_error(status: StatusCode, body: String) -> BackendError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            BackendError::AuthenticationError { message: body }
        }
        StatusCode::TOO_MANY_REQUESTS => BackendError::RateLimitError { message: body },
        _ => BackendError::ApiError {
            message: body,
            status_code: Some(status.as_u16()),
        },
    }
}

/// Pulls the answer text out of a decoded response, rejecting blocked or empty output
fn extract_text(response: GenerateContentResponse) -> Result<String, BackendError> {
    if let Some(err) = response.error {
        return Err(BackendError::ApiError {
            message: err.message,
            status_code: err.code,
        });
    }

    let candidate = match response.candidates.and_then(|c| c.into_iter().next()) {
        Some(candidate) => candidate,
        None => {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(BackendError::Blocked { reason });
        }
    };

    let text: String = candidate
        .content
        .and_then(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.trim().is_empty() {
        if let Some(reason) = candidate
            .finish_reason
            .filter(|r| BLOCKING_FINISH_REASONS.contains(&r.as_str()))
        {
            return Err(BackendError::Blocked { reason });
        }
        return Err(BackendError::EmptyResponse);
    }

    Ok(text)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    safety_settings: &'a SafetyPolicy,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    prompt_feedback: Option<PromptFeedback>,
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    code: Option<u16>,
}
