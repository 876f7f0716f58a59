//! Backend communication types
//!
//! This module defines the types used for prompt/response communication,
//! independent of any specific provider implementation.

use std::time::Duration;

/// A fully rendered prompt ready to be sent to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct LLMRequest {
    /// Rendered prompt text, sent as a single user turn
    pub prompt: String,
}

impl LLMRequest {
    /// Creates a new request for the given prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Raw text returned by the backend
#[derive(Debug, Clone)]
pub struct LLMResponse {
    /// Text content of the response, unsanitized
    pub content: String,
    /// Time taken for the request
    pub response_time: Duration,
}

impl LLMResponse {
    /// Creates a new response with just content
    pub fn text(content: impl Into<String>, response_time: Duration) -> Self {
        Self {
            content: content.into(),
            response_time,
        }
    }
}
