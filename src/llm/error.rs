//! Generative backend errors
//!
//! This module defines BackendError, returned by every [`LLMClient`](super::LLMClient)
//! implementation when a prompt could not be turned into usable text.

use std::fmt;

/// Errors that can occur while calling the generative backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// API request failed with the given message
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// Authentication failed or credentials are missing/invalid
    AuthenticationError { message: String },

    /// Request timed out after the specified duration (in seconds)
    TimeoutError { seconds: u64 },

    /// Backend is not usable with the current configuration (missing API key, ...)
    ConfigurationError { message: String },

    /// Quota or rate limit exhausted
    RateLimitError { message: String },

    /// The backend refused to answer (prompt or candidate blocked)
    Blocked { reason: String },

    /// The backend answered but produced no text
    EmptyResponse,

    /// Response envelope could not be decoded
    InvalidResponse {
        message: String,
        raw_response: Option<String>,
    },

    /// Network-related error
    NetworkError { message: String },

    /// Generic error for other cases
    Other { message: String },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::ApiError {
                message,
                status_code,
            } => {
                if let Some(code) = status_code {
                    write!(f, "API error ({}): {}", code, message)
                } else {
                    write!(f, "API error: {}", message)
                }
            }
            BackendError::AuthenticationError { message } => {
                write!(f, "Authentication failed: {}", message)
            }
            BackendError::TimeoutError { seconds } => {
                write!(f, "Request timed out after {} seconds", seconds)
            }
            BackendError::ConfigurationError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            BackendError::RateLimitError { message } => {
                write!(f, "Rate limit exceeded: {}", message)
            }
            BackendError::Blocked { reason } => {
                write!(f, "Response blocked by backend: {}", reason)
            }
            BackendError::EmptyResponse => write!(f, "Backend returned empty output"),
            BackendError::InvalidResponse { message, .. } => {
                write!(f, "Invalid response from backend: {}", message)
            }
            BackendError::NetworkError { message } => {
                write!(f, "Network error: {}", message)
            }
            BackendError::Other { message } => {
                write!(f, "Error: {}", message)
            }
        }
    }
}

impl std::error::Error for BackendError {}
