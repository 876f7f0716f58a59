//! Generative backend abstraction layer
//!
//! This module provides a trait-based abstraction over "send a rendered prompt,
//! get raw text back", so the Gemini client and the scripted mock can be used
//! interchangeably by the pipeline.

mod client;
mod error;
pub mod gemini;
mod mock;
pub mod safety;
mod types;

pub use client::LLMClient;
pub use error::BackendError;
pub use gemini::{GeminiClient, GeminiClientConfig};
pub use mock::{MockLLMClient, MockResponse};
pub use safety::{HarmBlockThreshold, HarmCategory, SafetyPolicy, SafetySetting};
pub use types::{LLMRequest, LLMResponse};
