//! rozbijacz - coaching backend that breaks a stuck task into small steps
//!
//! A person who cannot get started on something types the task into a web page.
//! The backend walks them through four stages, each one a single prompt to a
//! generative model whose JSON answer goes straight back to the page:
//!
//! 1. **Triage** classifies the blockage and asks one clarifying question
//! 2. **Blockers** proposes three likely blockers, each with a warm-up
//! 3. **Final steps** turns the chosen blocker into three nano-steps
//! 4. **Action steps** continues with the three steps after those
//!
//! The server holds no session state. Clients carry earlier answers forward.
//!
//! # Example Usage
//!
//! ```no_run
//! use rozbijacz::{CoachingPipeline, MockLLMClient, MockResponse, TriageRequest};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), rozbijacz::PipelineError> {
//! let client = Arc::new(MockLLMClient::new());
//! client.add_response(MockResponse::text(
//!     r#"{"type":"emotional","validation":"Rozumiem.","question":"Co dokładnie?"}"#,
//! ));
//!
//! let pipeline = CoachingPipeline::new(client);
//! let request = TriageRequest {
//!     task: Some("napisać raport".to_string()),
//!     mode: Some("growth".to_string()),
//! };
//! let result = pipeline.triage(&request).await?;
//! println!("{}", result.question);
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`llm`]: backend client trait, Gemini client and the scripted mock
//! - [`prompts`]: prompt templates and tone selection
//! - [`pipeline`]: stage handlers, output sanitizing and normalization
//! - [`server`]: axum router and the uniform error boundary

pub mod cli;
pub mod config;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod server;
pub mod util;

pub use config::{ConfigError, RozbijaczConfig};
pub use llm::{BackendError, GeminiClient, GeminiClientConfig, LLMClient, MockLLMClient, MockResponse};
pub use pipeline::{
    ActionStepsRequest, BlockersRequest, BlockersResult, CoachingPipeline, ErrorKind,
    FinalStepsRequest, PipelineError, StepTriple, TriageRequest, TriageResult,
};
pub use prompts::Mode;
pub use server::{build_router, serve, AppState};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_rozbijacz() {
        assert_eq!(NAME, "rozbijacz");
    }
}
