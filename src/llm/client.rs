use super::error::BackendError;
use super::types::{LLMRequest, LLMResponse};
use async_trait::async_trait;

/// Send a fully rendered prompt, get raw text back.
///
/// Implementations must fail with [`BackendError`] on transport, auth or quota
/// failures and when the backend produced blocked or empty output, so callers
/// never see an `Ok` with nothing in it.
#[async_trait]
pub trait LLMClient: Send + Sync {
    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, BackendError>;

    fn name(&self) -> &str;

    fn model_info(&self) -> Option<String> {
        None
    }
}
