use crate::llm::{LLMClient, LLMRequest};
use crate::pipeline::error::PipelineError;
use crate::pipeline::sanitize::sanitize;
use crate::prompts::PromptTemplate;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

/// Renders the prompt, calls the backend once and parses the sanitized answer.
///
/// No retries: a backend failure or an unparseable answer is returned as is.
pub async fn query_llm<P, T>(llm_client: &dyn LLMClient, prompt: &P) -> Result<T, PipelineError>
where
    P: PromptTemplate,
    T: DeserializeOwned,
{
    let stage = P::STAGE;
    let rendered = prompt.render();
    let span = info_span!("stage", stage, request_id = %Uuid::new_v4());

    let result: Result<T, PipelineError> = async move {
        debug!(prompt_length = rendered.len(), "Rendered prompt");

        let response = llm_client.generate(LLMRequest::new(rendered)).await?;
        info!(
            backend = llm_client.name(),
            latency_ms = response.response_time.as_millis() as u64,
            "Backend responded"
        );

        let cleaned = sanitize(&response.content);
        parse_model_output(stage, &cleaned)
    }
    .instrument(span)
    .await;
    result
}

/// Parses sanitized model text as a JSON object of type `T`
pub fn parse_model_output<T: DeserializeOwned>(
    stage: &'static str,
    cleaned: &str,
) -> Result<T, PipelineError> {
    if cleaned.is_empty() {
        return Err(PipelineError::malformed(stage, "model returned no JSON"));
    }

    let value: Value = serde_json::from_str(cleaned)
        .map_err(|e| PipelineError::malformed(stage, format!("invalid JSON: {}", e)))?;

    if !value.is_object() {
        return Err(PipelineError::malformed(stage, "expected a JSON object"));
    }

    serde_json::from_value(value)
        .map_err(|e| PipelineError::malformed(stage, format!("unexpected shape: {}", e)))
}
