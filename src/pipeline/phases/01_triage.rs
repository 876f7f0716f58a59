use super::llm_helper::query_llm;
use super::require;
use crate::llm::LLMClient;
use crate::pipeline::error::PipelineError;
use crate::pipeline::types::TriageResult;
use crate::prompts::{Mode, TriagePrompt};
use serde::Deserialize;

/// Body of `POST /start-conversation`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriageRequest {
    pub task: Option<String>,
    pub mode: Option<String>,
}

/// Classifies the problem and asks one clarifying question.
pub async fn execute(
    llm_client: &dyn LLMClient,
    request: &TriageRequest,
) -> Result<TriageResult, PipelineError> {
    let task = require(&request.task, "task")?;
    let mode = Mode::from_request(request.mode.as_deref());

    let prompt = TriagePrompt {
        task,
        tone_instruction: mode.tone_instruction(),
    };
    query_llm(llm_client, &prompt).await
}
