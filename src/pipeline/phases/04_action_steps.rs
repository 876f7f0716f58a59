use super::llm_helper::query_llm;
use super::require;
use crate::llm::LLMClient;
use crate::pipeline::error::PipelineError;
use crate::pipeline::types::ActionStepsResult;
use crate::prompts::ActionStepsPrompt;
use serde::Deserialize;

/// Stands in for the warm-up summary when the client did not send one
pub const MISSING_LAST_STEPS: &str = "Brak danych o rozgrzewce.";

/// Body of `POST /generate-action-steps`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionStepsRequest {
    pub task: Option<String>,
    pub last_steps: Option<String>,
}

/// Three nano-steps that build on the warm-up the user just finished.
///
/// The one-minute-per-step limit lives in the prompt only; answers are not
/// checked against it.
pub async fn execute(
    llm_client: &dyn LLMClient,
    request: &ActionStepsRequest,
) -> Result<ActionStepsResult, PipelineError> {
    let task = require(&request.task, "task")?;
    let last_steps = request.last_steps.as_deref().unwrap_or(MISSING_LAST_STEPS);

    let prompt = ActionStepsPrompt { task, last_steps };
    query_llm(llm_client, &prompt).await
}
