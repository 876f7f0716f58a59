use super::llm_helper::query_llm;
use super::require;
use crate::llm::LLMClient;
use crate::pipeline::error::PipelineError;
use crate::pipeline::normalize::BlockersReply;
use crate::pipeline::types::BlockersResult;
use crate::prompts::BlockersPrompt;
use serde::Deserialize;
use tracing::warn;

/// Body of `POST /get-blockers`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockersRequest {
    pub task: Option<String>,
    pub user_answer: Option<String>,
    #[serde(rename = "type")]
    pub problem_type: Option<String>,
}

/// Number of blockers the prompt asks for; not enforced on the answer
pub const EXPECTED_OPTIONS: usize = 3;

/// Identifies obstacles and a warm-up for each.
///
/// Legacy answers are converted to the canonical shape; any other object is
/// returned exactly as the model produced it.
pub async fn execute(
    llm_client: &dyn LLMClient,
    request: &BlockersRequest,
) -> Result<BlockersResult, PipelineError> {
    let task = require(&request.task, "task")?;
    let user_answer = require(&request.user_answer, "user_answer")?;
    let problem_type = require(&request.problem_type, "type")?;

    let prompt = BlockersPrompt {
        problem_type,
        task,
        user_answer,
    };
    let reply: BlockersReply = query_llm(llm_client, &prompt).await?;

    match &reply {
        BlockersReply::Legacy { .. } => {
            warn!("Model answered with legacy blockers list, synthesizing warm-ups")
        }
        BlockersReply::Unrecognized(fields) => {
            let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
            warn!(?keys, "Blockers answer has neither options nor blockers, passing it through");
        }
        BlockersReply::Canonical(_) => {}
    }
    let recognized = !matches!(reply, BlockersReply::Unrecognized(_));
    let result = reply.normalize();

    if recognized && result.options().len() != EXPECTED_OPTIONS {
        warn!(
            "Expected {} blocker options, model returned {}",
            EXPECTED_OPTIONS,
            result.options().len()
        );
    }

    Ok(result)
}
