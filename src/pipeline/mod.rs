//! The four-stage coaching pipeline
//!
//! Triage → Blockers → FinalSteps → ActionSteps. Each call is independent: the
//! client sends back whatever earlier stages returned, the server keeps nothing
//! between requests.

pub mod error;
pub mod normalize;
pub mod phases;
pub mod sanitize;
pub mod types;

pub use error::{ErrorKind, PipelineError};
pub use normalize::{BlockersReply, LEGACY_WARMUP};
pub use phases::action_steps::{ActionStepsRequest, MISSING_LAST_STEPS};
pub use phases::blockers::BlockersRequest;
pub use phases::final_steps::{FinalStepsRequest, MISSING_USER_ANSWER};
pub use phases::triage::TriageRequest;
pub use sanitize::sanitize;
pub use types::{
    ActionStepsResult, BlockersResult, Classification, FinalStepsResult,
    StepTriple, TriageResult,
};

use crate::llm::LLMClient;
use std::sync::Arc;

/// Entry point for running stages against an injected backend
#[derive(Clone)]
pub struct CoachingPipeline {
    llm_client: Arc<dyn LLMClient>,
}

impl CoachingPipeline {
    pub fn new(llm_client: Arc<dyn LLMClient>) -> Self {
        Self { llm_client }
    }

    pub fn backend_name(&self) -> &str {
        self.llm_client.name()
    }

    pub async fn triage(&self, request: &TriageRequest) -> Result<TriageResult, PipelineError> {
        phases::triage::execute(self.llm_client.as_ref(), request).await
    }

    pub async fn blockers(
        &self,
        request: &BlockersRequest,
    ) -> Result<BlockersResult, PipelineError> {
        phases::blockers::execute(self.llm_client.as_ref(), request).await
    }

    pub async fn final_steps(
        &self,
        request: &FinalStepsRequest,
    ) -> Result<FinalStepsResult, PipelineError> {
        phases::final_steps::execute(self.llm_client.as_ref(), request).await
    }

    pub async fn action_steps(
        &self,
        request: &ActionStepsRequest,
    ) -> Result<ActionStepsResult, PipelineError> {
        phases::action_steps::execute(self.llm_client.as_ref(), request).await
    }
}

impl std::fmt::Debug for CoachingPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoachingPipeline")
            .field("backend", &self.llm_client.name())
            .field("model", &self.llm_client.model_info())
            .finish()
    }
}
