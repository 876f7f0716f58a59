// Coaching pipeline stages
//
// Each stage validates its request fields, renders its prompt, calls the
// backend once and parses the sanitized answer. Stages share no state; the
// client carries everything forward between calls.

pub mod llm_helper;

#[path = "01_triage.rs"]
pub mod triage;
#[path = "02_blockers.rs"]
pub mod blockers;
#[path = "03_final_steps.rs"]
pub mod final_steps;
#[path = "04_action_steps.rs"]
pub mod action_steps;

use super::error::PipelineError;

/// Returns the field value or a validation error naming the field
pub(crate) fn require<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, PipelineError> {
    value
        .as_deref()
        .ok_or(PipelineError::MissingField { field })
}
