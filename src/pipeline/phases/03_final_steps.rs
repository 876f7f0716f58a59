use super::llm_helper::query_llm;
use super::require;
use crate::llm::LLMClient;
use crate::pipeline::error::PipelineError;
use crate::pipeline::types::FinalStepsResult;
use crate::prompts::FinalStepsPrompt;
use serde::Deserialize;

/// Stands in for the triage answer when the client did not send one
pub const MISSING_USER_ANSWER: &str = "Brak odpowiedzi użytkownika z triażu.";

/// Body of `POST /generate-final-steps`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FinalStepsRequest {
    pub task: Option<String>,
    pub blocker: Option<String>,
    #[serde(rename = "type")]
    pub problem_type: Option<String>,
    pub user_answer: Option<String>,
}

/// Three physical warm-up actions for the blocker the user picked.
pub async fn execute(
    llm_client: &dyn LLMClient,
    request: &FinalStepsRequest,
) -> Result<FinalStepsResult, PipelineError> {
    let task = require(&request.task, "task")?;
    let blocker = require(&request.blocker, "blocker")?;
    let problem_type = require(&request.problem_type, "type")?;
    let user_answer = request.user_answer.as_deref().unwrap_or(MISSING_USER_ANSWER);

    let prompt = FinalStepsPrompt {
        task,
        blocker,
        problem_type,
        user_answer,
    };
    query_llm(llm_client, &prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{MockLLMClient, MockResponse};
    use crate::pipeline::types::StepTriple;
    use serde_json::json;

    fn steps_answer() -> MockResponse {
        MockResponse::json(json!({
            "step1": "Wstań i przeciągnij się",
            "step2": "Otwórz okno",
            "step3": "Połóż laptopa na biurku"
        }))
    }

    #[tokio::test]
    async fn test_user_answer_placeholder() {
        let client = MockLLMClient::new();
        client.add_response(steps_answer());

        let request = FinalStepsRequest {
            task: Some("napisz raport".to_string()),
            blocker: Some("Senność".to_string()),
            problem_type: Some("physical".to_string()),
            user_answer: None,
        };
        let result = execute(&client, &request).await.unwrap();

        assert_eq!(
            result,
            StepTriple::new(
                "Wstań i przeciągnij się",
                "Otwórz okno",
                "Połóż laptopa na biurku"
            )
        );
        let prompt = &client.received_prompts()[0];
        assert!(prompt.contains(MISSING_USER_ANSWER));
        assert!(prompt.contains("Własny Bloker: \"Senność\""));
    }

    #[tokio::test]
    async fn test_user_answer_passed_through() {
        let client = MockLLMClient::new();
        client.add_response(steps_answer());

        let request = FinalStepsRequest {
            task: Some("napisz raport".to_string()),
            blocker: Some("Senność".to_string()),
            problem_type: Some("physical".to_string()),
            user_answer: Some("spałem 4 godziny".to_string()),
        };
        execute(&client, &request).await.unwrap();

        let prompt = &client.received_prompts()[0];
        assert!(prompt.contains("INFO Z TRIAŻU: \"spałem 4 godziny\""));
        assert!(!prompt.contains(MISSING_USER_ANSWER));
    }

    #[tokio::test]
    async fn test_missing_blocker() {
        let client = MockLLMClient::new();
        let request = FinalStepsRequest {
            task: Some("napisz raport".to_string()),
            problem_type: Some("physical".to_string()),
            ..Default::default()
        };

        let err = execute(&client, &request).await.unwrap_err();

        assert!(matches!(err, PipelineError::MissingField { field: "blocker" }));
        assert_eq!(client.call_count(), 0);
    }
}
