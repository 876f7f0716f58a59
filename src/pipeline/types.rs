//! Structured stage results returned to the client

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Whether the user is stuck for physical or emotional reasons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Physical,
    Emotional,
}

/// Triage stage output: `{type, validation, question}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    #[serde(rename = "type")]
    pub classification: Classification,
    /// Short reassurance sentence
    pub validation: String,
    /// Single clarifying question for the user
    pub question: String,
}

/// Three ordered steps: `{step1, step2, step3}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTriple {
    pub step1: String,
    pub step2: String,
    pub step3: String,
}

impl StepTriple {
    pub fn new(step1: impl Into<String>, step2: impl Into<String>, step3: impl Into<String>) -> Self {
        Self {
            step1: step1.into(),
            step2: step2.into(),
            step3: step3.into(),
        }
    }
}

/// Three physical warm-up actions for the chosen blocker
pub type FinalStepsResult = StepTriple;

/// Three nano-steps, each meant to take at most a minute
pub type ActionStepsResult = StepTriple;

/// Blockers stage output
///
/// The canonical shape is `{options: [{blocker, steps}]}`. The object is kept
/// exactly as the model produced it, so keys it adds reach the client intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockersResult(pub Map<String, Value>);

impl BlockersResult {
    /// Blocker options, or an empty slice when `options` is absent or not a list
    pub fn options(&self) -> &[Value] {
        self.0
            .get("options")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}
