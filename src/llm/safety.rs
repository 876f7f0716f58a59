//! Content-safety policy sent with every generation request
//!
//! Coaching language about anxiety, exhaustion or resistance regularly trips the
//! provider's default harm filters. The service therefore runs with all four
//! configurable categories set to `BLOCK_NONE`. Narrowing or widening that set
//! changes what users can talk about, so it is spelled out here in one place.

use serde::Serialize;

/// Harm categories understood by the Generative Language API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

impl HarmCategory {
    pub const ALL: [HarmCategory; 4] = [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ];
}

/// Blocking threshold; the service only ever disables blocking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockNone,
}

/// One `safetySettings` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// Immutable set of safety settings, compiled once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafetyPolicy {
    settings: Vec<SafetySetting>,
}

impl SafetyPolicy {
    /// Disables filtering for every configurable harm category
    pub fn unfiltered() -> Self {
        Self {
            settings: HarmCategory::ALL
                .iter()
                .map(|&category| SafetySetting {
                    category,
                    threshold: HarmBlockThreshold::BlockNone,
                })
                .collect(),
        }
    }

    pub fn settings(&self) -> &[SafetySetting] {
        &self.settings
    }
}

impl Default for SafetyPolicy {
    fn default() -> Self {
        Self::unfiltered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unfiltered_covers_all_four_categories() {
        let policy = SafetyPolicy::unfiltered();
        assert_eq!(policy.settings().len(), 4);
        for category in HarmCategory::ALL {
            assert!(policy
                .settings()
                .iter()
                .any(|s| s.category == category && s.threshold == HarmBlockThreshold::BlockNone));
        }
    }

    #[test]
    fn test_wire_format() {
        let value = serde_json::to_value(SafetyPolicy::unfiltered()).unwrap();
        assert_eq!(
            value,
            json!([
                {"category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_NONE"},
                {"category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_NONE"},
                {"category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": "BLOCK_NONE"},
                {"category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_NONE"},
            ])
        );
    }

    #[test]
    fn test_default_is_unfiltered() {
        assert_eq!(SafetyPolicy::default(), SafetyPolicy::unfiltered());
    }
}
