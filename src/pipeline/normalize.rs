//! Repairs the flat blockers shape some model answers still use
//!
//! The canonical Blockers answer is `{options: [{blocker, steps}]}`. Older
//! prompt revisions produced `{blockers: ["A", "B"]}` and the model occasionally
//! falls back to it. Such answers get placeholder warm-ups so the client can
//! still render them. Anything else is handed to the client untouched.

use super::types::BlockersResult;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{json, Map, Value};

/// Warm-up attached to every blocker recovered from the legacy shape
pub const LEGACY_WARMUP: [&str; 3] = ["Setup", "Oddech", "Start"];

/// A Blockers answer, classified by shape
///
/// An object carrying `options` is always read as canonical; only when
/// `options` is absent is a `blockers` list tried.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockersReply {
    Canonical(Map<String, Value>),
    /// `blockers` is a list and `options` is missing
    Legacy {
        fields: Map<String, Value>,
        blockers: Vec<Value>,
    },
    /// Neither shape; returned as is
    Unrecognized(Map<String, Value>),
}

impl BlockersReply {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        if fields.contains_key("options") {
            return BlockersReply::Canonical(fields);
        }
        match fields.get("blockers") {
            Some(Value::Array(blockers)) => {
                let blockers = blockers.clone();
                BlockersReply::Legacy { fields, blockers }
            }
            _ => BlockersReply::Unrecognized(fields),
        }
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Object(fields) => Ok(Self::from_map(fields)),
            _ => Err(serde_json::Error::custom("expected a JSON object")),
        }
    }

    /// Converts a legacy answer to the canonical shape; other answers are
    /// returned unchanged.
    pub fn normalize(self) -> BlockersResult {
        match self {
            BlockersReply::Canonical(fields) | BlockersReply::Unrecognized(fields) => {
                BlockersResult(fields)
            }
            BlockersReply::Legacy {
                mut fields,
                blockers,
            } => {
                let [step1, step2, step3] = LEGACY_WARMUP;
                let options = blockers
                    .into_iter()
                    .map(|blocker| {
                        json!({
                            "blocker": blocker,
                            "steps": {"step1": step1, "step2": step2, "step3": step3}
                        })
                    })
                    .collect();
                fields.insert("options".to_string(), Value::Array(options));
                BlockersResult(fields)
            }
        }
    }
}

impl<'de> Deserialize<'de> for BlockersReply {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        BlockersReply::from_value(value).map_err(D::Error::custom)
    }
}
