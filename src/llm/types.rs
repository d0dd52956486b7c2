use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured reply exactly as the backend returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawReply(Value);

impl RawReply {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for RawReply {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

// ── Yandex Foundation Models wire types ─────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CompletionRequest {
    pub model_uri: String,
    pub completion_options: CompletionOptions,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CompletionOptions {
    pub stream: bool,
    pub temperature: f64,
    /// The API takes the token limit as a decimal string.
    pub max_tokens: String,
}

#[derive(Debug, Serialize)]
pub(super) struct Message {
    pub role: &'static str,
    pub text: String,
}
