//! Response types for a single answered question.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Build a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Build an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// One step of the retrieval/answer pipeline trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtStep {
    pub title: String,
    /// Free-form step payload: a prompt, a query string, result listings.
    #[serde(default)]
    pub description: Value,
    /// Scalar badges shown alongside the step (model, top, filter, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<BTreeMap<String, Value>>,
}

impl ThoughtStep {
    pub fn new(title: impl Into<String>, description: Value) -> Self {
        Self {
            title: title.into(),
            description,
            props: None,
        }
    }

    pub fn with_props(mut self, props: BTreeMap<String, Value>) -> Self {
        self.props = Some(props);
        self
    }
}

/// Supporting content snippets, each `"<source>: <content>"`.
///
/// The backend emits `{"text": [...]}` today; older deployments sent a
/// bare list, so decoding accepts both.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataPoints {
    pub text: Vec<String>,
}

impl<'de> Deserialize<'de> for DataPoints {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Tagged {
                #[serde(default)]
                text: Vec<String>,
            },
            Bare(Vec<String>),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Tagged { text } | Wire::Bare(text) => DataPoints { text },
        })
    }
}

/// Retrieval context attached to an assistant response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseContext {
    #[serde(default)]
    pub data_points: DataPoints,
    #[serde(default)]
    pub thoughts: Vec<ThoughtStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followup_questions: Option<Vec<String>>,
}

/// A complete answer from the chat backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: ChatMessage,
    #[serde(default)]
    pub context: ResponseContext,
    /// Opaque server-side session token, passed back verbatim.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub session_state: Value,
}

impl ChatResponse {
    /// Build a bare assistant response with no retrieval context.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            message: ChatMessage::assistant(content),
            context: ResponseContext::default(),
            session_state: Value::Null,
        }
    }

    /// The answer body text.
    pub fn content(&self) -> &str {
        &self.message.content
    }

    /// Whether a retrieval trace is attached.
    pub fn has_thoughts(&self) -> bool {
        !self.context.thoughts.is_empty()
    }

    /// Whether supporting content snippets are attached.
    pub fn has_data_points(&self) -> bool {
        !self.context.data_points.text.is_empty()
    }

    /// Follow-up questions, empty when the backend sent none.
    pub fn followup_questions(&self) -> &[String] {
        self.context.followup_questions.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_backend_response() {
        let raw = json!({
            "message": {"role": "assistant", "content": "Sharks live in the ocean [facts.pdf]."},
            "context": {
                "data_points": {"text": ["facts.pdf: Sharks are fish."]},
                "thoughts": [
                    {
                        "title": "Prompt to generate search query",
                        "description": ["rewrite the question"],
                        "props": {"model": "gpt", "top": 3}
                    },
                    {
                        "title": "Search results",
                        "description": [{"id": "facts.pdf"}]
                    }
                ],
                "followup_questions": ["What do sharks eat?"]
            },
            "session_state": {"token": "abc"}
        });

        let response: ChatResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.message.role, Role::Assistant);
        assert!(response.content().starts_with("Sharks"));
        assert!(response.has_thoughts());
        assert!(response.has_data_points());
        assert_eq!(response.followup_questions(), ["What do sharks eat?"]);
        assert_eq!(response.context.thoughts.len(), 2);
        assert!(response.context.thoughts[1].props.is_none());
        assert_eq!(response.session_state["token"], "abc");
    }

    #[test]
    fn test_decode_legacy_bare_data_points() {
        let raw = json!({
            "message": {"role": "assistant", "content": "Hi"},
            "context": {"data_points": ["a.txt: alpha", "b.txt: beta"]}
        });

        let response: ChatResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.context.data_points.text.len(), 2);
        assert_eq!(response.context.data_points.text[0], "a.txt: alpha");
    }

    #[test]
    fn test_decode_missing_context() {
        let raw = json!({
            "message": {"role": "assistant", "content": "Hi"}
        });

        let response: ChatResponse = serde_json::from_value(raw).unwrap();
        assert!(!response.has_thoughts());
        assert!(!response.has_data_points());
        assert!(response.followup_questions().is_empty());
        assert!(response.session_state.is_null());
    }

    #[test]
    fn test_bare_response_roundtrip() {
        let response = ChatResponse::from_content("Plain answer");
        let encoded = serde_json::to_value(&response).unwrap();
        // Empty context serializes, absent optionals do not
        assert!(encoded.get("session_state").is_none());
        assert!(encoded["context"].get("followup_questions").is_none());

        let decoded: ChatResponse = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn test_role_wire_casing() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        let role: Role = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(role, Role::Assistant);
    }
}
