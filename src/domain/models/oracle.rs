//! Request types for the generative-AI oracle port.

use serde_json::Value;

/// Transport role in an oracle conversation. The oracle only ever sees
/// user and model turns; stored transcript roles are wider (see `ChatRole`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleRole {
    User,
    Model,
}

impl OracleRole {
    pub fn as_str(self) -> &'static str {
        match self {
            OracleRole::User => "user",
            OracleRole::Model => "model",
        }
    }
}

/// One conversation turn handed to the oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleTurn {
    pub role: OracleRole,
    pub text: String,
}

impl OracleTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: OracleRole::User, text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self { role: OracleRole::Model, text: text.into() }
    }
}

/// A completion request: contents plus optional system instruction and
/// structured-output configuration.
#[derive(Debug, Clone, Default)]
pub struct CompletionRequest {
    /// Model override; the client default applies when unset.
    pub model: Option<String>,

    /// System instruction applied to the whole conversation.
    pub system_instruction: Option<String>,

    /// Ordered conversation turns, oldest first.
    pub contents: Vec<OracleTurn>,

    /// MIME type the oracle must answer with (e.g. "application/json").
    pub response_mime_type: Option<String>,

    /// JSON schema the response must match when structured output is wanted.
    pub response_schema: Option<Value>,
}

impl CompletionRequest {
    /// Single-turn free-text request.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![OracleTurn::user(prompt)],
            ..Self::default()
        }
    }

    /// Single-turn request demanding a JSON response matching `schema`.
    pub fn json(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            contents: vec![OracleTurn::user(prompt)],
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema),
            ..Self::default()
        }
    }

    /// Conversation request under a system instruction.
    pub fn conversation(system_instruction: impl Into<String>, contents: Vec<OracleTurn>) -> Self {
        Self {
            system_instruction: Some(system_instruction.into()),
            contents,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_request_sets_mime_type() {
        let request = CompletionRequest::json("dame un JSON", json!({"type": "OBJECT"}));
        assert_eq!(request.response_mime_type.as_deref(), Some("application/json"));
        assert!(request.response_schema.is_some());
        assert_eq!(request.contents.len(), 1);
    }

    #[test]
    fn test_conversation_keeps_turn_order() {
        let request = CompletionRequest::conversation(
            "eres un coach",
            vec![OracleTurn::user("hola"), OracleTurn::model("¡hola!")],
        );
        assert_eq!(request.contents[0].role, OracleRole::User);
        assert_eq!(request.contents[1].role, OracleRole::Model);
    }
}
