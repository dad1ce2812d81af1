//! Chat transcripts and the surfaces that own them.

use serde::{Deserialize, Serialize};

use super::oracle::OracleRole;

/// Which chat feature a transcript belongs to. Each (surface, id) pair owns
/// an independent durable transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSurface {
    /// Coached practice scenarios (Práctica tab).
    Practicar,
    /// Free conversation with a chatbot profile (Conectar tab).
    Conectar,
}

impl ChatSurface {
    /// Durable storage key for the transcript of `id` on this surface.
    pub fn storage_key(self, id: &str) -> String {
        match self {
            ChatSurface::Practicar => format!("synk-chat-practicar-{id}"),
            ChatSurface::Conectar => format!("synk-chat-conectar-{id}"),
        }
    }
}

/// Stored role of a transcript entry.
///
/// `Error` marks an entry that records an oracle failure shown to the user.
/// It is preserved as-is in storage; only replay context folds it away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
    Error,
}

/// One entry in a chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Model, content: content.into() }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Error, content: content.into() }
    }

    /// Transport role used when replaying a saved transcript as oracle
    /// context. Prior `error` entries are fed back as `model` turns so the
    /// rebuilt conversation stays alternating; the stored role is untouched.
    pub fn to_oracle_role(&self) -> OracleRole {
        match self.role {
            ChatRole::User => OracleRole::User,
            ChatRole::Model | ChatRole::Error => OracleRole::Model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_are_disjoint_per_surface() {
        assert_eq!(
            ChatSurface::Practicar.storage_key("social_anxiety"),
            "synk-chat-practicar-social_anxiety"
        );
        assert_eq!(
            ChatSurface::Conectar.storage_key("sofia"),
            "synk-chat-conectar-sofia"
        );
    }

    #[test]
    fn test_error_folds_to_model_for_replay() {
        assert_eq!(ChatMessage::error("falló").to_oracle_role(), OracleRole::Model);
        assert_eq!(ChatMessage::user("hola").to_oracle_role(), OracleRole::User);
    }

    #[test]
    fn test_role_serialization() {
        let msg = ChatMessage::error("oops");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "error");
        let back: ChatMessage = serde_json::from_value(json).unwrap();
        assert_eq!(back.role, ChatRole::Error);
    }
}
