//! Domain errors for the Synk companion.

use thiserror::Error;

/// Domain-level errors raised by user actions and state transitions.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("El apodo no puede estar vacío")]
    EmptyNickname,

    #[error("Credenciales incorrectas. Por favor, inténtalo de nuevo.")]
    InvalidCredentials,

    #[error("Pregunta sin responder: {0}")]
    UnansweredQuestion(usize),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Errors surfaced by the durable key/value store.
///
/// Callers treat a failed load as "absent" and a failed save as a no-op;
/// these variants exist so the state service can log what actually happened.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Corrupt value under key {key}: {reason}")]
    CorruptValue { key: String, reason: String },
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::QueryFailed(err.to_string())
    }
}

/// Errors surfaced by the generative-AI oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Quota or rate limit exceeded (HTTP 429 or a RESOURCE_EXHAUSTED marker).
    /// Gets a distinct user-facing message from generic failure.
    #[error("Rate limit exceeded - too many requests to the AI service")]
    RateLimited,

    #[error("Missing API key - set oracle.api_key or GEMINI_API_KEY")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Oracle returned an error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Oracle returned no usable text")]
    EmptyResponse,

    #[error("Malformed oracle response: {0}")]
    MalformedResponse(String),
}

impl OracleError {
    /// True for the quota/rate-limit failure that warrants its own message.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, OracleError::RateLimited)
    }

    /// True if the user may simply try the same action again.
    ///
    /// Everything except a missing API key is retryable: malformed and empty
    /// responses are treated the same as transient transport failures.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, OracleError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_classification() {
        assert!(OracleError::RateLimited.is_rate_limited());
        assert!(OracleError::RateLimited.is_retryable());
        assert!(!OracleError::EmptyResponse.is_rate_limited());
    }

    #[test]
    fn test_malformed_is_retryable() {
        assert!(OracleError::MalformedResponse("bad shape".to_string()).is_retryable());
        assert!(!OracleError::MissingApiKey.is_retryable());
    }
}
