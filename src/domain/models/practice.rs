//! Practice session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A session counts as successful only at this exact score.
pub const SUCCESS_SCORE: u32 = 100;

/// Record of one completed practice scenario, appended to an ordered history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeSession {
    /// Scenario title the user practiced (e.g. "Iniciar una Conversación").
    pub prompt: String,

    /// Completion summary (e.g. "Completó el módulo 'Rompehielos'.").
    pub answer: String,

    pub score: u32,

    pub feedback: String,

    pub timestamp: DateTime<Utc>,
}

impl PracticeSession {
    pub fn new(
        prompt: impl Into<String>,
        answer: impl Into<String>,
        score: u32,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
            score,
            feedback: feedback.into(),
            timestamp: Utc::now(),
        }
    }

    /// A completed scenario recorded at the fixed success score.
    pub fn completed(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::new(prompt, answer, SUCCESS_SCORE, "Sesión completa!")
    }

    pub fn is_successful(&self) -> bool {
        self.score == SUCCESS_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_is_successful() {
        let session = PracticeSession::completed("Iniciar una Conversación", "Completó el módulo.");
        assert!(session.is_successful());
        assert_eq!(session.feedback, "Sesión completa!");
    }

    #[test]
    fn test_partial_score_is_not_successful() {
        let session = PracticeSession::new("p", "a", 99, "casi");
        assert!(!session.is_successful());
    }
}
