//! The in-memory application state aggregate.
//!
//! Every field mirrors one durable storage key (see [`keys`]); the state
//! service owns the mirroring. Gates are always derived from this aggregate,
//! never stored.

use serde::{Deserialize, Serialize};

use super::checkin::{BaselineCheckin, DailyCheckin};
use super::diagnosis::DiagnosisResult;
use super::practice::PracticeSession;

/// Durable storage keys, one JSON value per key. Chat transcripts use
/// per-(surface, id) keys built by `ChatSurface::storage_key`.
pub mod keys {
    pub const NICKNAME: &str = "synk-nickname";
    pub const CONSENT: &str = "synk-consent";
    pub const BASELINE_CHECKIN: &str = "synk-baseline-checkin";
    pub const DAILY_CHECKINS: &str = "synk-daily-checkins";
    pub const PASSIVE_AI_OPT_IN: &str = "synk-passive-ai-opt-in";
    pub const DIAGNOSIS: &str = "synk-diagnosis";
    pub const PRACTICE_HISTORY: &str = "synk-practice-history";
}

/// Aggregate of all durable entities, rehydrated at process start.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub nickname: Option<String>,
    pub has_consented: bool,
    pub baseline: Option<BaselineCheckin>,
    pub daily_checkins: Vec<DailyCheckin>,
    pub passive_ai_opt_in: bool,
    pub diagnosis: Option<DiagnosisResult>,
    pub practice_history: Vec<PracticeSession>,
}

impl AppState {
    /// True once login, nickname, consent and baseline are all present.
    pub fn onboarding_complete(&self) -> bool {
        self.nickname.is_some() && self.has_consented && self.baseline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_empty() {
        let state = AppState::default();
        assert!(state.nickname.is_none());
        assert!(!state.has_consented);
        assert!(state.daily_checkins.is_empty());
        assert!(!state.onboarding_complete());
    }

    #[test]
    fn test_onboarding_complete_requires_all_three() {
        let mut state = AppState {
            nickname: Some("Ana".to_string()),
            has_consented: true,
            ..AppState::default()
        };
        assert!(!state.onboarding_complete());

        state.baseline = Some(BaselineCheckin::new("¿Cómo estás?", 3, ""));
        assert!(state.onboarding_complete());
    }
}
