//! Application state service.
//!
//! Owns the in-memory [`AppState`] and mirrors every mutation to the
//! injected persistence port. Persistence failures are logged and swallowed:
//! a failed save leaves the in-memory state authoritative, a failed or
//! corrupt load counts as absent. Nothing here is ever fatal.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    keys, AppState, BaselineCheckin, ChatMessage, ChatSurface, DailyCheckin, DiagnosisResult,
    MainChallenge, PracticeSession, ProfileScores,
};
use crate::domain::ports::StateStore;

pub struct StateService {
    state: AppState,
    store: Arc<dyn StateStore>,
}

impl StateService {
    /// Rehydrate the full aggregate from storage. Absent or corrupt entries
    /// silently default to unset.
    pub async fn load(store: Arc<dyn StateStore>) -> Self {
        let mut service = Self {
            state: AppState::default(),
            store,
        };

        service.state.nickname = service.load_entry(keys::NICKNAME).await;
        service.state.has_consented = service.load_entry(keys::CONSENT).await.unwrap_or(false);
        service.state.baseline = service.load_entry(keys::BASELINE_CHECKIN).await;
        service.state.daily_checkins = service
            .load_entry(keys::DAILY_CHECKINS)
            .await
            .unwrap_or_default();
        service.state.passive_ai_opt_in = service
            .load_entry(keys::PASSIVE_AI_OPT_IN)
            .await
            .unwrap_or(false);
        service.state.diagnosis = service.load_entry(keys::DIAGNOSIS).await;
        service.state.practice_history = service
            .load_entry(keys::PRACTICE_HISTORY)
            .await
            .unwrap_or_default();

        debug!(
            onboarding_complete = service.state.onboarding_complete(),
            daily_checkins = service.state.daily_checkins.len(),
            practice_sessions = service.state.practice_history.len(),
            "state rehydrated"
        );
        service
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set the nickname once. Empty after trimming is a validation error.
    pub async fn set_nickname(&mut self, nickname: &str) -> DomainResult<()> {
        let trimmed = nickname.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyNickname);
        }
        self.state.nickname = Some(trimmed.to_string());
        self.persist(keys::NICKNAME, &self.state.nickname.clone()).await;
        Ok(())
    }

    /// Monotonic false-to-true consent flag.
    pub async fn grant_consent(&mut self) {
        self.state.has_consented = true;
        self.persist(keys::CONSENT, &true).await;
    }

    pub async fn record_baseline(&mut self, baseline: BaselineCheckin) {
        self.state.baseline = Some(baseline);
        self.persist(keys::BASELINE_CHECKIN, &self.state.baseline.clone()).await;
    }

    /// Append-only daily checkin sequence.
    pub async fn record_daily_checkin(&mut self, checkin: DailyCheckin) {
        self.state.daily_checkins.push(checkin);
        self.persist(keys::DAILY_CHECKINS, &self.state.daily_checkins.clone()).await;
    }

    pub async fn set_passive_ai_opt_in(&mut self, opted_in: bool) {
        self.state.passive_ai_opt_in = opted_in;
        self.persist(keys::PASSIVE_AI_OPT_IN, &opted_in).await;
    }

    /// Replace the diagnosis wholesale. Partial updates do not exist.
    pub async fn set_diagnosis(&mut self, diagnosis: DiagnosisResult) {
        self.state.diagnosis = Some(diagnosis);
        self.persist(keys::DIAGNOSIS, &self.state.diagnosis.clone()).await;
    }

    pub async fn record_practice_session(&mut self, session: PracticeSession) {
        self.state.practice_history.push(session);
        self.persist(keys::PRACTICE_HISTORY, &self.state.practice_history.clone()).await;
    }

    /// Evaluator shortcut: populate the whole onboarding chain plus a canned
    /// diagnosis and three successful practice sessions in one step, so the
    /// Connect gate opens without touching the oracle.
    pub async fn load_demo(&mut self) {
        self.state.nickname = Some("Demo".to_string());
        self.state.has_consented = true;
        self.state.baseline = Some(BaselineCheckin::new(
            "¿Cómo te sientes en este preciso momento?",
            4,
            "Listo para probar la app.",
        ));
        self.state.diagnosis = Some(demo_diagnosis());
        self.state.practice_history = demo_practice_history();
        self.state.passive_ai_opt_in = true;

        self.persist(keys::NICKNAME, &self.state.nickname.clone()).await;
        self.persist(keys::CONSENT, &true).await;
        self.persist(keys::BASELINE_CHECKIN, &self.state.baseline.clone()).await;
        self.persist(keys::DIAGNOSIS, &self.state.diagnosis.clone()).await;
        self.persist(keys::PRACTICE_HISTORY, &self.state.practice_history.clone()).await;
        self.persist(keys::PASSIVE_AI_OPT_IN, &true).await;
    }

    /// Load the saved transcript for one chat surface, or empty.
    pub async fn load_transcript(&self, surface: ChatSurface, id: &str) -> Vec<ChatMessage> {
        self.load_entry::<Vec<ChatMessage>>(&surface.storage_key(id))
            .await
            .unwrap_or_default()
    }

    pub async fn save_transcript(
        &self,
        surface: ChatSurface,
        id: &str,
        transcript: &[ChatMessage],
    ) {
        self.persist(&surface.storage_key(id), &transcript.to_vec()).await;
    }

    /// Drop a transcript from durable storage (session completed or ended).
    pub async fn discard_transcript(&self, surface: ChatSurface, id: &str) {
        let key = surface.storage_key(id);
        if let Err(err) = self.store.remove(&key).await {
            warn!(key, %err, "failed to discard transcript");
        }
    }

    /// Wipe all stored state and reset the in-memory aggregate.
    pub async fn reset(&mut self) {
        if let Err(err) = self.store.clear().await {
            warn!(%err, "failed to clear state store");
        }
        self.state = AppState::default();
    }

    async fn load_entry<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.load(key).await {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(key, %err, "stored value does not match entity shape, treating as absent");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(key, %err, "failed to load stored value, treating as absent");
                None
            }
        }
    }

    /// Mirror one value to storage. A failed save is a logged no-op; the
    /// in-memory value stays authoritative.
    async fn persist<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(err) => {
                warn!(key, %err, "failed to serialize value, skipping save");
                return;
            }
        };
        if let Err(err) = self.store.save(key, &json).await {
            warn!(key, %err, "failed to save value");
        }
    }
}

/// The canned diagnosis used by the demo shortcut.
pub fn demo_diagnosis() -> DiagnosisResult {
    DiagnosisResult {
        main_challenge: MainChallenge::SocialAnxiety,
        confidence: 0.95,
        traits: vec![
            "reflexivo".to_string(),
            "empático".to_string(),
            "cauteloso".to_string(),
        ],
        insight: "Parece que te tomas tiempo para entender las situaciones sociales, pero a veces la ansiedad puede interponerse. Explorar formas de iniciar conversaciones podría aumentar tu confianza.".to_string(),
        recommended_scenario: "social_anxiety".to_string(),
        scores: ProfileScores {
            social_energy: 60.0,
            social_anxiety: 75.0,
            communication_gaps: 65.0,
            authenticity_boundaries: 85.0,
        },
    }
}

/// Exactly three successful sessions, enough to open the Connect gate.
fn demo_practice_history() -> Vec<PracticeSession> {
    vec![
        PracticeSession::completed("Iniciar una Conversación", "Completó el módulo Rompehielos."),
        PracticeSession::completed(
            "Establecer un Límite",
            "Completó el módulo Rechazar Cortésmente.",
        ),
        PracticeSession::completed(
            "Mantener una Conversación",
            "Completó el módulo Encontrando Conexiones.",
        ),
    ]
}
