//! Shared builders for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use synk::domain::models::{DiagnosisResult, MainChallenge, PracticeSession, ProfileScores};
use synk::infrastructure::oracle::ScriptedOracle;
use synk::infrastructure::storage::InMemoryStateStore;
use synk::services::StateService;

/// A diagnosis matching the reference fixture used across the suites.
pub fn sample_diagnosis() -> DiagnosisResult {
    DiagnosisResult {
        main_challenge: MainChallenge::SocialAnxiety,
        confidence: 0.95,
        traits: vec![
            "reflexivo".to_string(),
            "empático".to_string(),
            "cauteloso".to_string(),
        ],
        insight: "Te tomas tiempo para entender las situaciones sociales.".to_string(),
        recommended_scenario: "social_anxiety".to_string(),
        scores: ProfileScores {
            social_energy: 60.0,
            social_anxiety: 75.0,
            communication_gaps: 65.0,
            authenticity_boundaries: 85.0,
        },
    }
}

/// The same diagnosis as the JSON text an oracle would return.
pub fn sample_diagnosis_json() -> String {
    serde_json::to_string(&sample_diagnosis()).expect("diagnosis serializes")
}

pub fn successful_session() -> PracticeSession {
    PracticeSession::completed("Iniciar una Conversación", "Completó el módulo 'Rompehielos'.")
}

pub fn failed_session(score: u32) -> PracticeSession {
    PracticeSession::new("Iniciar una Conversación", "No completado", score, "sigue intentando")
}

pub async fn fresh_state() -> (StateService, Arc<InMemoryStateStore>) {
    let store = Arc::new(InMemoryStateStore::new());
    let service = StateService::load(store.clone()).await;
    (service, store)
}

pub fn scripted_oracle() -> Arc<ScriptedOracle> {
    Arc::new(ScriptedOracle::new())
}
