//! State service integration tests: rehydration, persistence mirroring,
//! corruption tolerance, the demo shortcut, and reset.

mod common;

use chrono::Local;
use common::{failed_session, fresh_state, sample_diagnosis, successful_session};
use serde_json::json;
use synk::domain::models::{keys, BaselineCheckin, ChatMessage, ChatSurface, DailyCheckin};
use synk::services::{gates, GateSnapshot, StateService};

#[tokio::test]
async fn test_mutations_survive_rehydration() {
    let (mut service, store) = fresh_state().await;

    service.set_nickname("  Ana  ").await.expect("nickname is valid");
    service.grant_consent().await;
    service
        .record_baseline(BaselineCheckin::new("¿Cómo te sientes?", 4, "bien"))
        .await;
    service
        .record_daily_checkin(DailyCheckin::new("¿Qué tal hoy?", "Bien", ""))
        .await;
    service.set_diagnosis(sample_diagnosis()).await;
    service.record_practice_session(successful_session()).await;
    service.set_passive_ai_opt_in(true).await;

    // Fresh service over the same store sees identical state.
    let rehydrated = StateService::load(store).await;
    let state = rehydrated.state();
    assert_eq!(state.nickname.as_deref(), Some("Ana"));
    assert!(state.has_consented);
    assert_eq!(state.baseline.as_ref().unwrap().score, 4);
    assert_eq!(state.daily_checkins.len(), 1);
    assert_eq!(state.diagnosis.as_ref().unwrap(), &sample_diagnosis());
    assert_eq!(state.practice_history.len(), 1);
    assert!(state.passive_ai_opt_in);
}

#[tokio::test]
async fn test_empty_nickname_is_rejected() {
    let (mut service, _store) = fresh_state().await;
    assert!(service.set_nickname("   ").await.is_err());
    assert!(service.state().nickname.is_none());
}

#[tokio::test]
async fn test_corrupt_entry_defaults_to_unset() {
    let (_, store) = fresh_state().await;
    store.seed(keys::DIAGNOSIS, json!("definitely not a diagnosis")).await;
    store.seed(keys::NICKNAME, json!("Ana")).await;

    let service = StateService::load(store).await;
    assert!(service.state().diagnosis.is_none());
    assert_eq!(service.state().nickname.as_deref(), Some("Ana"));
}

#[tokio::test]
async fn test_failed_save_is_a_no_op_and_memory_stays_authoritative() {
    let (mut service, store) = fresh_state().await;
    store.fail_saves(true);

    service.set_nickname("Ana").await.expect("validation still passes");
    assert_eq!(service.state().nickname.as_deref(), Some("Ana"));
    assert!(store.is_empty().await);

    // Recovered store picks up subsequent writes.
    store.fail_saves(false);
    service.grant_consent().await;
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_demo_load_satisfies_connect_unlock_atomically() {
    let (mut service, store) = fresh_state().await;
    service.load_demo().await;

    let state = service.state();
    assert_eq!(state.nickname.as_deref(), Some("Demo"));
    assert!(state.has_consented);
    assert!(state.baseline.is_some());
    assert!(state.diagnosis.is_some());
    assert_eq!(gates::successful_practices(&state.practice_history), 3);
    assert!(gates::connect_unlocked(state.diagnosis.as_ref(), &state.practice_history));

    // And the whole chain is durable, not just in memory.
    let rehydrated = StateService::load(store).await;
    let snapshot = GateSnapshot::derive(rehydrated.state(), Local::now().date_naive());
    assert!(snapshot.connect_unlocked);
    assert_eq!(snapshot.compatibility_score, 70);
}

#[tokio::test]
async fn test_successful_practices_monotonic_under_appends() {
    let (mut service, _store) = fresh_state().await;
    let mut last = 0;
    for score in [100, 20, 100, 99, 100] {
        let session = if score == 100 {
            successful_session()
        } else {
            failed_session(score)
        };
        service.record_practice_session(session).await;
        let count = gates::successful_practices(&service.state().practice_history);
        assert!(count >= last);
        last = count;
    }
    assert_eq!(last, 3);
}

#[tokio::test]
async fn test_transcript_roundtrip_preserves_order_and_roles() {
    let (service, store) = fresh_state().await;
    let transcript = vec![
        ChatMessage::model("¡Hola! Soy tu coach."),
        ChatMessage::user("Hola, ¿cómo estás?"),
        ChatMessage::error("Se ha excedido el límite de solicitudes a la IA."),
        ChatMessage::user("¿Seguimos?"),
    ];
    service
        .save_transcript(ChatSurface::Practicar, "general", &transcript)
        .await;

    // Discard in-memory state entirely; reload from storage.
    drop(service);
    let reloaded = StateService::load(store).await;
    let restored = reloaded.load_transcript(ChatSurface::Practicar, "general").await;
    assert_eq!(restored, transcript);
}

#[tokio::test]
async fn test_transcripts_are_independent_per_key() {
    let (service, _store) = fresh_state().await;
    service
        .save_transcript(ChatSurface::Practicar, "general", &[ChatMessage::model("a")])
        .await;
    service
        .save_transcript(ChatSurface::Conectar, "sofia", &[ChatMessage::model("b")])
        .await;

    service.discard_transcript(ChatSurface::Practicar, "general").await;
    assert!(service
        .load_transcript(ChatSurface::Practicar, "general")
        .await
        .is_empty());
    assert_eq!(
        service.load_transcript(ChatSurface::Conectar, "sofia").await.len(),
        1
    );
}

#[tokio::test]
async fn test_sqlite_store_survives_process_restart() {
    use std::sync::Arc;
    use synk::infrastructure::storage::{create_pool, SqliteStateStore};

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir
        .path()
        .join("nested/synk.db")
        .to_string_lossy()
        .into_owned();

    {
        let pool = create_pool(&path, 2).await.expect("failed to open store");
        let mut service = StateService::load(Arc::new(SqliteStateStore::new(pool.clone()))).await;
        service.load_demo().await;
        pool.close().await;
    }

    // A second "process" over the same file sees the full demo state.
    let pool = create_pool(&path, 2).await.expect("failed to reopen store");
    let service = StateService::load(Arc::new(SqliteStateStore::new(pool))).await;
    let state = service.state();
    assert_eq!(state.nickname.as_deref(), Some("Demo"));
    assert!(gates::connect_unlocked(state.diagnosis.as_ref(), &state.practice_history));
}

#[tokio::test]
async fn test_reset_clears_everything() {
    let (mut service, store) = fresh_state().await;
    service.load_demo().await;
    assert!(store.len().await > 0);

    service.reset().await;
    assert!(store.is_empty().await);
    assert!(service.state().nickname.is_none());
    assert!(service.state().diagnosis.is_none());
}
