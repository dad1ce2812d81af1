//! Router precedence over rehydrated state: the ordered predicate table,
//! not storage contents, decides the visible page.

mod common;

use common::{fresh_state, sample_diagnosis};
use serde_json::json;
use synk::domain::models::{keys, BaselineCheckin};
use synk::services::{resolve_page, Page, StateService};

#[tokio::test]
async fn test_unauthenticated_wins_over_everything_in_storage() {
    let (mut service, _store) = fresh_state().await;
    service.load_demo().await;
    assert_eq!(resolve_page(false, service.state()), Page::Login);
}

#[tokio::test]
async fn test_precedence_is_storage_order_independent() {
    // Seed storage "out of order": baseline and diagnosis exist, but consent
    // was never granted. The router must still stop at Consent.
    let (_, store) = fresh_state().await;
    store.seed(keys::NICKNAME, json!("Ana")).await;
    store
        .seed(
            keys::BASELINE_CHECKIN,
            serde_json::to_value(BaselineCheckin::new("q", 3, "")).unwrap(),
        )
        .await;
    store
        .seed(keys::DIAGNOSIS, serde_json::to_value(sample_diagnosis()).unwrap())
        .await;

    let service = StateService::load(store).await;
    assert_eq!(resolve_page(true, service.state()), Page::Consent);
}

#[tokio::test]
async fn test_onboarding_steps_resolve_in_order() {
    let (mut service, _store) = fresh_state().await;
    assert_eq!(resolve_page(true, service.state()), Page::Nickname);

    service.set_nickname("Ana").await.unwrap();
    assert_eq!(resolve_page(true, service.state()), Page::Consent);

    service.grant_consent().await;
    assert_eq!(resolve_page(true, service.state()), Page::Baseline);

    service
        .record_baseline(BaselineCheckin::new("q", 3, ""))
        .await;
    assert_eq!(resolve_page(true, service.state()), Page::Main);
}

#[tokio::test]
async fn test_demo_load_jumps_straight_to_main() {
    let (mut service, _store) = fresh_state().await;
    assert_eq!(resolve_page(true, service.state()), Page::Nickname);

    service.load_demo().await;
    assert_eq!(resolve_page(true, service.state()), Page::Main);
}
