//! Intake and check-in services against a scripted oracle: schema
//! validation, rate-limit classification, and deterministic fallbacks.

mod common;

use common::{sample_diagnosis_json, scripted_oracle};
use serde_json::json;
use synk::domain::errors::OracleError;
use synk::domain::models::{BaselineCheckin, MainChallenge, SurveyAnswers, SURVEY};
use synk::services::{CheckinService, DailyQuestion, DiagnosisService};

fn answers() -> SurveyAnswers {
    SURVEY
        .iter()
        .map(|question| (question.id, question.options[0].to_string()))
        .collect()
}

fn baseline() -> BaselineCheckin {
    BaselineCheckin::new("¿Cómo te sientes en este preciso momento?", 4, "bien")
}

#[tokio::test]
async fn test_diagnosis_accepts_schema_conforming_reply() {
    let oracle = scripted_oracle();
    oracle.push_reply(sample_diagnosis_json());
    let service = DiagnosisService::new(oracle.clone());

    let diagnosis = service
        .request_diagnosis("Ana", &baseline(), &answers())
        .await
        .expect("valid diagnosis is accepted");

    assert_eq!(diagnosis.main_challenge, MainChallenge::SocialAnxiety);
    assert_eq!(diagnosis.recommended_scenario, "social_anxiety");

    // The request declared structured output and carried the baseline.
    let request = &oracle.requests()[0];
    assert_eq!(request.response_mime_type.as_deref(), Some("application/json"));
    assert!(request.response_schema.is_some());
    assert!(request.contents[0].text.contains("Puntuación: 4/5"));
}

#[tokio::test]
async fn test_diagnosis_rejects_invalid_json() {
    let oracle = scripted_oracle();
    oracle.push_reply("no soy un objeto JSON");
    let service = DiagnosisService::new(oracle);

    let err = service
        .request_diagnosis("Ana", &baseline(), &answers())
        .await
        .expect_err("malformed reply is rejected");
    assert!(matches!(err, OracleError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_diagnosis_rejects_unknown_scenario_enum() {
    let oracle = scripted_oracle();
    let mut body: serde_json::Value = serde_json::from_str(&sample_diagnosis_json()).unwrap();
    body["recommended_scenario"] = json!("stage_fright");
    oracle.push_reply(body.to_string());
    let service = DiagnosisService::new(oracle);

    let err = service
        .request_diagnosis("Ana", &baseline(), &answers())
        .await
        .expect_err("unknown enum value is rejected");
    assert!(matches!(err, OracleError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_diagnosis_propagates_rate_limit_distinctly() {
    let oracle = scripted_oracle();
    oracle.push_error(OracleError::RateLimited);
    let service = DiagnosisService::new(oracle);

    let err = service
        .request_diagnosis("Ana", &baseline(), &answers())
        .await
        .expect_err("rate limit surfaces");
    assert!(err.is_rate_limited());
}

#[tokio::test]
async fn test_baseline_question_uses_oracle_text() {
    let oracle = scripted_oracle();
    oracle.push_reply("  ¿Qué emoción te acompaña ahora?  ");
    let service = CheckinService::new(oracle);

    let (question, notice) = service.baseline_question().await;
    assert_eq!(question, "¿Qué emoción te acompaña ahora?");
    assert!(notice.is_none());
}

#[tokio::test]
async fn test_baseline_question_falls_back_on_failure() {
    let oracle = scripted_oracle();
    oracle.push_error(OracleError::Network("timeout".to_string()));
    let service = CheckinService::new(oracle);

    let (question, notice) = service.baseline_question().await;
    assert_eq!(question, "Para empezar, ¿cómo te sientes en este preciso momento?");
    assert!(notice.is_some());
}

#[tokio::test]
async fn test_baseline_rate_limit_notice_is_distinct() {
    let generic = {
        let oracle = scripted_oracle();
        oracle.push_error(OracleError::Network("timeout".to_string()));
        CheckinService::new(oracle).baseline_question().await.1.unwrap()
    };
    let rate_limited = {
        let oracle = scripted_oracle();
        oracle.push_error(OracleError::RateLimited);
        CheckinService::new(oracle).baseline_question().await.1.unwrap()
    };
    assert_ne!(generic.message, rate_limited.message);
}

#[tokio::test]
async fn test_daily_question_accepts_valid_reply() {
    let oracle = scripted_oracle();
    oracle.push_reply(
        json!({
            "question": "¿Qué tal amaneciste?",
            "answers": ["Genial", "Bien", "Meh", "Mal"]
        })
        .to_string(),
    );
    let service = CheckinService::new(oracle);

    let (daily, notice) = service.daily_question().await;
    assert_eq!(daily.question, "¿Qué tal amaneciste?");
    assert_eq!(daily.answers.len(), 4);
    assert!(notice.is_none());
}

#[tokio::test]
async fn test_daily_question_falls_back_on_short_answer_set() {
    let oracle = scripted_oracle();
    oracle.push_reply(json!({"question": "¿Qué tal?", "answers": ["Bien", "Mal"]}).to_string());
    let service = CheckinService::new(oracle);

    let (daily, notice) = service.daily_question().await;
    assert_eq!(daily, DailyQuestion::fallback());
    assert!(notice.is_some());
}

#[tokio::test]
async fn test_daily_question_falls_back_on_malformed_reply() {
    let oracle = scripted_oracle();
    oracle.push_reply("no es JSON");
    let service = CheckinService::new(oracle);

    let (daily, notice) = service.daily_question().await;
    assert_eq!(daily, DailyQuestion::fallback());
    assert!(notice.is_some());
}
