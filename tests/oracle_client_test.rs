//! Gemini client tests against a mock HTTP server.

use mockito::Matcher;
use serde_json::json;
use synk::domain::errors::OracleError;
use synk::domain::models::{CompletionRequest, OracleConfig, OracleTurn};
use synk::domain::ports::Oracle;
use synk::infrastructure::oracle::GeminiClient;

fn client_for(server: &mockito::ServerGuard) -> GeminiClient {
    GeminiClient::new(OracleConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.url(),
        model: "gemini-2.5-flash".to_string(),
        timeout_secs: 5,
    })
    .expect("client builds")
}

fn reply_body(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_successful_completion_returns_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .with_status(200)
        .with_body(reply_body("¿Qué te hizo sonreír hoy?"))
        .create_async()
        .await;

    let client = client_for(&server);
    let text = client
        .complete(CompletionRequest::text("genera una pregunta"))
        .await
        .expect("request succeeds");

    assert_eq!(text, "¿Qué te hizo sonreír hoy?");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_structured_request_declares_schema_and_system_instruction() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })),
            Matcher::PartialJson(json!({
                "contents": [{ "role": "user", "parts": [{ "text": "dame un JSON" }] }]
            })),
        ]))
        .with_status(200)
        .with_body(reply_body("{\"question\":\"¿Qué tal?\",\"answers\":[\"Bien\",\"Normal\",\"Mal\"]}"))
        .create_async()
        .await;

    let client = client_for(&server);
    let request = CompletionRequest::json("dame un JSON", json!({"type": "OBJECT"}));
    client.complete(request).await.expect("request succeeds");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_conversation_request_carries_roles() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .match_body(Matcher::PartialJson(json!({
            "systemInstruction": { "parts": [{ "text": "eres un coach" }] },
            "contents": [
                { "role": "model", "parts": [{ "text": "¡Hola!" }] },
                { "role": "user", "parts": [{ "text": "Hola" }] }
            ]
        })))
        .with_status(200)
        .with_body(reply_body("*¿Cómo estás?*"))
        .create_async()
        .await;

    let client = client_for(&server);
    let request = CompletionRequest::conversation(
        "eres un coach",
        vec![OracleTurn::model("¡Hola!"), OracleTurn::user("Hola")],
    );
    client.complete(request).await.expect("request succeeds");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_429_maps_to_rate_limited() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(429)
        .with_body(json!({"error": {"code": 429, "message": "quota"}}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .complete(CompletionRequest::text("hola"))
        .await
        .expect_err("request fails");
    assert!(matches!(err, OracleError::RateLimited));
    assert!(err.is_rate_limited());
}

#[tokio::test]
async fn test_resource_exhausted_marker_maps_to_rate_limited() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(403)
        .with_body(
            json!({"error": {"code": 403, "status": "RESOURCE_EXHAUSTED", "message": "quota exceeded"}})
                .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .complete(CompletionRequest::text("hola"))
        .await
        .expect_err("request fails");
    assert!(matches!(err, OracleError::RateLimited));
}

#[tokio::test]
async fn test_generic_api_error_keeps_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .complete(CompletionRequest::text("hola"))
        .await
        .expect_err("request fails");
    match err {
        OracleError::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_candidates_map_to_empty_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(200)
        .with_body(json!({"candidates": []}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .complete(CompletionRequest::text("hola"))
        .await
        .expect_err("request fails");
    assert!(matches!(err, OracleError::EmptyResponse));
}

#[tokio::test]
async fn test_model_override_changes_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.0-flash:generateContent")
        .with_status(200)
        .with_body(reply_body("hola"))
        .create_async()
        .await;

    let client = client_for(&server);
    let request = CompletionRequest {
        model: Some("gemini-2.0-flash".to_string()),
        ..CompletionRequest::text("hola")
    };
    client.complete(request).await.expect("request succeeds");
    mock.assert_async().await;
}
