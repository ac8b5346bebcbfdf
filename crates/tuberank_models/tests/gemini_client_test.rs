//! Tests for the Gemini client against a local mock server.

use serde_json::{Value, json};
use tuberank_core::{GenerationRequest, VideoCategory};
use tuberank_error::GenerationErrorKind;
use tuberank_interface::SeoGenerator;
use tuberank_models::{GeminiClient, GeminiConfig};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn result_payload() -> Value {
    json!({
        "titles": ["عنوان 1", "عنوان 2", "عنوان 3", "عنوان 4", "عنوان 5"],
        "description": "وصف الفيديو\nسؤال الحلقة: ما رأيك؟",
        "keywords": ["هواتف", "ألعاب", "مراجعة"],
        "hashtags": ["#هواتف", "#ألعاب", "#تقنية"],
        "category": "Science & Technology",
        "algorithmStrategy": "ركز على نسبة المشاهدة",
        "thumbnailIdeas": [
            {"description": "وجه مندهش", "text": "أقوى هاتف!"},
            {"description": "مقارنة هاتفين", "text": "مين الأفضل؟"},
            {"description": "هاتف يحترق", "text": "لا تشتريه"}
        ]
    })
}

fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 20, "totalTokenCount": 30}
    })
}

fn client_for(server: &MockServer, api_key: Option<&str>) -> GeminiClient {
    let config = GeminiConfig::new(api_key.map(str::to_string))
        .with_base_url(format!("{}/v1beta", server.uri()));
    GeminiClient::new(config).expect("Failed to build client")
}

fn sample_request() -> GenerationRequest {
    GenerationRequest::new("أفضل هواتف للألعاب", "", VideoCategory::Tech)
}

#[tokio::test]
async fn test_decodes_structured_reply() {
    let server = MockServer::start().await;
    let payload = result_payload();

    Mock::given(method("POST"))
        .and(path(ENDPOINT_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": {"responseMimeType": "application/json"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(&payload.to_string())))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-key"));
    let result = client.generate(&sample_request()).await.unwrap();

    assert_eq!(result.titles.len(), 5);
    assert_eq!(result.thumbnail_ideas.len(), 3);
    assert!(result.hashtags.iter().all(|h| h.starts_with('#')));
    assert_eq!(result.category, "Science & Technology");
    assert_eq!(serde_json::to_value(&result).unwrap(), payload);
}

#[tokio::test]
async fn test_request_embeds_prompt_and_schema() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_reply(&result_payload().to_string())),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-key"));
    client.generate(&sample_request()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();

    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("أفضل هواتف للألعاب"));
    assert!(prompt.contains("تقنية واختراعات"));

    let config = &body["generationConfig"];
    assert!((config["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert_eq!(config["responseSchema"]["required"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_missing_key_still_sends_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.generate(&sample_request()).await.unwrap_err();

    match err.kind() {
        GenerationErrorKind::Api { status, message } => {
            assert_eq!(*status, 403);
            assert!(message.contains("API key"));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_service_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-key"));
    let err = client.generate(&sample_request()).await.unwrap_err();

    assert!(err.kind().is_service_failure());
}

#[tokio::test]
async fn test_empty_reply_is_distinct_from_decode_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-key"));
    let err = client.generate(&sample_request()).await.unwrap_err();

    assert_eq!(err.kind(), &GenerationErrorKind::EmptyResponse);
    assert!(!err.kind().is_decode_failure());
}

#[tokio::test]
async fn test_malformed_reply_is_decode_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("not json at all")))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-key"));
    let err = client.generate(&sample_request()).await.unwrap_err();

    assert!(err.kind().is_decode_failure());
}

#[tokio::test]
async fn test_unreachable_host_is_http_failure() {
    let config = GeminiConfig::new(Some("test-key".to_string()))
        .with_base_url("http://127.0.0.1:1/v1beta");
    let client = GeminiClient::new(config).unwrap();

    let err = client.generate(&sample_request()).await.unwrap_err();

    assert!(matches!(err.kind(), GenerationErrorKind::Http(_)));
}

#[test]
fn test_reports_provider_and_model() {
    let client = GeminiClient::new(GeminiConfig::new(None).with_model("gemini-2.0-flash")).unwrap();
    assert_eq!(client.provider_name(), "gemini");
    assert_eq!(client.model_name(), "gemini-2.0-flash");
}
