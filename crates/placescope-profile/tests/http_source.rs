//! Integration tests for `HttpProfileSource` using wiremock HTTP mocks.

use placescope_profile::{resolve_profile, HttpProfileSource, ProfileError, ProfileOrigin, ProfileSource};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_source(base_url: &str) -> HttpProfileSource {
    HttpProfileSource::new(base_url, 5, "placescope-test")
        .expect("source construction should not fail")
}

#[tokio::test]
async fn fetch_returns_parsed_record() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "basic_info": {
            "name": "벌원학원",
            "category": "교육업",
            "address": "광주광역시 서구 벌원동 123-45",
            "phone": "062-123-4567",
            "hours": "정보 없음",
            "rating": 4.0,
            "review_count": 0
        },
        "details": {
            "description": "스크래핑된 설명",
            "facilities": ["주차장", "상담실"],
            "pricing": "정보 없음"
        }
    });

    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(query_param("url", "https://map.naver.com/p/search/벌원학원"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let source = test_source(&server.uri());
    let record = source
        .fetch("https://map.naver.com/p/search/벌원학원")
        .await
        .expect("should parse record");

    assert_eq!(record.basic_info.name, "벌원학원");
    assert_eq!(record.details.facilities, vec!["주차장", "상담실"]);
    assert!(record.details.keywords.is_empty());
    assert!(record.details.programs.is_empty());
}

#[tokio::test]
async fn server_error_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let source = test_source(&server.uri());
    let err = source.fetch("https://example.com/place/1").await.unwrap_err();
    assert!(
        matches!(err, ProfileError::UnexpectedStatus { status: 502, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
        .mount(&server)
        .await;

    let source = test_source(&server.uri());
    let err = source.fetch("https://example.com/place/1").await.unwrap_err();
    assert!(matches!(err, ProfileError::Deserialize { .. }), "got {err:?}");
}

#[tokio::test]
async fn resolve_prefers_upstream_and_degrades_on_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(query_param("url", "https://example.com/place/ok"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"basic_info": {"name": "Upstream Place"}})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(query_param("url", "https://example.com/place/down"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let source = test_source(&server.uri());

    let ok = resolve_profile(Some(&source), "https://example.com/place/ok").await;
    assert_eq!(ok.origin, ProfileOrigin::Upstream);
    assert_eq!(ok.record.basic_info.name, "Upstream Place");

    let degraded = resolve_profile(Some(&source), "https://example.com/place/down").await;
    assert_eq!(degraded.origin, ProfileOrigin::Reference);
    assert_eq!(degraded.record.basic_info.name, "down");
}
