use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use placescope_rank::ReferencePolicy;
use tower::ServiceExt;

use super::*;

fn test_state() -> AppState {
    AppState {
        probe: Arc::new(RankProbe::new(Arc::new(ReferencePolicy::seeded(1)))),
        profile_source: None,
        default_max_pages: 3,
    }
}

async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = build_app(test_state())
        .oneshot(request)
        .await
        .expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json parse");
    (status, json)
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[test]
fn api_error_validation_error_maps_to_bad_request() {
    let response = ApiError::new("req-1", "validation_error", "invalid input").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn api_error_unknown_code_maps_to_internal_error() {
    let response = ApiError::new("req-1", "internal_error", "boom").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_reports_reference_mode() {
    let (status, json) = send(
        Request::builder()
            .uri("/health")
            .header("x-request-id", "health-1")
            .body(Body::empty())
            .expect("request"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["live_prober"], false);
    assert_eq!(json["data"]["live_profile_source"], false);
    assert_eq!(json["meta"]["request_id"], "health-1");
}

#[tokio::test]
async fn analyze_place_uses_reference_profile() {
    let (status, json) = send(post_json(
        "/api/analyze-place",
        &serde_json::json!({"url": "https://map.naver.com/p/search/벌원영어학원"}),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["origin"], "reference");
    assert_eq!(data["record"]["basic_info"]["name"], "벌원영어학원");
    assert_eq!(data["record"]["basic_info"]["category"], "영어학원");
    assert_eq!(data["analysis"]["completeness_score"], 100);
    assert_eq!(data["grade"], "excellent");
}

#[tokio::test]
async fn analyze_place_rejects_blank_url() {
    let (status, json) = send(post_json(
        "/api/analyze-place",
        &serde_json::json!({"url": "  "}),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn check_ranking_returns_ordered_results() {
    let (status, json) = send(post_json(
        "/api/check-ranking",
        &serde_json::json!({
            "target_business": "벌원학원",
            "keywords": ["벌원 영어학원", "수학", "과학"]
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = json["data"].as_array().expect("data array");
    let keywords: Vec<&str> = data.iter().filter_map(|r| r["keyword"].as_str()).collect();
    assert_eq!(keywords, ["벌원 영어학원", "수학", "과학"]);
    assert_eq!(data[0]["rank"], 1);
    assert_eq!(data[0]["found"], true);
    for r in data {
        assert!(r["processing_time"].as_f64().is_some());
        if r["found"] == false {
            assert!(r["rank"].is_null());
            assert_eq!(r["total_results"], 0);
            assert_eq!(r["pages_checked"], 3);
        }
    }
}

#[tokio::test]
async fn check_ranking_rejects_duplicate_keywords() {
    let (status, json) = send(post_json(
        "/api/check-ranking",
        &serde_json::json!({"target_business": "t", "keywords": ["a", "a"]}),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["message"]
        .as_str()
        .is_some_and(|m| m.contains("duplicate")));
}

#[tokio::test]
async fn check_ranking_rejects_out_of_range_pages() {
    let (status, _) = send(post_json(
        "/api/check-ranking",
        &serde_json::json!({"target_business": "t", "keywords": ["a"], "max_pages": 9}),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn integrated_analysis_returns_report_and_export() {
    let (status, json) = send(post_json(
        "/api/integrated-analysis",
        &serde_json::json!({
            "place_url": "https://map.naver.com/p/search/벌원학원",
            "target_business": "벌원학원",
            "keywords": ["벌원 영어학원", "영어학원"],
            "location": {"type": "address", "address": "광주광역시 서구 벌원동"},
            "max_pages": 2
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    let report = &json["data"]["report"];
    assert_eq!(report["status"], "ready");
    assert!(report["profile"].is_object());
    assert_eq!(report["ranking"]["total_keywords"], 2);
    assert_eq!(
        report["strategy"]["recommendations"]
            .as_array()
            .map(Vec::len),
        Some(3)
    );

    let export = &json["data"]["export"];
    assert!(export["timestamp"].is_string());
    assert_eq!(
        export["summary"]["place_score"],
        report["profile"]["score"]
    );
    assert!(export["summary"]["ranking_summary"]["first_place_count"]
        .as_u64()
        .is_some_and(|n| n >= 1));
}

#[tokio::test]
async fn integrated_analysis_validates_before_work() {
    let (status, json) = send(post_json(
        "/api/integrated-analysis",
        &serde_json::json!({
            "place_url": "https://map.naver.com/p/search/벌원학원",
            "target_business": "",
            "keywords": ["a"]
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn integrated_analysis_uses_profile_address_as_location() {
    let (status, json) = send(post_json(
        "/api/integrated-analysis",
        &serde_json::json!({
            "place_url": "https://map.naver.com/p/search/광주미래엔",
            "target_business": "광주미래엔",
            "keywords": ["광주 영어"]
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    let ranks = &json["data"]["export"]["ranking_check"];
    assert_eq!(ranks[0]["keyword"], "광주 영어");
    assert_eq!(ranks[0]["rank"], 1);
}
