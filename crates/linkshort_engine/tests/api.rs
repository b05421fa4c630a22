use std::net::TcpListener;
use std::time::Duration;

use linkshort_engine::{
    ApiError, ApiSettings, ErrorBody, ReqwestApi, ShortenResponse, ShortenerApi, StatsResponse,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> ReqwestApi {
    ReqwestApi::new(ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    })
    .expect("client")
}

#[tokio::test]
async fn create_posts_json_and_decodes_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/create"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "url": "example.com/a/very/long/path" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "short_code": "ab12cd",
            "short_url": "http://host/ab12cd",
            "long_url": "example.com/a/very/long/path",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = api_for(&server)
        .create("example.com/a/very/long/path")
        .await
        .expect("create ok");

    assert_eq!(
        result,
        ShortenResponse {
            short_code: "ab12cd".to_string(),
            short_url: "http://host/ab12cd".to_string(),
            long_url: "example.com/a/very/long/path".to_string(),
        }
    );
}

#[tokio::test]
async fn create_error_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/create"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "URL is required" })))
        .mount(&server)
        .await;

    let err = api_for(&server).create("").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::HttpStatus {
            status: 400,
            reason: Some("Bad Request".to_string()),
            body: ErrorBody::Message("URL is required".to_string()),
        }
    );
}

#[tokio::test]
async fn create_error_with_html_body_is_unparsable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/create"))
        .respond_with(
            ResponseTemplate::new(502).set_body_raw("<h1>Bad Gateway</h1>", "text/html"),
        )
        .mount(&server)
        .await;

    let err = api_for(&server).create("example.com").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::HttpStatus {
            status: 502,
            reason: Some("Bad Gateway".to_string()),
            body: ErrorBody::Unparsable,
        }
    );
}

#[tokio::test]
async fn create_success_with_garbage_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/create"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let err = api_for(&server).create("example.com").await.unwrap_err();
    assert!(
        matches!(err, ApiError::MalformedBody { status: 200, .. }),
        "{err:?}"
    );
}

#[tokio::test]
async fn stats_tolerates_missing_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats/ab12cd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "click_count": 0 })))
        .mount(&server)
        .await;

    let stats = api_for(&server).stats("ab12cd").await.expect("stats ok");
    assert_eq!(
        stats,
        StatsResponse {
            click_count: Some(0),
            ..StatsResponse::default()
        }
    );
}

#[tokio::test]
async fn stats_ignores_unknown_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats/ab12cd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "short_code": "ab12cd",
            "long_url": "https://example.com",
            "created_at": "2024-03-01T10:15:30Z",
            "click_count": 42,
        })))
        .mount(&server)
        .await;

    let stats = api_for(&server).stats("ab12cd").await.expect("stats ok");
    assert_eq!(stats.click_count, Some(42));
    assert_eq!(stats.created_at.as_deref(), Some("2024-03-01T10:15:30Z"));
    assert_eq!(stats.long_url.as_deref(), Some("https://example.com"));
}

#[tokio::test]
async fn stats_null_body_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats/ab12cd"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("null", "application/json"))
        .mount(&server)
        .await;

    let err = api_for(&server).stats("ab12cd").await.unwrap_err();
    assert_eq!(err, ApiError::EmptyBody { status: 200 });
}

#[tokio::test]
async fn stats_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats/zzzzzz"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "URL not found" })))
        .mount(&server)
        .await;

    let err = api_for(&server).stats("zzzzzz").await.unwrap_err();
    assert!(
        matches!(err, ApiError::HttpStatus { status: 404, .. }),
        "{err:?}"
    );
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats/ab12cd"))
        .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(64)))
        .mount(&server)
        .await;

    let api = ReqwestApi::new(ApiSettings {
        base_url: server.uri(),
        max_body_bytes: 16,
        ..ApiSettings::default()
    })
    .expect("client");

    let err = api.stats("ab12cd").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::TooLarge {
            status: 200,
            max_bytes: 16
        }
    );
}

#[tokio::test]
async fn oversized_not_found_page_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats/ab12cd"))
        .respond_with(
            ResponseTemplate::new(404).set_body_raw("<p>missing</p>".repeat(5 * 1024), "text/html"),
        )
        .mount(&server)
        .await;

    let err = api_for(&server).stats("ab12cd").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::HttpStatus {
            status: 404,
            reason: Some("Not Found".to_string()),
            body: ErrorBody::Unparsable,
        }
    );
}

#[tokio::test]
async fn negative_click_count_clamps_and_fraction_truncates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats/neg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "short_code": "neg",
            "click_count": -3,
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats/frac"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "click_count": 7.9 })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let stats = api.stats("neg").await.expect("stats ok");
    assert_eq!(stats.short_code.as_deref(), Some("neg"));
    assert_eq!(stats.click_count, Some(0));

    let stats = api.stats("frac").await.expect("stats ok");
    assert_eq!(stats.click_count, Some(7));
}

#[tokio::test]
async fn optional_request_timeout_applies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats/slow01"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let api = ReqwestApi::new(ApiSettings {
        base_url: server.uri(),
        request_timeout: Some(Duration::from_millis(50)),
        ..ApiSettings::default()
    })
    .expect("client");

    let err = api.stats("slow01").await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout(_)), "{err:?}");
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let api = ReqwestApi::new(ApiSettings {
        base_url: format!("http://127.0.0.1:{port}"),
        ..ApiSettings::default()
    })
    .expect("client");

    let err = api.create("example.com").await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "{err:?}");
}
