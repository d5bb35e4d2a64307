use crate::helpers::{
    client::TestClient,
    mock_server::{unused_base_url, MockReply, MockServer},
};
use axum::http::StatusCode;
use serde_json::json;
use std::time::Duration;

/// 観点: 接続できない場合に 500 とエラー内容を返すか
#[tokio::test]
async fn test_connection_refused() {
    let client = TestClient::new(&unused_base_url().await);

    let (status, body) = client.get_json("/tweets?query=hello").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("error sending request"), "message: {}", message);
}

/// 観点: 不正な JSON が返ってきた場合に 500 を返すか
#[tokio::test]
async fn test_malformed_json() {
    for raw in ["not json at all", r#"{"data": [{"id": "1"}]}"#, r#"{"data": "oops"}"#] {
        let mock = MockServer::start(MockReply::Raw(raw)).await;
        let client = TestClient::new(&mock.base_url());

        let (status, body) = client.get_json("/tweets?query=hello").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body: {}", raw);
        assert_eq!(body, json!({ "error": "Failed to parse response" }));
    }
}

/// 観点: Search API がエラーステータスを返した場合に 500 を返すか
#[tokio::test]
async fn test_upstream_error_status() {
    let mock = MockServer::start(MockReply::Status(StatusCode::UNAUTHORIZED)).await;
    let client = TestClient::new(&mock.base_url());

    let (status, body) = client.get_json("/tweets?query=hello").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "upstream returned 401 Unauthorized" }));
}

/// 観点: タイムアウトした場合に 500 を返すか
#[tokio::test]
async fn test_upstream_timeout() {
    let mock = MockServer::start(MockReply::Delayed(
        Duration::from_secs(2),
        json!({ "data": [] }),
    ))
    .await;
    let client = TestClient::with_timeout(&mock.base_url(), Duration::from_millis(200));

    let (status, body) = client.get_json("/tweets?query=slow").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
    assert_ne!(body["error"], "Failed to parse response");
}
