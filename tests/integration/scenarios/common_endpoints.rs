use crate::helpers::{client::TestClient, mock_server::unused_base_url};
use axum::http::StatusCode;

/// 観点: /health エンドポイントが 200 OK を返すか
#[tokio::test]
async fn test_health_check() {
    let client = TestClient::new(&unused_base_url().await);
    let (status, body) = client.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

/// 観点: / がサービスの説明を返すか
#[tokio::test]
async fn test_root() {
    let client = TestClient::new(&unused_base_url().await);
    let (status, body) = client.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/tweets"));
}
