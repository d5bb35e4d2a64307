use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;
use twitter::SearchError;

#[derive(Debug)]
pub enum AppError {
    InvalidRequest(String),
    UpstreamUnavailable(String),
    UpstreamMalformed(SearchError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::UpstreamUnavailable(msg) => {
                error!("Upstream unavailable: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::UpstreamMalformed(err) => {
                error!("Upstream malformed: {}", err.describe());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to parse response".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Decode(_) => AppError::UpstreamMalformed(err),
            SearchError::Transport(_) | SearchError::Status(_) => {
                AppError::UpstreamUnavailable(err.describe())
            }
        }
    }
}
