use crate::error::AppError;
use crate::state::{SharedState, TweetsQuery};
use axum::{
    extract::{Query, State},
    response::Json,
};
use twitter::TweetsResponse;

pub async fn get_tweets(
    State(state): State<SharedState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<TweetsResponse>, AppError> {
    let query = TweetsQuery::from_pairs(pairs)
        .query
        .ok_or_else(|| AppError::InvalidRequest("Query is required".to_string()))?;

    tracing::info!("Received tweets request: {}", query);

    let data = twitter::search_tweets(
        &state.http_client,
        &state.config.twitter_api_url,
        &state.config.bearer_token,
        &query,
    )
    .await?;

    tracing::debug!("Returning {} tweets for {}", data.len(), query);
    Ok(Json(TweetsResponse { data }))
}
