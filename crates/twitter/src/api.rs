use crate::error::SearchError;
use crate::structs::SearchResponse;
use reqwest::Client;

pub const SEARCH_RECENT_PATH: &str = "/2/tweets/search/recent";
pub const MAX_RESULTS: &str = "10";

/// Recent search を1回だけ呼び出す（リトライなし）
///
/// `base_url` is the API origin without a trailing slash, e.g. `https://api.twitter.com`.
pub async fn search_recent(
    client: &Client,
    base_url: &str,
    bearer_token: &str,
    query: &str,
) -> Result<SearchResponse, SearchError> {
    let url = format!("{}{}", base_url, SEARCH_RECENT_PATH);
    tracing::debug!("Searching recent tweets: {}", query);

    let res = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", bearer_token))
        .query(&[
            ("query", query),
            ("max_results", MAX_RESULTS),
            ("tweet.fields", "text,author_id"),
            ("expansions", "author_id"),
            ("user.fields", "username"),
        ])
        .send()
        .await
        .map_err(SearchError::Transport)?;

    let status = res.status();
    if !status.is_success() {
        tracing::warn!("Search API responded with {}", status);
        return Err(SearchError::Status(status));
    }

    let body = res.bytes().await.map_err(SearchError::Transport)?;
    serde_json::from_slice(&body).map_err(SearchError::Decode)
}
