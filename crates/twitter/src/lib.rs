pub mod api;
pub mod error;
pub mod logic;
pub mod structs;

use reqwest::Client;

pub use error::SearchError;
pub use structs::{ResultItem, TweetsResponse};

/// クエリで最近のツイートを検索し、本文とユーザー名の組にして返す
pub async fn search_tweets(
    client: &Client,
    base_url: &str,
    bearer_token: &str,
    query: &str,
) -> Result<Vec<ResultItem>, SearchError> {
    let response = api::search_recent(client, base_url, bearer_token, query).await?;
    Ok(logic::to_result_items(response))
}
