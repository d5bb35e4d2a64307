use serde::{Deserialize, Serialize};

/// `GET /2/tweets/search/recent` のレスポンス型
///
/// A search with no hits only carries `meta`, so `data` and `includes` may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Option<Vec<Tweet>>,
    #[serde(default)]
    pub includes: Option<Includes>,
}

#[derive(Debug, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub author_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Includes {
    #[serde(default)]
    pub users: Option<Vec<User>>,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

/// クライアントに返す1件分のツイート
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    pub text: String,
    pub username: String,
}

/// `/tweets` のレスポンス型
#[derive(Debug, Serialize)]
pub struct TweetsResponse {
    pub data: Vec<ResultItem>,
}
