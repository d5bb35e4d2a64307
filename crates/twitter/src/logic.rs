use crate::structs::{ResultItem, SearchResponse, User};
use std::collections::HashMap;

/// author_id -> username の索引を作る
pub fn author_index(users: &[User]) -> HashMap<&str, &str> {
    users
        .iter()
        .map(|user| (user.id.as_str(), user.username.as_str()))
        .collect()
}

/// ツイートと includes.users を author_id で紐づける
///
/// Output order follows `data`. A tweet whose author is missing from `includes.users`
/// gets an empty username.
pub fn to_result_items(response: SearchResponse) -> Vec<ResultItem> {
    let users = response
        .includes
        .and_then(|includes| includes.users)
        .unwrap_or_default();
    let index = author_index(&users);

    response
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|tweet| {
            let username = tweet
                .author_id
                .as_deref()
                .and_then(|id| index.get(id))
                .map(|name| name.to_string())
                .unwrap_or_default();

            ResultItem {
                text: tweet.text,
                username,
            }
        })
        .collect()
}
