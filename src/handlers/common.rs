pub async fn root() -> &'static str {
    "Tweet relay: GET /tweets?query=<search terms>"
}

pub async fn health() -> &'static str {
    "OK"
}
