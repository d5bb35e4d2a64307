use thiserror::Error;

/// Failures while calling the recent search API.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request never produced a usable HTTP response (connect, timeout, body read).
    #[error(transparent)]
    Transport(reqwest::Error),

    #[error("upstream returned {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode search response")]
    Decode(#[source] serde_json::Error),
}

impl SearchError {
    /// Display text followed by every underlying cause, `: ` separated.
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}
