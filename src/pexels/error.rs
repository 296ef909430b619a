use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Token cannot be sent as an Authorization header")]
    InvalidToken,

    #[error("Failed to build request: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Failed to send request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("HTTP error {0}")]
    Status(StatusCode),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

