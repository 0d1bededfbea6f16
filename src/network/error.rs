//! Errors raised by the cities backend client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
