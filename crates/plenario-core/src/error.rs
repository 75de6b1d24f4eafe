//! Error types for Plenário.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Upstream API returned {status} for {url}")]
    Upstream { status: u16, url: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to decode upstream payload: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
