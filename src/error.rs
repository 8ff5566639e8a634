//! Error types for the fetch-and-render pipeline
//!
//! Every variant is scoped to a single request. The server turns them into
//! HTTP error responses; nothing here terminates the process.

use axum::http::StatusCode;
use thiserror::Error;

/// Failure talking to the content API
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("building HTTP client failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("connection to {url} failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("reading response body from {url} failed: {source}")]
    BodyRead {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Upstream payload could not be decoded into the content model
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("required field `{0}` is missing or empty")]
    MissingField(&'static str),
}

/// Article body could not be converted to HTML
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("markup conversion failed: {0}")]
    Markup(#[from] std::fmt::Error),
}

/// Any failure of a single request's pipeline
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("template rendering failed: {0}")]
    Template(#[from] tera::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status reported to the client for this failure
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Fetch(FetchError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
            Error::Fetch(_) | Error::Decode(_) => StatusCode::BAD_GATEWAY,
            Error::Render(_) | Error::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
