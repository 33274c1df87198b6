// File: crates/aqi-feed/src/error.rs
// Summary: Error type for feed requests.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure: connect, timeout, TLS, body read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{url} returned {status}")]
    Status { status: reqwest::StatusCode, url: String },

    /// The body was not the JSON shape we expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, FetchError>;
