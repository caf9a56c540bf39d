// File: src/error.rs
use thiserror::Error;

/// Failures surfaced by the client, the resolver and the capture pipeline.
/// Every operation stops at the first error; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced an HTTP response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    #[error("unexpected status code {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// The named board, list or label is absent from the fetched
    /// collection.
    #[error("cannot find the {kind} '{name}'")]
    NotFound { kind: &'static str, name: String },

    /// A name is required but neither a tag nor a configured default
    /// supplied one.
    #[error("{0}")]
    Config(String),
}
