//! Error types for the feed loader.
//!
//! # Design
//! Callers only ever see `LoaderError`, a two-valued taxonomy. Everything
//! underneath it (transport failure reasons, JSON diagnostics, missing fields)
//! is logged and then collapsed into one of the two variants, so the contract
//! does not change when the transport does.

use thiserror::Error;

/// Errors delivered to `load` completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoaderError {
    /// No response was obtained from the transport.
    #[error("connectivity error")]
    Connectivity,

    /// A response arrived but was unusable: non-200 status or undecodable body.
    #[error("invalid data")]
    InvalidData,
}

/// Returned by `RemoteFeedLoader::from_endpoint` when the endpoint string is
/// not a valid URL.
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("invalid endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
