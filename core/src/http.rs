//! The transport port: the only seam between the loader and the network.
//!
//! # Design
//! `HttpClient` is a capability with a single operation. Any implementation
//! (a real networking stack or a test spy) can be injected into the loader
//! without subclassing. Completion is a boxed `FnOnce`, so a transport can
//! deliver at most once by construction; it must also deliver at least once,
//! and never before `get` returns.
//!
//! All fields use owned types so outcomes can be moved across threads freely.

use thiserror::Error;
use url::Url;

/// Response metadata plus the raw body bytes of one successful round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub url: Url,
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// A transport-level failure: no response was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failed: {reason}")]
pub struct TransportError {
    pub reason: String,
}

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Raw outcome of one network attempt, before any loader interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpClientResult {
    Success(HttpResponse),
    Failure(TransportError),
}

pub type HttpCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Fetch bytes and metadata for a URL, asynchronously.
pub trait HttpClient: Send + Sync {
    /// Issue a GET for `url` and hand the outcome to `completion`.
    ///
    /// Implementations must call `completion` exactly once, and never from
    /// inside `get` itself.
    fn get(&self, url: &Url, completion: HttpCompletion);
}
