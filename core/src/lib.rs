//! Remote feed loading core.
//!
//! # Overview
//! `RemoteFeedLoader` issues one GET against a fixed endpoint through an
//! injected `HttpClient`, classifies the transport outcome, and decodes the
//! JSON payload into `FeedItem`s. Callers see exactly one result per `load`.
//!
//! # Design
//! - `HttpClient` is the only seam to the network. `UreqHttpClient` is the
//!   production implementation; tests substitute spies.
//! - Errors collapse into the two-valued `LoaderError`: `Connectivity` when no
//!   response was obtained, `InvalidData` when a response was unusable.
//! - Completions are `FnOnce`; `load_async` adapts the same call to a future.
//! - No retries and no caching: every `load` hits the transport once.

pub mod error;
pub mod feed_item;
pub mod http;
pub mod loader;
pub mod mapper;
pub mod transport;

pub use error::{EndpointError, LoaderError};
pub use feed_item::FeedItem;
pub use http::{HttpClient, HttpClientResult, HttpCompletion, HttpResponse, TransportError};
pub use loader::{FeedLoader, LoadCompletion, LoadFeedResult, RemoteFeedLoader};
pub use mapper::FeedItemsMapper;
pub use transport::{HttpClientConfig, UreqHttpClient};
