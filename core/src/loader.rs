//! Remote feed loading on top of an injected `HttpClient`.
//!
//! # Design
//! `RemoteFeedLoader` holds only the endpoint and a shared handle to the
//! transport; both are fixed at construction. Each `load` call issues one
//! `get` and moves its own completion into the transport callback, so
//! concurrent loads share nothing mutable and the loader needs no locking.
//! The callback does not capture the loader itself, which means results are
//! still delivered if the loader is dropped while a request is in flight.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::oneshot;
use url::Url;

use crate::error::{EndpointError, LoaderError};
use crate::feed_item::FeedItem;
use crate::http::{HttpClient, HttpClientResult};
use crate::mapper::FeedItemsMapper;

pub type LoadFeedResult = Result<Vec<FeedItem>, LoaderError>;

pub type LoadCompletion = Box<dyn FnOnce(LoadFeedResult) + Send + 'static>;

/// Anything that can produce the feed, delivering the result exactly once.
pub trait FeedLoader {
    fn load(&self, completion: LoadCompletion);
}

/// Loads the feed from a fixed endpoint through an `HttpClient`.
pub struct RemoteFeedLoader<C: HttpClient + ?Sized> {
    url: Url,
    client: Arc<C>,
}

impl<C: HttpClient + ?Sized> RemoteFeedLoader<C> {
    /// Construction never touches the transport.
    pub fn new(url: Url, client: Arc<C>) -> Self {
        Self { url, client }
    }

    /// Parse `endpoint` and build a loader for it. An unparsable endpoint is
    /// rejected here rather than surfacing later as a load error.
    pub fn from_endpoint(endpoint: &str, client: Arc<C>) -> Result<Self, EndpointError> {
        Ok(Self::new(Url::parse(endpoint)?, client))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Start a load and return a future for its result.
    ///
    /// The request is issued before this returns; awaiting only waits for the
    /// completion. A transport that drops its completion without calling it
    /// produced no response, so the future resolves to `Connectivity`.
    pub fn load_async(&self) -> impl Future<Output = LoadFeedResult> + Send + 'static {
        let (tx, rx) = oneshot::channel();
        self.load(Box::new(move |result| {
            // The receiver may already be gone; the result is then discarded.
            let _ = tx.send(result);
        }));
        async move {
            rx.await.unwrap_or_else(|_| {
                tracing::warn!("transport dropped its completion without delivering");
                Err(LoaderError::Connectivity)
            })
        }
    }
}

impl<C: HttpClient + ?Sized> Clone for RemoteFeedLoader<C> {
    fn clone(&self) -> Self {
        Self {
            url: self.url.clone(),
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: HttpClient + ?Sized> FeedLoader for RemoteFeedLoader<C> {
    fn load(&self, completion: LoadCompletion) {
        tracing::debug!(url = %self.url, "loading feed");
        self.client
            .get(&self.url, Box::new(move |result| completion(classify(result))));
    }
}

fn classify(result: HttpClientResult) -> LoadFeedResult {
    match result {
        HttpClientResult::Failure(error) => {
            tracing::warn!(%error, "feed request failed");
            Err(LoaderError::Connectivity)
        }
        HttpClientResult::Success(response) => FeedItemsMapper::map(&response),
    }
}
