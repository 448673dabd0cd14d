//! Classification and decoding of a successful transport response.
//!
//! # Design
//! The wire DTOs are private to this module. `FeedItem` stays free of serde so
//! the JSON shape (`image` vs `image_url`) can change without touching the
//! domain type. Any decode diagnostic is logged and then dropped; callers only
//! see `LoaderError::InvalidData`.

use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::error::LoaderError;
use crate::feed_item::FeedItem;
use crate::http::HttpResponse;

const OK_200: u16 = 200;

#[derive(Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

#[derive(Deserialize)]
struct RemoteFeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        FeedItem {
            id: item.id,
            description: item.description,
            location: item.location,
            image_url: item.image,
        }
    }
}

/// Turns an `HttpResponse` into feed items or `InvalidData`.
pub struct FeedItemsMapper;

impl FeedItemsMapper {
    pub fn map(response: &HttpResponse) -> Result<Vec<FeedItem>, LoaderError> {
        if response.status != OK_200 {
            tracing::debug!(status = response.status, url = %response.url, "unexpected status code");
            return Err(LoaderError::InvalidData);
        }

        let root: Root = serde_json::from_slice(&response.body).map_err(|e| {
            tracing::debug!(error = %e, url = %response.url, "feed payload did not decode");
            LoaderError::InvalidData
        })?;

        Ok(root.items.into_iter().map(FeedItem::from).collect())
    }
}
