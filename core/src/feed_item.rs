//! The domain record produced by a successful load.

use url::Url;
use uuid::Uuid;

/// One decoded entry of the feed.
///
/// Decoupled from the wire representation: the JSON `image` key is mapped to
/// `image_url` by `FeedItemsMapper`, and nothing here derives serde.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Url,
}
