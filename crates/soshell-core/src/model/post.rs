//! Feed post entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single post in the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Stable post identifier.
    pub id: String,

    /// Author's identifier.
    pub author_id: String,

    /// Author's display name.
    pub author: String,

    /// Single-character stand-in for the author's avatar.
    pub avatar_initial: char,

    /// Post body text.
    pub body: String,

    /// When the post was published.
    pub posted_at: DateTime<Utc>,

    pub likes: u64,
    pub comments: u64,
    pub shares: u64,

    /// Caption for an attached media item, if any. The terminal renders a
    /// captioned frame where a browser would show the image itself.
    pub media_caption: Option<String>,
}

impl Post {
    /// Whether the post carries an attached media item.
    pub fn has_media(&self) -> bool {
        self.media_caption.is_some()
    }
}
