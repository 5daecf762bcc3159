//! Feed data source seam.
//!
//! The UI consumes posts, contact suggestions, and profile stats through
//! [`FeedSource`] so the rendering layer never cares where the data comes
//! from. The only implementation shipped here is [`MockFeed`], a static
//! in-memory dataset; the trait is fallible so a real backend can slot in
//! later without changing consumers.

use std::sync::Arc;

use chrono::{Duration, Utc};
use thiserror::Error;

use crate::model::{Post, Stat, SuggestedContact};

/// Errors a feed source may surface.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed source unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("malformed feed entry: {0}")]
    Malformed(String),
}

/// Supplier of feed content and sidebar data.
pub trait FeedSource: Send + Sync {
    /// Posts in display order, newest first.
    fn posts(&self) -> Result<Vec<Arc<Post>>, FeedError>;

    /// "Suggested for You" entries.
    fn suggested_contacts(&self) -> Result<Vec<SuggestedContact>, FeedError>;

    /// Contacts with a birthday today.
    fn birthdays(&self) -> Result<Vec<SuggestedContact>, FeedError>;

    /// Profile overview metrics.
    fn profile_stats(&self) -> Result<Vec<Stat>, FeedError>;
}

/// Static in-memory feed used by the dashboard.
pub struct MockFeed {
    posts: Vec<Arc<Post>>,
    contacts: Vec<SuggestedContact>,
    stats: Vec<Stat>,
}

impl MockFeed {
    pub fn new() -> Self {
        let now = Utc::now();
        let posts = vec![
            Arc::new(Post {
                id: "p1".into(),
                author_id: "u1".into(),
                author: "Ahmed Ali".into(),
                avatar_initial: 'A',
                body: "Just launched our new product line! Check out the link below. \
                       Super excited about the feedback so far!"
                    .into(),
                posted_at: now - Duration::hours(2),
                likes: 450,
                comments: 98,
                shares: 23,
                media_caption: Some("Product Launch Image".into()),
            }),
            Arc::new(Post {
                id: "p2".into(),
                author_id: "u2".into(),
                author: "Sara Mohamed".into(),
                avatar_initial: 'S',
                body: "Feeling grateful for the amazing community support. You guys \
                       are the best! \u{2764} #Community #Grateful"
                    .into(),
                posted_at: now - Duration::hours(5),
                likes: 120,
                comments: 35,
                shares: 5,
                media_caption: None,
            }),
        ];

        let contacts = vec![
            SuggestedContact {
                name: "Maria Khoury".into(),
                avatar_initial: 'M',
                mutual_friends: 12,
            },
            SuggestedContact {
                name: "Omar Hassan".into(),
                avatar_initial: 'O',
                mutual_friends: 5,
            },
        ];

        let stats = vec![
            Stat {
                title: "Followers".into(),
                value: "12.4".into(),
                unit: Some("K".into()),
                change: Some(5.2),
                description: Some("since last month".into()),
            },
            Stat {
                title: "Post Reach".into(),
                value: "48.1".into(),
                unit: Some("K".into()),
                change: Some(-1.8),
                description: Some("past 28 days".into()),
            },
            Stat {
                title: "Engagement".into(),
                value: "4.7".into(),
                unit: Some("%".into()),
                change: Some(0.0),
                description: Some("likes + comments / reach".into()),
            },
            Stat {
                title: "Friends".into(),
                value: "318".into(),
                unit: None,
                change: None,
                description: Some("2 new this week".into()),
            },
        ];

        Self {
            posts,
            contacts,
            stats,
        }
    }
}

impl Default for MockFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedSource for MockFeed {
    fn posts(&self) -> Result<Vec<Arc<Post>>, FeedError> {
        Ok(self.posts.clone())
    }

    fn suggested_contacts(&self) -> Result<Vec<SuggestedContact>, FeedError> {
        Ok(self.contacts.clone())
    }

    fn birthdays(&self) -> Result<Vec<SuggestedContact>, FeedError> {
        // Nobody's birthday in the mock dataset.
        Ok(Vec::new())
    }

    fn profile_stats(&self) -> Result<Vec<Stat>, FeedError> {
        Ok(self.stats.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mock_feed_posts_are_newest_first() {
        let feed = MockFeed::new();
        let posts = feed.posts().unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts[0].posted_at > posts[1].posted_at);
        assert_eq!(posts[0].author, "Ahmed Ali");
        assert!(posts[0].has_media());
        assert!(!posts[1].has_media());
    }

    #[test]
    fn mock_feed_sidebar_data() {
        let feed = MockFeed::new();
        let contacts = feed.suggested_contacts().unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].mutual_friends, 12);
        assert!(feed.birthdays().unwrap().is_empty());
        assert_eq!(feed.profile_stats().unwrap().len(), 4);
    }
}
