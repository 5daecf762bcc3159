//! Domain layer for the soshell terminal dashboard.
//!
//! This crate owns everything the UI consumes but does not render:
//!
//! - **[`viewport`]** — the responsive core: a [`ViewportClassifier`] that
//!   observes the host platform's viewport width through the
//!   [`ViewportHost`] capability and publishes a reactive "is-narrow"
//!   boolean as the width crosses a breakpoint. Subscriptions follow a
//!   strict acquire-on-activate / release-on-deactivate discipline.
//!
//! - **Domain model** ([`model`]) — [`Post`], [`SuggestedContact`], and
//!   [`Stat`], the data contracts for the feed, sidebar widgets, and
//!   stat cards.
//!
//! - **[`feed`]** — the [`FeedSource`] seam plus [`MockFeed`], the static
//!   dataset behind the dashboard. No fetching, no persistence.

pub mod feed;
pub mod model;
pub mod viewport;

// ── Primary re-exports ──────────────────────────────────────────────
pub use feed::{FeedError, FeedSource, MockFeed};
pub use model::{Post, Stat, SuggestedContact, Trend};
pub use viewport::{
    DEFAULT_BREAKPOINT, MatchListener, NarrowSignal, SubscriptionId, ViewportClassifier,
    ViewportHost, WidthQuery,
};
