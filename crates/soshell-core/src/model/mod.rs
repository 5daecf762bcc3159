//! Canonical domain types shared by the feed source and the UI.

pub mod contact;
pub mod post;
pub mod stat;

pub use contact::SuggestedContact;
pub use post::Post;
pub use stat::{Stat, Trend};
