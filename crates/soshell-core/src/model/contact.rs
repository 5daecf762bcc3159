//! People-you-may-know suggestions.

use serde::{Deserialize, Serialize};

/// A suggested contact shown in the right-hand widgets column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedContact {
    /// Display name.
    pub name: String,

    /// Single-character stand-in for the avatar.
    pub avatar_initial: char,

    /// Number of mutual friends.
    pub mutual_friends: u32,
}
