//! Route identifiers and path resolution.
//!
//! Routes stand in for the original web app's URL paths. A path resolves to
//! a route by the same rule the bottom nav uses for its active state: `/`
//! matches exactly, every other route matches by prefix. Paths that resolve
//! to nothing land on the 404 screen.

use std::fmt;

/// The five navigable sections, in bottom-nav order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Feed, // 1
    Friends,       // 2
    Watch,         // 3
    Notifications, // 4
    Menu,          // 5
}

impl Route {
    /// All routes in nav order.
    pub const ALL: [Route; 5] = [
        Self::Feed,
        Self::Friends,
        Self::Watch,
        Self::Notifications,
        Self::Menu,
    ];

    /// URL-style path for this route.
    pub fn href(self) -> &'static str {
        match self {
            Self::Feed => "/",
            Self::Friends => "/friends",
            Self::Watch => "/watch",
            Self::Notifications => "/notifications",
            Self::Menu => "/menu",
        }
    }

    /// Nav label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Feed => "Feed",
            Self::Friends => "Friends",
            Self::Watch => "Watch",
            Self::Notifications => "Notifications",
            Self::Menu => "Menu",
        }
    }

    /// Compact label for narrow layouts.
    pub fn label_short(self) -> &'static str {
        match self {
            Self::Feed => "Feed",
            Self::Friends => "Frnd",
            Self::Watch => "Wtch",
            Self::Notifications => "Notif",
            Self::Menu => "Menu",
        }
    }

    /// Nav glyph standing in for the original's icon set.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Feed => "⌂",
            Self::Friends => "☻",
            Self::Watch => "▷",
            Self::Notifications => "◎",
            Self::Menu => "≡",
        }
    }

    /// Numeric key (1-5) for this route.
    pub fn number(self) -> u8 {
        match self {
            Self::Feed => 1,
            Self::Friends => 2,
            Self::Watch => 3,
            Self::Notifications => 4,
            Self::Menu => 5,
        }
    }

    /// Route from a numeric key (1-5). Returns None for out-of-range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Feed),
            2 => Some(Self::Friends),
            3 => Some(Self::Watch),
            4 => Some(Self::Notifications),
            5 => Some(Self::Menu),
            _ => None,
        }
    }

    /// Next route in nav order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&r| r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous route in nav order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&r| r == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Does this route own the given path? `/` matches exactly; every other
    /// route claims its prefix (so `/friends/requests` is still Friends).
    pub fn is_active(self, path: &str) -> bool {
        if self == Self::Feed {
            path == "/"
        } else {
            path.starts_with(self.href())
        }
    }

    /// Resolve a path to a route, or None for an unknown path (404).
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.is_active(path))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_matches_feed_exactly() {
        assert_eq!(Route::from_path("/"), Some(Route::Feed));
        // A non-root path never falls through to Feed.
        assert_eq!(Route::from_path("/fr"), None);
    }

    #[test]
    fn section_paths_match_by_prefix() {
        assert_eq!(Route::from_path("/friends"), Some(Route::Friends));
        assert_eq!(Route::from_path("/friends/requests"), Some(Route::Friends));
        assert_eq!(Route::from_path("/watch"), Some(Route::Watch));
        assert_eq!(Route::from_path("/menu"), Some(Route::Menu));
    }

    #[test]
    fn unknown_paths_resolve_to_none() {
        assert_eq!(Route::from_path("/bogus"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn number_keys_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_number(route.number()), Some(route));
        }
        assert_eq!(Route::from_number(0), None);
        assert_eq!(Route::from_number(6), None);
    }

    #[test]
    fn next_prev_cycle() {
        assert_eq!(Route::Feed.next(), Route::Friends);
        assert_eq!(Route::Menu.next(), Route::Feed);
        assert_eq!(Route::Feed.prev(), Route::Menu);
    }
}
