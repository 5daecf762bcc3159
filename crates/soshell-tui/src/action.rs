//! All possible UI actions. Actions are the sole mechanism for state mutation.

use crate::route::Route;

/// How many columns the dashboard gets to spend.
///
/// Derived from the two viewport classifiers: narrow collapses everything to
/// the center feed, wide adds the left nav, extra-wide adds the right
/// widgets column — the original's `lg` / `xl` grid tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Center column only, bottom nav visible.
    Single,
    /// Left nav + center column.
    #[default]
    Double,
    /// Left nav + center column + right widgets.
    Triple,
}

impl LayoutMode {
    /// Derive the mode from the two classifier signals.
    ///
    /// `narrow` is "width < breakpoint"; `below_wide` is "width <
    /// breakpoint + wide margin".
    pub fn from_classifiers(narrow: bool, below_wide: bool) -> Self {
        if narrow {
            Self::Single
        } else if below_wide {
            Self::Double
        } else {
            Self::Triple
        }
    }

    /// Whether the bottom navigation bar replaces the tab bar.
    pub fn shows_bottom_nav(self) -> bool {
        self == Self::Single
    }
}

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    Navigate(Route),
    GoBack,
    GoHome,

    // ── Responsive layout ─────────────────────────────────────────
    LayoutChanged(LayoutMode),

    // ── Feed / composer ───────────────────────────────────────────
    OpenComposer,
    CloseComposer,
    SubmitPost(String),

    // ── Help ──────────────────────────────────────────────────────
    ToggleHelp,

    // ── Scrolling ─────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_mode_tiers() {
        assert_eq!(LayoutMode::from_classifiers(true, true), LayoutMode::Single);
        assert_eq!(
            LayoutMode::from_classifiers(false, true),
            LayoutMode::Double
        );
        assert_eq!(
            LayoutMode::from_classifiers(false, false),
            LayoutMode::Triple
        );
        assert!(LayoutMode::Single.shows_bottom_nav());
        assert!(!LayoutMode::Triple.shows_bottom_nav());
    }
}
