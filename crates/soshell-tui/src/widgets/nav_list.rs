//! Left navigation column for wide layouts.
//!
//! Mirrors the original sidebar: primary entries up top, a SHORTCUTS section
//! underneath. Only some entries are real routes; the rest are static, as
//! they were in the source material.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::route::Route;
use crate::theme;

/// Sidebar entry: a glyph, a label, and the route it activates (if any).
struct NavEntry {
    icon: &'static str,
    label: &'static str,
    route: Option<Route>,
}

const PRIMARY: &[NavEntry] = &[
    NavEntry {
        icon: "⌂",
        label: "Feed",
        route: Some(Route::Feed),
    },
    NavEntry {
        icon: "☻",
        label: "Friends",
        route: Some(Route::Friends),
    },
    NavEntry {
        icon: "✉",
        label: "Messenger",
        route: None,
    },
    NavEntry {
        icon: "◷",
        label: "Memories",
        route: None,
    },
    NavEntry {
        icon: "▦",
        label: "Events",
        route: None,
    },
    NavEntry {
        icon: "⚑",
        label: "Saved",
        route: None,
    },
];

const SHORTCUTS: &[NavEntry] = &[
    NavEntry {
        icon: "▷",
        label: "Gaming Video",
        route: None,
    },
    NavEntry {
        icon: "☻",
        label: "Groups",
        route: None,
    },
];

fn entry_line(entry: &NavEntry, active: Route) -> Line<'static> {
    let is_active = entry.route == Some(active);
    if is_active {
        Line::from(Span::styled(
            format!("▎{} {}", entry.icon, entry.label),
            theme::nav_active(),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {} {}", entry.icon, entry.label),
            theme::nav_inactive(),
        ))
    }
}

/// Render the sidebar into `area`.
pub fn render_nav_list(frame: &mut Frame, area: Rect, active: Route) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_default());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for entry in PRIMARY {
        lines.push(entry_line(entry, active));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" SHORTCUTS", theme::muted())));
    for entry in SHORTCUTS {
        lines.push(entry_line(entry, active));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
