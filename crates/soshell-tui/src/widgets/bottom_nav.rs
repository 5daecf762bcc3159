//! Bottom navigation bar, shown only on narrow viewports.
//!
//! Five evenly spaced entries; the active route gets the accent color and an
//! indicator mark — the terminal stand-in for the original's top border bar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::route::Route;
use crate::theme;

/// Render the bar into a one-row area, one equal-width cell per route.
pub fn render_bottom_nav(frame: &mut Frame, area: Rect, active: Route) {
    #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
    let cells = Layout::horizontal(vec![
        Constraint::Ratio(1, Route::ALL.len() as u32);
        Route::ALL.len()
    ])
    .split(area);

    for (route, cell) in Route::ALL.into_iter().zip(cells.iter()) {
        let is_active = route == active;
        // Compact labels keep five cells legible down to very small widths.
        let label = if cell.width >= 12 {
            route.label()
        } else {
            route.label_short()
        };

        let line = if is_active {
            Line::from(vec![
                Span::styled("▎", theme::nav_active()),
                Span::styled(format!("{} {label}", route.icon()), theme::nav_active()),
            ])
        } else {
            Line::from(Span::styled(
                format!(" {} {label}", route.icon()),
                theme::nav_inactive(),
            ))
        };

        frame.render_widget(Paragraph::new(line).centered(), *cell);
    }
}
