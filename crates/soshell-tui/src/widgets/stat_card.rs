//! Statistic card — a bordered metric panel with value, trend, and footer.
//!
//! ```text
//! ╭─ FOLLOWERS ──────────────╮
//! │                          │
//! │   12.4 K                 │
//! │                          │
//! │   ▲ 5.2%  since last mo… │
//! ╰──────────────────────────╯
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use soshell_core::model::{Stat, Trend};

use crate::theme;

/// Render one stat card into `area`.
pub fn render_stat_card(frame: &mut Frame, area: Rect, stat: &Stat) {
    let block = Block::default()
        .title(format!(" {} ", stat.title.to_uppercase()))
        .title_style(theme::muted())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_default());

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // Value line: big value plus dim unit suffix.
    let mut value_spans = vec![Span::styled(
        format!("  {}", stat.value),
        theme::author_style(),
    )];
    if let Some(ref unit) = stat.unit {
        value_spans.push(Span::styled(format!(" {unit}"), theme::muted()));
    }

    let mut lines = vec![Line::from(""), Line::from(value_spans), Line::from("")];

    // Trend pill + description footer.
    let mut footer = vec![Span::raw("  ")];
    match stat.trend() {
        Some(Trend::Up) => footer.push(Span::styled(
            format!("▲ {}", stat.change_text().unwrap_or_default()),
            theme::trend_up(),
        )),
        Some(Trend::Down) => footer.push(Span::styled(
            format!("▼ {}", stat.change_text().unwrap_or_default()),
            theme::trend_down(),
        )),
        Some(Trend::Flat) => footer.push(Span::styled(
            format!("■ {}", stat.change_text().unwrap_or_default()),
            theme::trend_flat(),
        )),
        None => {}
    }
    if let Some(ref description) = stat.description {
        if stat.trend().is_some() {
            footer.push(Span::raw("  "));
        }
        footer.push(Span::styled(description.clone(), theme::muted()));
    }
    lines.push(Line::from(footer));

    frame.render_widget(Paragraph::new(lines), inner);
}
