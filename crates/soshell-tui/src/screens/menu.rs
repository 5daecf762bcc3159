//! Menu screen — profile overview with the account's stat cards.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use soshell_core::feed::FeedSource;
use soshell_core::model::Stat;

use crate::action::{Action, LayoutMode};
use crate::component::Component;
use crate::theme;
use crate::widgets::stat_card::render_stat_card;

pub struct MenuScreen {
    layout: LayoutMode,
    stats: Vec<Stat>,
}

impl MenuScreen {
    pub fn new(feed: &dyn FeedSource) -> Result<Self> {
        Ok(Self {
            layout: LayoutMode::default(),
            stats: feed.profile_stats()?,
        })
    }

    /// Cards flow horizontally on wide viewports, vertically on narrow ones.
    fn render_stats(&self, frame: &mut Frame, area: Rect) {
        if self.stats.is_empty() {
            return;
        }

        #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
        let cells = if self.layout == LayoutMode::Single {
            Layout::vertical(vec![Constraint::Length(6); self.stats.len()]).split(area)
        } else {
            Layout::horizontal(vec![
                Constraint::Ratio(1, self.stats.len() as u32);
                self.stats.len()
            ])
            .split(area)
        };

        for (stat, cell) in self.stats.iter().zip(cells.iter()) {
            render_stat_card(frame, *cell, stat);
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(" (Y) You", theme::author_style())),
        Line::from(Span::styled(" View your profile", theme::muted())),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

impl Component for MenuScreen {
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::LayoutChanged(mode) = action {
            self.layout = *mode;
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([Constraint::Length(4), Constraint::Min(6)]).split(area);
        render_header(frame, rows[0]);
        self.render_stats(frame, rows[1]);
    }

    fn id(&self) -> &'static str {
        "Menu"
    }
}
