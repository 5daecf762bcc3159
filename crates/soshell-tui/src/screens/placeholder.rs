//! Placeholder screens for sections that exist in the navigation but carry
//! no content yet (Watch, Notifications).

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::action::Action;
use crate::component::Component;
use crate::route::Route;
use crate::theme;

pub struct PlaceholderScreen {
    route: Route,
}

impl PlaceholderScreen {
    pub fn new(route: Route) -> Self {
        Self {
            route,
        }
    }
}

impl Component for PlaceholderScreen {
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ", self.route.label()))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{}  {}", self.route.icon(), self.route.label()),
                theme::author_style(),
            ))
            .centered(),
            Line::from(Span::styled("Nothing here yet.", theme::muted())).centered(),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn id(&self) -> &'static str {
        self.route.label()
    }
}
