//! Friends screen — suggested contacts as a selectable list.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use soshell_core::feed::FeedSource;
use soshell_core::model::SuggestedContact;

use crate::action::{Action, LayoutMode};
use crate::component::Component;
use crate::route::Route;
use crate::theme;
use crate::widgets::nav_list::render_nav_list;

pub struct FriendsScreen {
    focused: bool,
    layout: LayoutMode,
    contacts: Vec<SuggestedContact>,
    selected: usize,
}

impl FriendsScreen {
    pub fn new(feed: &dyn FeedSource) -> Result<Self> {
        Ok(Self {
            focused: false,
            layout: LayoutMode::default(),
            contacts: feed.suggested_contacts()?,
            selected: 0,
        })
    }

    fn select_next(&mut self) {
        if !self.contacts.is_empty() {
            self.selected = (self.selected + 1).min(self.contacts.len() - 1);
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" People You May Know ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        for (i, contact) in self.contacts.iter().enumerate() {
            let is_selected = i == self.selected;
            let marker = if is_selected { "▎" } else { " " };
            let name_style = if is_selected {
                theme::nav_active()
            } else {
                theme::author_style()
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{marker}({}) {}", contact.avatar_initial, contact.name),
                    name_style,
                ),
                Span::styled("  [+ Add Friend]", theme::nav_active()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("     {} mutual friends", contact.mutual_friends),
                theme::muted(),
            )));
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for FriendsScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_next();
                Ok(None)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_prev();
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::LayoutChanged(mode) = action {
            self.layout = *mode;
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        if self.layout == LayoutMode::Single {
            self.render_list(frame, area);
        } else {
            let cols = Layout::horizontal([Constraint::Length(26), Constraint::Min(0)]).split(area);
            render_nav_list(frame, cols[0], Route::Friends);
            self.render_list(frame, cols[1]);
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "Friends"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use soshell_core::feed::MockFeed;

    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let feed = MockFeed::new();
        let mut screen = FriendsScreen::new(&feed).unwrap();
        let last = screen.contacts.len() - 1;

        screen.handle_key_event(KeyEvent::from(KeyCode::Char('k'))).unwrap();
        assert_eq!(screen.selected, 0);

        for _ in 0..10 {
            screen.handle_key_event(KeyEvent::from(KeyCode::Char('j'))).unwrap();
        }
        assert_eq!(screen.selected, last);
    }
}
