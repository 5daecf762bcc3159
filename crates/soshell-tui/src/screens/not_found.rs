//! 404 screen, shown when the requested path resolves to no route.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::action::Action;
use crate::component::Component;
use crate::theme;

const BANNER: &[&str] = &[
    " ██   ██  ██████  ██   ██ ",
    " ██   ██ ██    ██ ██   ██ ",
    " ███████ ██    ██ ███████ ",
    "      ██ ██    ██      ██ ",
    "      ██  ██████       ██ ",
];

pub struct NotFoundScreen {
    path: String,
}

impl NotFoundScreen {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
        }
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }
}

impl Component for NotFoundScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('h') => Ok(Some(Action::GoHome)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = BANNER
            .iter()
            .map(|row| Line::from(Span::styled(*row, theme::title_style())).centered())
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Page Not Found", theme::author_style())).centered());
        lines.push(
            Line::from(Span::styled(
                format!("Nothing lives at {}.", self.path),
                theme::muted(),
            ))
            .centered(),
        );
        lines.push(Line::from(""));
        lines.push(
            Line::from(vec![
                Span::styled("Enter", theme::key_hint_key()),
                Span::styled(" back to the feed", theme::key_hint()),
            ])
            .centered(),
        );

        #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
        let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines), centered);
    }

    fn id(&self) -> &'static str {
        "NotFound"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn enter_returns_home() {
        let mut screen = NotFoundScreen::new("/nowhere");
        let action = screen
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap();
        assert!(matches!(action, Some(Action::GoHome)));
    }
}
