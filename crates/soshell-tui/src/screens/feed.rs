//! Feed screen — the dashboard's home.
//!
//! Layout tiers (driven by the viewport classifiers):
//! ```text
//! Triple:  ┌ nav ┐┌───── feed ─────┐┌ widgets ┐
//! Double:  ┌ nav ┐┌──────── feed ────────────┐
//! Single:  ┌──────────── feed ──────────────┐   (+ bottom nav bar)
//! ```
//! The center column carries the stories placeholder, the post composer,
//! the post cards, and the infinite-scroll footer.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use color_eyre::eyre::Result;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use soshell_core::feed::FeedSource;
use soshell_core::model::{Post, SuggestedContact};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::action::{Action, LayoutMode};
use crate::component::Component;
use crate::route::Route;
use crate::theme;
use crate::widgets::num_fmt;
use crate::widgets::nav_list::render_nav_list;

pub struct FeedScreen {
    layout: LayoutMode,
    posts: Vec<Arc<Post>>,
    contacts: Vec<SuggestedContact>,
    birthdays: Vec<SuggestedContact>,
    composer: Input,
    composing: bool,
    scroll: u16,
    /// Refreshed on ticks so relative timestamps stay honest.
    now: DateTime<Utc>,
    local_seq: u32,
}

impl FeedScreen {
    pub fn new(feed: &dyn FeedSource) -> Result<Self> {
        Ok(Self {
            layout: LayoutMode::default(),
            posts: feed.posts()?,
            contacts: feed.suggested_contacts()?,
            birthdays: feed.birthdays()?,
            composer: Input::default(),
            composing: false,
            scroll: 0,
            now: Utc::now(),
            local_seq: 0,
        })
    }

    /// Loose upper bound on the scroll offset; each card is a handful of
    /// lines plus wrapping slack.
    #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
    fn max_scroll(&self) -> u16 {
        (self.posts.len().saturating_mul(8)).min(usize::from(u16::MAX)) as u16
    }

    fn submit_post(&mut self, body: &str) {
        self.local_seq += 1;
        self.posts.insert(
            0,
            Arc::new(Post {
                id: format!("local-{}", self.local_seq),
                author_id: "me".into(),
                author: "You".into(),
                avatar_initial: 'Y',
                body: body.to_string(),
                posted_at: Utc::now(),
                likes: 0,
                comments: 0,
                shares: 0,
                media_caption: None,
            }),
        );
        self.composing = false;
        self.composer.reset();
        self.scroll = 0;
    }

    // ── Center column ────────────────────────────────────────────────

    fn render_center(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([
            Constraint::Length(3), // stories placeholder
            Constraint::Length(4), // composer
            Constraint::Min(3),    // posts
            Constraint::Length(1), // footer
        ])
        .split(area);

        render_stories(frame, rows[0]);
        self.render_composer(frame, rows[1]);
        self.render_posts(frame, rows[2]);

        frame.render_widget(
            Paragraph::new(Span::styled("Loading more posts…", theme::muted())).centered(),
            rows[3],
        );
    }

    fn render_composer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" What's on your mind? ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.composing {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = if self.composing {
            vec![
                Line::from(vec![
                    Span::styled(" ▏", theme::border_focused()),
                    Span::styled(self.composer.value().to_string(), theme::body_style()),
                    Span::styled("█", theme::border_focused()),
                ]),
                Line::from(vec![
                    Span::styled(" Enter ", theme::key_hint_key()),
                    Span::styled("post   ", theme::key_hint()),
                    Span::styled("Esc ", theme::key_hint_key()),
                    Span::styled("cancel", theme::key_hint()),
                ]),
            ]
        } else {
            vec![Line::from(vec![
                Span::styled(" Create a post… press ", theme::muted()),
                Span::styled("c", theme::key_hint_key()),
            ])]
        };

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_posts(&self, frame: &mut Frame, area: Rect) {
        let separator: String = "─".repeat(usize::from(area.width));
        let mut lines: Vec<Line> = Vec::new();

        for post in &self.posts {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("({}) {}", post.avatar_initial, post.author),
                    theme::author_style(),
                ),
                Span::styled(
                    format!("  · {}", num_fmt::fmt_relative(post.posted_at, self.now)),
                    theme::muted(),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                post.body.clone(),
                theme::body_style(),
            )));
            if let Some(ref caption) = post.media_caption {
                lines.push(Line::from(Span::styled(
                    format!("▣ [{caption}]"),
                    theme::title_style(),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!(
                    "{} Likes · {} Comments · {} Shares",
                    num_fmt::fmt_count(post.likes),
                    num_fmt::fmt_count(post.comments),
                    num_fmt::fmt_count(post.shares),
                ),
                theme::muted(),
            )));
            lines.push(Line::from(vec![
                Span::styled("♡ Like    ", theme::key_hint()),
                Span::styled("✎ Comment    ", theme::key_hint()),
                Span::styled("↪ Share", theme::key_hint()),
            ]));
            lines.push(Line::from(Span::styled(
                separator.clone(),
                theme::key_hint(),
            )));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
            area,
        );
    }

    // ── Right widgets column ─────────────────────────────────────────

    fn render_widgets(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([Constraint::Length(4), Constraint::Min(4)]).split(area);
        self.render_birthdays(frame, rows[0]);
        self.render_contacts(frame, rows[1]);
    }

    fn render_birthdays(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Friends' Birthdays ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = if self.birthdays.is_empty() {
            vec![Line::from(Span::styled(
                " No birthdays today.",
                theme::muted(),
            ))]
        } else {
            self.birthdays
                .iter()
                .map(|c| Line::from(Span::styled(format!(" ✿ {}", c.name), theme::body_style())))
                .collect()
        };
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_contacts(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Suggested for You ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        for contact in &self.contacts {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" ({}) {}", contact.avatar_initial, contact.name),
                    theme::author_style(),
                ),
                Span::styled("  [+ Add]", theme::nav_active()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("     {} mutual friends", contact.mutual_friends),
                theme::muted(),
            )));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn render_stories(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_default());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Span::styled("Stories & Reels", theme::muted())).centered(),
        inner,
    );
}

impl Component for FeedScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.composing {
            return match key.code {
                KeyCode::Esc => Ok(Some(Action::CloseComposer)),
                KeyCode::Enter => {
                    let text = self.composer.value().trim().to_string();
                    if text.is_empty() {
                        Ok(Some(Action::CloseComposer))
                    } else {
                        Ok(Some(Action::SubmitPost(text)))
                    }
                }
                _ => {
                    let _ = self.composer.handle_event(&CrosstermEvent::Key(key));
                    Ok(None)
                }
            };
        }

        match key.code {
            KeyCode::Char('c') => Ok(Some(Action::OpenComposer)),
            KeyCode::Char('j') | KeyCode::Down => Ok(Some(Action::ScrollDown)),
            KeyCode::Char('k') | KeyCode::Up => Ok(Some(Action::ScrollUp)),
            KeyCode::Char('g') => Ok(Some(Action::ScrollToTop)),
            KeyCode::Char('G') => Ok(Some(Action::ScrollToBottom)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::LayoutChanged(mode) => self.layout = *mode,
            Action::Tick => self.now = Utc::now(),
            Action::OpenComposer => self.composing = true,
            Action::CloseComposer => {
                self.composing = false;
                self.composer.reset();
            }
            Action::SubmitPost(body) => self.submit_post(body),
            Action::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
            }
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollToTop => self.scroll = 0,
            Action::ScrollToBottom => self.scroll = self.max_scroll(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        match self.layout {
            LayoutMode::Single => self.render_center(frame, area),
            LayoutMode::Double => {
                let cols =
                    Layout::horizontal([Constraint::Length(26), Constraint::Min(0)]).split(area);
                render_nav_list(frame, cols[0], Route::Feed);
                self.render_center(frame, cols[1]);
            }
            LayoutMode::Triple => {
                let cols = Layout::horizontal([
                    Constraint::Length(26),
                    Constraint::Min(40),
                    Constraint::Length(34),
                ])
                .split(area);
                render_nav_list(frame, cols[0], Route::Feed);
                self.render_center(frame, cols[1]);
                self.render_widgets(frame, cols[2]);
            }
        }
    }

    fn id(&self) -> &'static str {
        "Feed"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use soshell_core::feed::MockFeed;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn composer_opens_and_submits() {
        let feed = MockFeed::new();
        let mut screen = FeedScreen::new(&feed).unwrap();

        let action = screen.handle_key_event(key(KeyCode::Char('c'))).unwrap();
        assert!(matches!(action, Some(Action::OpenComposer)));
        screen.update(&Action::OpenComposer).unwrap();

        for c in "hello".chars() {
            screen.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
        let action = screen.handle_key_event(key(KeyCode::Enter)).unwrap();
        let Some(Action::SubmitPost(text)) = action else {
            panic!("expected SubmitPost");
        };
        assert_eq!(text, "hello");

        screen.update(&Action::SubmitPost(text)).unwrap();
        assert_eq!(screen.posts[0].author, "You");
        assert_eq!(screen.posts[0].body, "hello");
        assert!(!screen.composing);
    }

    #[test]
    fn empty_composer_submit_just_closes() {
        let feed = MockFeed::new();
        let mut screen = FeedScreen::new(&feed).unwrap();
        screen.update(&Action::OpenComposer).unwrap();

        let action = screen.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert!(matches!(action, Some(Action::CloseComposer)));
    }

    #[test]
    fn layout_changes_apply() {
        let feed = MockFeed::new();
        let mut screen = FeedScreen::new(&feed).unwrap();
        assert_eq!(screen.layout, LayoutMode::Double);

        screen
            .update(&Action::LayoutChanged(LayoutMode::Single))
            .unwrap();
        assert_eq!(screen.layout, LayoutMode::Single);
    }

    #[test]
    fn scroll_is_clamped() {
        let feed = MockFeed::new();
        let mut screen = FeedScreen::new(&feed).unwrap();

        screen.update(&Action::ScrollUp).unwrap();
        assert_eq!(screen.scroll, 0);

        screen.update(&Action::ScrollToBottom).unwrap();
        let max = screen.scroll;
        screen.update(&Action::ScrollDown).unwrap();
        assert_eq!(screen.scroll, max);
    }
}
