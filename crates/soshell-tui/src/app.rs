//! Application state and the main event loop.
//!
//! Events flow from [`EventReader`] into [`Action`]s; actions mutate app
//! state and fan out to every screen. Terminal resizes feed the
//! [`TerminalViewport`], whose subscriptions drive the two
//! [`ViewportClassifier`]s; whenever their combined [`LayoutMode`] changes,
//! a `LayoutChanged` action is dispatched so screens can re-flow.

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use soshell_config::Config;
use soshell_core::feed::MockFeed;
use soshell_core::viewport::{ViewportClassifier, ViewportHost};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::action::{Action, LayoutMode};
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::route::Route;
use crate::screens::create_screens;
use crate::screens::not_found::NotFoundScreen;
use crate::theme;
use crate::tui::Tui;
use crate::viewport::TerminalViewport;
use crate::widgets::bottom_nav::render_bottom_nav;

const TICK_RATE: Duration = Duration::from_millis(250);
const RENDER_RATE: Duration = Duration::from_millis(33);

/// Where the app currently is: a real route, or an unresolvable path.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    Route(Route),
    NotFound(String),
}

impl Location {
    fn from_path(path: &str) -> Self {
        Route::from_path(path)
            .map_or_else(|| Self::NotFound(path.to_string()), Self::Route)
    }

    fn path(&self) -> &str {
        match self {
            Self::Route(route) => route.href(),
            Self::NotFound(path) => path,
        }
    }

    fn route(&self) -> Option<Route> {
        match self {
            Self::Route(route) => Some(*route),
            Self::NotFound(_) => None,
        }
    }
}

pub struct App {
    location: Location,
    history: Vec<Location>,
    screens: Vec<(Route, Box<dyn Component>)>,
    not_found: NotFoundScreen,
    layout: LayoutMode,
    viewport: Arc<TerminalViewport>,
    narrow: ViewportClassifier,
    wide: ViewportClassifier,
    composing: bool,
    show_help: bool,
    should_quit: bool,
    action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new(config: Config, initial_path: &str, initial_width: u16) -> Result<Self> {
        let feed = MockFeed::new();
        let screens = create_screens(&feed)?;

        let viewport = Arc::new(TerminalViewport::new(initial_width));
        let host: Arc<dyn ViewportHost> = Arc::clone(&viewport) as Arc<dyn ViewportHost>;

        let mut narrow = ViewportClassifier::new(config.breakpoint);
        narrow.activate(Some(Arc::clone(&host)));

        let mut wide = ViewportClassifier::new(config.breakpoint.saturating_add(config.wide_margin));
        wide.activate(Some(host));

        let layout = LayoutMode::from_classifiers(narrow.is_narrow(), wide.is_narrow());
        let location = Location::from_path(initial_path);

        let not_found = match &location {
            Location::NotFound(path) => NotFoundScreen::new(path.clone()),
            Location::Route(_) => NotFoundScreen::new("/"),
        };

        let (action_tx, action_rx) = mpsc::unbounded_channel();

        info!(
            path = initial_path,
            width = initial_width,
            ?layout,
            "app initialized"
        );

        Ok(Self {
            location,
            history: Vec::new(),
            screens,
            not_found,
            layout,
            viewport,
            narrow,
            wide,
            composing: false,
            show_help: false,
            should_quit: false,
            action_tx,
            action_rx,
        })
    }

    pub async fn run(mut self, tui: &mut Tui) -> Result<()> {
        let mut events = EventReader::new(TICK_RATE, RENDER_RATE);

        for (_, screen) in &mut self.screens {
            screen.init(self.action_tx.clone())?;
        }
        self.not_found.init(self.action_tx.clone())?;
        self.set_focus(true);

        // Seed the initial layout into every screen.
        self.action_tx.send(Action::LayoutChanged(self.layout))?;

        loop {
            if let Some(event) = events.next().await {
                match event {
                    Event::Key(key) => self.handle_key(key)?,
                    Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                    Event::Tick => self.action_tx.send(Action::Tick)?,
                    Event::Render => self.action_tx.send(Action::Render)?,
                }
            }

            while let Ok(action) = self.action_rx.try_recv() {
                if let Action::Render = action {
                    tui.draw(|frame| self.draw(frame))?;
                } else {
                    self.process_action(&action)?;
                }
            }

            if self.should_quit {
                break;
            }
        }

        events.stop();
        Ok(())
    }

    // ── Keys ─────────────────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.action_tx.send(Action::ToggleHelp)?;
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.action_tx.send(Action::Quit)?;
            return Ok(());
        }

        // While the composer is open the active screen owns the keyboard.
        if self.composing {
            return self.delegate_key(key);
        }

        match key.code {
            KeyCode::Char('q') => self.action_tx.send(Action::Quit)?,
            KeyCode::Char('?') => self.action_tx.send(Action::ToggleHelp)?,
            KeyCode::Char(c @ '1'..='5') => {
                let n = u8::try_from(u32::from(c) - u32::from('0')).unwrap_or(0);
                if let Some(route) = Route::from_number(n) {
                    self.action_tx.send(Action::Navigate(route))?;
                }
            }
            KeyCode::Tab => {
                let current = self.location.route().unwrap_or_default();
                self.action_tx.send(Action::Navigate(current.next()))?;
            }
            KeyCode::BackTab => {
                let current = self.location.route().unwrap_or_default();
                self.action_tx.send(Action::Navigate(current.prev()))?;
            }
            KeyCode::Esc => self.action_tx.send(Action::GoBack)?,
            _ => self.delegate_key(key)?,
        }
        Ok(())
    }

    fn delegate_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(action) = self.active_screen_mut().handle_key_event(key)? {
            self.action_tx.send(action)?;
        }
        Ok(())
    }

    // ── Actions ──────────────────────────────────────────────────────

    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Resize(width, _) => self.apply_resize(*width)?,
            Action::Navigate(route) => self.navigate(Location::Route(*route)),
            Action::GoBack => {
                if let Some(previous) = self.history.pop() {
                    self.set_location(previous);
                }
            }
            Action::GoHome => self.navigate(Location::Route(Route::Feed)),
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::OpenComposer => self.composing = true,
            Action::CloseComposer | Action::SubmitPost(_) => self.composing = false,
            _ => {}
        }

        // Fan out to every screen so inactive ones stay current.
        let mut follow_ups = Vec::new();
        for (_, screen) in &mut self.screens {
            if let Some(next) = screen.update(action)? {
                follow_ups.push(next);
            }
        }
        if let Some(next) = self.not_found.update(action)? {
            follow_ups.push(next);
        }
        for next in follow_ups {
            self.action_tx.send(next)?;
        }
        Ok(())
    }

    /// Push a resize into the viewport and re-derive the layout mode.
    fn apply_resize(&mut self, width: u16) -> Result<()> {
        self.viewport.set_width(width);
        let mode = LayoutMode::from_classifiers(self.narrow.is_narrow(), self.wide.is_narrow());
        if mode != self.layout {
            debug!(width, ?mode, "layout mode changed");
            self.layout = mode;
            self.action_tx.send(Action::LayoutChanged(mode))?;
        }
        Ok(())
    }

    fn navigate(&mut self, target: Location) {
        if target == self.location {
            return;
        }
        let previous = self.location.clone();
        self.history.push(previous);
        self.set_location(target);
    }

    fn set_location(&mut self, target: Location) {
        self.set_focus(false);
        if let Location::NotFound(path) = &target {
            self.not_found.set_path(path.clone());
        }
        info!(path = target.path(), "navigated");
        self.location = target;
        self.composing = false;
        self.set_focus(true);
    }

    fn set_focus(&mut self, focused: bool) {
        self.active_screen_mut().set_focused(focused);
    }

    fn active_screen_mut(&mut self) -> &mut dyn Component {
        match self.location.route() {
            Some(active) => {
                // Registry always contains every route.
                self.screens
                    .iter_mut()
                    .find(|(route, _)| *route == active)
                    .map_or(&mut self.not_found as &mut dyn Component, |(_, s)| {
                        s.as_mut()
                    })
            }
            None => &mut self.not_found,
        }
    }

    fn active_screen(&self) -> &dyn Component {
        match self.location.route() {
            Some(active) => self
                .screens
                .iter()
                .find(|(route, _)| *route == active)
                .map_or(&self.not_found as &dyn Component, |(_, s)| s.as_ref()),
            None => &self.not_found,
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn draw(&self, frame: &mut Frame) {
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            frame.area(),
        );

        let rows = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.active_screen().render(frame, rows[0]);

        let active = self.location.route().unwrap_or_default();
        if self.layout.shows_bottom_nav() {
            render_bottom_nav(frame, rows[1], active);
        } else {
            render_tab_bar(frame, rows[1], active);
        }

        self.render_status_bar(frame, rows[2]);

        if self.show_help {
            render_help(frame, frame.area());
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let left = Line::from(vec![
            Span::styled(format!(" {}", self.location.path()), theme::body_style()),
            Span::styled(
                format!("  {}cols · {:?}", self.viewport.width(), self.layout),
                theme::muted(),
            ),
        ]);
        let right = Line::from(vec![
            Span::styled("? ", theme::key_hint_key()),
            Span::styled("help  ", theme::key_hint()),
            Span::styled("q ", theme::key_hint_key()),
            Span::styled("quit ", theme::key_hint()),
        ])
        .right_aligned();

        frame.render_widget(Paragraph::new(left), area);
        frame.render_widget(Paragraph::new(right), area);
    }

    #[cfg(test)]
    fn drain_actions(&mut self) -> Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            if !matches!(action, Action::Render) {
                self.process_action(&action)?;
            }
        }
        Ok(())
    }
}

/// Wide-layout alternative to the bottom nav: numbered tabs in a row.
fn render_tab_bar(frame: &mut Frame, area: Rect, active: Route) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for route in Route::ALL {
        let style = if route == active {
            theme::nav_active()
        } else {
            theme::nav_inactive()
        };
        spans.push(Span::styled(
            format!(" {} {} ", route.number(), route.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let [popup] = Layout::horizontal([Constraint::Length(44)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(14)])
        .flex(Flex::Center)
        .areas(popup);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Keys ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused())
        .style(Style::default().bg(theme::BG_HIGHLIGHT));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let entry = |keys: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!(" {keys:<12}"), theme::key_hint_key()),
            Span::styled(what, theme::key_hint()),
        ])
    };
    let lines = vec![
        entry("1-5", "jump to section"),
        entry("Tab / S-Tab", "next / previous section"),
        entry("Esc", "back"),
        entry("j / k", "scroll"),
        entry("g / G", "top / bottom"),
        entry("c", "compose a post"),
        entry("Enter", "submit post"),
        entry("?", "toggle this help"),
        entry("q / Ctrl-C", "quit"),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn app(path: &str, width: u16) -> App {
        App::new(Config::default(), path, width).unwrap()
    }

    #[test]
    fn initial_layout_follows_width() {
        // Defaults: breakpoint 100, wide margin 60.
        assert_eq!(app("/", 80).layout, LayoutMode::Single);
        assert_eq!(app("/", 120).layout, LayoutMode::Double);
        assert_eq!(app("/", 200).layout, LayoutMode::Triple);
    }

    #[test]
    fn unknown_path_lands_on_not_found() {
        let app = app("/bogus", 120);
        assert_eq!(app.location, Location::NotFound("/bogus".into()));
        assert_eq!(app.active_screen().id(), "NotFound");
    }

    #[test]
    fn resize_crosses_breakpoints() {
        let mut app = app("/", 200);
        assert_eq!(app.layout, LayoutMode::Triple);

        app.process_action(&Action::Resize(120, 40)).unwrap();
        assert_eq!(app.layout, LayoutMode::Double);

        app.process_action(&Action::Resize(80, 40)).unwrap();
        assert_eq!(app.layout, LayoutMode::Single);
        assert!(app.layout.shows_bottom_nav());

        app.process_action(&Action::Resize(90, 40)).unwrap();
        assert_eq!(app.layout, LayoutMode::Single);
    }

    #[test]
    fn navigation_updates_location_and_history() {
        let mut app = app("/", 120);

        app.process_action(&Action::Navigate(Route::Friends)).unwrap();
        assert_eq!(app.location, Location::Route(Route::Friends));

        app.process_action(&Action::Navigate(Route::Menu)).unwrap();
        app.process_action(&Action::GoBack).unwrap();
        assert_eq!(app.location, Location::Route(Route::Friends));

        app.process_action(&Action::GoBack).unwrap();
        assert_eq!(app.location, Location::Route(Route::Feed));
    }

    #[test]
    fn go_home_leaves_not_found() {
        let mut app = app("/bogus", 120);
        app.process_action(&Action::GoHome).unwrap();
        assert_eq!(app.location, Location::Route(Route::Feed));
    }

    #[test]
    fn navigating_to_current_route_is_a_no_op() {
        let mut app = app("/", 120);
        app.process_action(&Action::Navigate(Route::Feed)).unwrap();
        assert!(app.history.is_empty());
    }

    #[test]
    fn composer_state_tracks_actions() {
        let mut app = app("/", 120);
        app.process_action(&Action::OpenComposer).unwrap();
        assert!(app.composing);
        app.process_action(&Action::SubmitPost("hi".into())).unwrap();
        assert!(!app.composing);
    }

    #[test]
    fn number_keys_dispatch_navigation() {
        let mut app = app("/", 120);
        app.handle_key(KeyEvent::from(KeyCode::Char('3'))).unwrap();
        app.drain_actions().unwrap();
        assert_eq!(app.location, Location::Route(Route::Watch));
    }
}
