//! Terminal event intake.
//!
//! A background task multiplexes crossterm's `EventStream` with tick and
//! render intervals into one channel. Resize events carry the raw
//! dimensions because the app loop feeds them to the viewport host.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized to (cols, rows).
    Resize(u16, u16),
    /// Periodic tick for relative-timestamp refresh.
    Tick,
    /// Render tick (~30 FPS).
    Render,
}

fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
        // Key releases/repeats, mouse, focus, and paste are not consumed.
        _ => None,
    }
}

/// Handle to the background reader; dropping it cancels the task.
pub struct EventReader {
    rx: UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventReader {
    /// Spawn the reader with the given tick and render intervals.
    pub fn new(tick_rate: Duration, render_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        tokio::spawn(pump(tx, cancel.clone(), tick_rate, render_rate));
        Self { rx, cancel }
    }

    /// Next event, or `None` once the reader has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn pump(
    tx: UnboundedSender<Event>,
    cancel: CancellationToken,
    tick_rate: Duration,
    render_rate: Duration,
) {
    let mut stream = EventStream::new();
    let mut ticker = interval(tick_rate);
    let mut renderer = interval(render_rate);
    // Skip rather than burst when the loop falls behind.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    renderer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let event = tokio::select! {
            () = cancel.cancelled() => return,
            _ = ticker.tick() => Event::Tick,
            _ = renderer.tick() => Event::Render,
            Some(Ok(raw)) = stream.next() => match translate(raw) {
                Some(event) => event,
                None => continue,
            },
        };
        // Receiver gone means the app loop has exited.
        if tx.send(event).is_err() {
            return;
        }
    }
}
