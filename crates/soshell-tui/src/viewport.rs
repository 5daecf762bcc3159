//! Terminal-backed viewport host.
//!
//! The terminal is this app's "viewport": its column count is the width and
//! crossterm resize events are the platform's change notifications. The app
//! loop feeds every resize into [`TerminalViewport::set_width`], which
//! re-evaluates each live subscription and notifies only the listeners whose
//! match state flipped — the contract [`ViewportHost`] demands.

use std::sync::{Mutex, MutexGuard, PoisonError};

use soshell_core::viewport::{MatchListener, SubscriptionId, ViewportHost, WidthQuery};

/// [`ViewportHost`] implementation over the terminal's column count.
pub struct TerminalViewport {
    inner: Mutex<Inner>,
}

struct Inner {
    width: u32,
    next_id: u64,
    subs: Vec<Subscription>,
}

struct Subscription {
    id: SubscriptionId,
    query: WidthQuery,
    last_match: bool,
    listener: MatchListener,
}

impl TerminalViewport {
    pub fn new(width: u16) -> Self {
        Self {
            inner: Mutex::new(Inner {
                width: u32::from(width),
                next_id: 0,
                subs: Vec::new(),
            }),
        }
    }

    /// Record a new terminal width, notifying listeners whose query result
    /// flipped. Deliveries happen synchronously on the caller's (event
    /// loop's) thread, so they are naturally serialized.
    pub fn set_width(&self, width: u16) {
        let mut inner = self.lock();
        inner.width = u32::from(width);
        let width = inner.width;
        for sub in &mut inner.subs {
            let now = sub.query.matches(width);
            if now != sub.last_match {
                sub.last_match = now;
                (sub.listener)(now);
            }
        }
    }

    /// Current width in columns.
    pub fn width(&self) -> u32 {
        self.lock().width
    }

    // The event loop is effectively single-threaded; a poisoned lock can
    // only mean a listener panicked mid-notification, and the width state
    // itself is still coherent.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ViewportHost for TerminalViewport {
    fn matches(&self, query: WidthQuery) -> bool {
        query.matches(self.lock().width)
    }

    fn subscribe(&self, query: WidthQuery, listener: MatchListener) -> SubscriptionId {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = SubscriptionId(inner.next_id);
        let last_match = query.matches(inner.width);
        inner.subs.push(Subscription {
            id,
            query,
            last_match,
            listener,
        });
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.lock().subs.retain(|s| s.id != id);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn counting_listener() -> (Arc<AtomicU32>, MatchListener) {
        let hits = Arc::new(AtomicU32::new(0));
        let hits_in = Arc::clone(&hits);
        let listener: MatchListener = Box::new(move |_| {
            hits_in.fetch_add(1, Ordering::SeqCst);
        });
        (hits, listener)
    }

    #[test]
    fn matches_evaluates_current_width() {
        let viewport = TerminalViewport::new(80);
        assert!(viewport.matches(WidthQuery::below(100)));
        assert!(!viewport.matches(WidthQuery::below(80)));
    }

    #[test]
    fn listeners_fire_only_on_flips() {
        let viewport = TerminalViewport::new(120);
        let (hits, listener) = counting_listener();
        viewport.subscribe(WidthQuery::below(100), listener);

        viewport.set_width(110); // still wide — no flip
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        viewport.set_width(90); // flips to narrow
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        viewport.set_width(80); // still narrow — no flip
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        viewport.set_width(150); // flips back
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let viewport = TerminalViewport::new(120);
        let (hits, listener) = counting_listener();
        let id = viewport.subscribe(WidthQuery::below(100), listener);

        viewport.unsubscribe(id);
        viewport.set_width(90);
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        // Double-unsubscribe is a no-op, not a panic.
        viewport.unsubscribe(id);
    }
}
