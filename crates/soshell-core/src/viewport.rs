//! Responsive viewport classification.
//!
//! A [`ViewportClassifier`] watches the host platform's viewport width and
//! exposes a reactive boolean — "is the viewport narrow?" — that flips as the
//! width crosses a configurable breakpoint. The platform itself is abstracted
//! behind [`ViewportHost`]: the classifier only needs a synchronous width
//! predicate and a subscribe/unsubscribe pair for change notification. In the
//! TUI the host is backed by terminal resize events; in tests it is a fake.
//!
//! Lifecycle discipline: a classifier owns at most one live subscription,
//! acquired on [`activate`](ViewportClassifier::activate) and released on
//! every deactivation path (explicit [`deactivate`](ViewportClassifier::deactivate),
//! re-activation, breakpoint change, and drop).

use std::sync::Arc;

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::debug;

/// Default breakpoint separating "narrow" from "wide" viewports.
///
/// Matches the common responsive-design convention; hosts measuring in
/// terminal columns will usually configure something far smaller.
pub const DEFAULT_BREAKPOINT: u32 = 768;

// ── Width query ─────────────────────────────────────────────────────

/// The predicate "viewport width ≤ max" derived from a breakpoint.
///
/// A breakpoint of `b` classifies widths strictly below `b` as narrow, so the
/// query upper bound is `b - 1`. A breakpoint of zero has no representable
/// upper bound and the query never matches — the platform's own behavior for
/// degenerate thresholds, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidthQuery {
    max_width: Option<u32>,
}

impl WidthQuery {
    /// Query matching all widths strictly below `breakpoint`.
    pub fn below(breakpoint: u32) -> Self {
        Self {
            max_width: breakpoint.checked_sub(1),
        }
    }

    /// Evaluate the query against a concrete width.
    pub fn matches(self, width: u32) -> bool {
        self.max_width.is_some_and(|max| width <= max)
    }
}

// ── Platform capability ─────────────────────────────────────────────

/// Identifier for a live subscription, vended by a [`ViewportHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Callback invoked with the new match state when a query's result flips.
pub type MatchListener = Box<dyn FnMut(bool) + Send>;

/// The platform's viewport query capability.
///
/// Implementations must evaluate [`matches`](Self::matches) synchronously
/// against the current viewport, deliver listener notifications only when the
/// match state actually changes, serialize deliveries for a given
/// subscription, and guarantee that no notification is dispatched after
/// [`unsubscribe`](Self::unsubscribe) returns.
pub trait ViewportHost: Send + Sync {
    /// Does the current viewport satisfy the query?
    fn matches(&self, query: WidthQuery) -> bool;

    /// Register a change listener for the query. The listener is first
    /// invoked on the next flip, not at registration time.
    fn subscribe(&self, query: WidthQuery, listener: MatchListener) -> SubscriptionId;

    /// Release a subscription. Safe to call with an already-released id.
    fn unsubscribe(&self, id: SubscriptionId);
}

// ── Classifier ──────────────────────────────────────────────────────

struct HeldSubscription {
    host: Arc<dyn ViewportHost>,
    id: SubscriptionId,
}

/// Reactive "is-narrow" classifier over a platform viewport.
///
/// Each instance owns its subscription independently; there is no shared
/// state between classifiers, so several may watch the same host with
/// different breakpoints.
pub struct ViewportClassifier {
    breakpoint: u32,
    narrow: Arc<watch::Sender<bool>>,
    subscription: Option<HeldSubscription>,
}

impl ViewportClassifier {
    /// New classifier with the given breakpoint. Inactive until
    /// [`activate`](Self::activate); the signal starts at `false`.
    pub fn new(breakpoint: u32) -> Self {
        let (narrow, _) = watch::channel(false);
        Self {
            breakpoint,
            narrow: Arc::new(narrow),
            subscription: None,
        }
    }

    /// Current breakpoint.
    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    /// Change the breakpoint. If a subscription is live it is released and a
    /// new one installed under the re-derived query, so the signal
    /// immediately reflects the new threshold.
    pub fn set_breakpoint(&mut self, breakpoint: u32) {
        if breakpoint == self.breakpoint {
            return;
        }
        debug!(old = self.breakpoint, new = breakpoint, "breakpoint changed");
        self.breakpoint = breakpoint;
        if let Some(sub) = self.subscription.take() {
            sub.host.unsubscribe(sub.id);
            self.activate(Some(sub.host));
        }
    }

    /// Start observing the platform.
    ///
    /// With a host: any stale subscription is released first, the signal is
    /// seeded synchronously from the host's current state (no default-false
    /// flash), then a change listener is installed.
    ///
    /// With `None` (a non-interactive environment without a viewport): no
    /// subscription is made and the signal holds the fail-safe default
    /// `false`. Never an error.
    pub fn activate(&mut self, host: Option<Arc<dyn ViewportHost>>) {
        self.deactivate();

        let Some(host) = host else {
            store(&self.narrow, false);
            return;
        };

        let query = WidthQuery::below(self.breakpoint);
        store(&self.narrow, host.matches(query));

        let tx = Arc::clone(&self.narrow);
        let id = host.subscribe(
            query,
            Box::new(move |is_match| {
                store(&tx, is_match);
            }),
        );
        self.subscription = Some(HeldSubscription { host, id });
    }

    /// Release the platform subscription, if any. The signal keeps its last
    /// value but no further notification can alter it.
    pub fn deactivate(&mut self) {
        if let Some(sub) = self.subscription.take() {
            sub.host.unsubscribe(sub.id);
        }
    }

    /// Whether a subscription is currently live.
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Current classification: `true` when the viewport is narrower than the
    /// breakpoint.
    pub fn is_narrow(&self) -> bool {
        *self.narrow.borrow()
    }

    /// Subscribe to the classification as a reactive signal.
    pub fn signal(&self) -> NarrowSignal {
        NarrowSignal {
            rx: self.narrow.subscribe(),
        }
    }
}

impl Default for ViewportClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT)
    }
}

impl Drop for ViewportClassifier {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Publish a value, notifying watchers only when it actually changes.
fn store(tx: &watch::Sender<bool>, value: bool) {
    tx.send_if_modified(|current| {
        if *current == value {
            false
        } else {
            *current = value;
            true
        }
    });
}

// ── Reactive signal handle ──────────────────────────────────────────

/// Read side of a classifier's boolean signal.
///
/// Offers synchronous reads, awaitable change notification, and conversion
/// to a `Stream` for combinator-style consumers.
pub struct NarrowSignal {
    rx: watch::Receiver<bool>,
}

impl NarrowSignal {
    /// Current value.
    pub fn get(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait for the next change, returning the new value.
    /// Returns `None` once the owning classifier has been dropped.
    pub async fn changed(&mut self) -> Option<bool> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }

    /// Convert into a `Stream` of classification values.
    pub fn into_stream(self) -> NarrowWatchStream {
        NarrowWatchStream {
            inner: WatchStream::new(self.rx),
        }
    }
}

/// `Stream` adapter backed by the classifier's `watch` channel.
pub struct NarrowWatchStream {
    inner: WatchStream<bool>,
}

impl futures_core::Stream for NarrowWatchStream {
    type Item = bool;

    fn poll_next(
        mut self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        std::pin::Pin::new(&mut self.inner).poll_next(cx)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;

    /// Fake platform viewport: a width plus flip-on-change listeners,
    /// mirroring the semantics the real terminal host provides.
    struct FakeViewport {
        inner: Mutex<FakeInner>,
    }

    struct FakeInner {
        width: u32,
        next_id: u64,
        subs: Vec<FakeSub>,
        total_subscribes: u64,
    }

    struct FakeSub {
        id: SubscriptionId,
        query: WidthQuery,
        last_match: bool,
        listener: MatchListener,
    }

    impl FakeViewport {
        fn new(width: u32) -> Arc<Self> {
            Arc::new(Self {
                inner: Mutex::new(FakeInner {
                    width,
                    next_id: 0,
                    subs: Vec::new(),
                    total_subscribes: 0,
                }),
            })
        }

        fn set_width(&self, width: u32) {
            let mut inner = self.inner.lock().unwrap();
            inner.width = width;
            for sub in &mut inner.subs {
                let now = sub.query.matches(width);
                if now != sub.last_match {
                    sub.last_match = now;
                    (sub.listener)(now);
                }
            }
        }

        fn live_subscriptions(&self) -> usize {
            self.inner.lock().unwrap().subs.len()
        }

        fn total_subscribes(&self) -> u64 {
            self.inner.lock().unwrap().total_subscribes
        }
    }

    impl ViewportHost for FakeViewport {
        fn matches(&self, query: WidthQuery) -> bool {
            query.matches(self.inner.lock().unwrap().width)
        }

        fn subscribe(&self, query: WidthQuery, listener: MatchListener) -> SubscriptionId {
            let mut inner = self.inner.lock().unwrap();
            inner.next_id += 1;
            inner.total_subscribes += 1;
            let id = SubscriptionId(inner.next_id);
            let last_match = query.matches(inner.width);
            inner.subs.push(FakeSub {
                id,
                query,
                last_match,
                listener,
            });
            id
        }

        fn unsubscribe(&self, id: SubscriptionId) {
            self.inner.lock().unwrap().subs.retain(|s| s.id != id);
        }
    }

    fn host(width: u32) -> (Arc<FakeViewport>, Arc<dyn ViewportHost>) {
        let fake = FakeViewport::new(width);
        let dyn_host: Arc<dyn ViewportHost> = Arc::clone(&fake) as Arc<dyn ViewportHost>;
        (fake, dyn_host)
    }

    #[test]
    fn classification_is_width_strictly_below_breakpoint() {
        for (breakpoint, width, expected) in [
            (768, 767, true),
            (768, 768, false),
            (768, 769, false),
            (1, 0, true),
            (1, 1, false),
            (100, 99, true),
            (100, 100, false),
        ] {
            assert_eq!(
                WidthQuery::below(breakpoint).matches(width),
                expected,
                "breakpoint={breakpoint} width={width}"
            );
        }
    }

    #[test]
    fn zero_breakpoint_never_matches() {
        let query = WidthQuery::below(0);
        assert!(!query.matches(0));
        assert!(!query.matches(1));
    }

    #[test]
    fn headless_activation_is_a_no_op() {
        let mut classifier = ViewportClassifier::default();
        classifier.activate(None);
        assert!(!classifier.is_narrow());
        assert!(!classifier.is_active());
    }

    #[test]
    fn initial_classification_is_synchronous() {
        let (_fake, dyn_host) = host(600);
        let mut classifier = ViewportClassifier::default();
        classifier.activate(Some(dyn_host));
        // No notification has been delivered yet — the seed alone must be right.
        assert!(classifier.is_narrow());
    }

    #[test]
    fn classification_tracks_width_changes() {
        let (fake, dyn_host) = host(1024);
        let mut classifier = ViewportClassifier::new(768);
        classifier.activate(Some(dyn_host));

        assert!(!classifier.is_narrow());
        fake.set_width(600);
        assert!(classifier.is_narrow());
        fake.set_width(900);
        assert!(!classifier.is_narrow());
    }

    #[test]
    fn deactivation_makes_notifications_inert() {
        let (fake, dyn_host) = host(1024);
        let mut classifier = ViewportClassifier::new(768);
        classifier.activate(Some(dyn_host));
        classifier.deactivate();

        assert_eq!(fake.live_subscriptions(), 0);
        fake.set_width(600);
        assert!(!classifier.is_narrow());
    }

    #[test]
    fn drop_releases_the_subscription() {
        let (fake, dyn_host) = host(1024);
        {
            let mut classifier = ViewportClassifier::new(768);
            classifier.activate(Some(dyn_host));
            assert_eq!(fake.live_subscriptions(), 1);
        }
        assert_eq!(fake.live_subscriptions(), 0);
    }

    #[test]
    fn reactivation_replaces_the_stale_subscription() {
        let (fake, dyn_host) = host(1024);
        let mut classifier = ViewportClassifier::new(768);
        classifier.activate(Some(Arc::clone(&dyn_host)));
        classifier.activate(Some(dyn_host));

        // Two subscribes total, but only one may be live.
        assert_eq!(fake.total_subscribes(), 2);
        assert_eq!(fake.live_subscriptions(), 1);
    }

    #[test]
    fn breakpoint_change_rederives_the_query() {
        let (fake, dyn_host) = host(800);
        let mut classifier = ViewportClassifier::new(768);
        classifier.activate(Some(dyn_host));
        assert!(!classifier.is_narrow());

        classifier.set_breakpoint(900);
        // New threshold applies immediately and only one subscription remains.
        assert!(classifier.is_narrow());
        assert_eq!(fake.live_subscriptions(), 1);
        assert_eq!(fake.total_subscribes(), 2);

        fake.set_width(950);
        assert!(!classifier.is_narrow());
    }

    #[test]
    fn instances_own_independent_subscriptions() {
        let (fake, dyn_host) = host(500);
        let mut narrow = ViewportClassifier::new(768);
        let mut compact = ViewportClassifier::new(400);
        narrow.activate(Some(Arc::clone(&dyn_host)));
        compact.activate(Some(dyn_host));

        assert!(narrow.is_narrow());
        assert!(!compact.is_narrow());
        assert_eq!(fake.live_subscriptions(), 2);

        compact.deactivate();
        assert_eq!(fake.live_subscriptions(), 1);
        fake.set_width(300);
        assert!(narrow.is_narrow());
        assert!(!compact.is_narrow());
    }

    #[tokio::test]
    async fn signal_reports_changes() {
        let (fake, dyn_host) = host(1024);
        let mut classifier = ViewportClassifier::new(768);
        classifier.activate(Some(dyn_host));

        let mut signal = classifier.signal();
        assert!(!signal.get());

        fake.set_width(600);
        assert_eq!(signal.changed().await, Some(true));

        fake.set_width(900);
        assert_eq!(signal.changed().await, Some(false));
    }

    #[tokio::test]
    async fn signal_closes_when_classifier_drops() {
        let (_fake, dyn_host) = host(1024);
        let mut classifier = ViewportClassifier::new(768);
        classifier.activate(Some(dyn_host));
        let mut signal = classifier.signal();

        drop(classifier);
        assert_eq!(signal.changed().await, None);
    }
}
